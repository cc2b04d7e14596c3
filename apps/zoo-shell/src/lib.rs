//! # Zoo Shell Library
//!
//! Everything behind the `zoo-shell` binary: configuration, facility state,
//! command parsing and the REPL. `main.rs` only wires these together.
//!
//! ## Module Organization
//! ```text
//! zoo_shell/
//! ├── lib.rs          ◄─── You are here (logging setup, module exports)
//! ├── config.rs       ◄─── zoo.toml + ZOO_* environment
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   └── zoo.rs      ◄─── ZooState: the facility behind a mutex
//! ├── commands/
//! │   ├── mod.rs      ◄─── Parsing, dispatch, text rendering
//! │   ├── area.rs     ◄─── Layout commands
//! │   ├── animal.rs   ◄─── Residents
//! │   ├── visit.rs    ◄─── Paths and visits
//! │   └── ticket.rs   ◄─── Fee, stock, payments
//! ├── interactive.rs  ◄─── REPL and script runner
//! └── error.rs        ◄─── ApiError returned by every command
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Load configuration (--config, default path, ZOO_* overrides)        │
//! │  2. Initialize logging to stderr (RUST_LOG wins over log_filter)        │
//! │  3. Build ZooState from the configured layout                           │
//! │  4. Run: one command from argv, a script file, or the REPL              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod interactive;
pub mod state;

use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so command output on stdout stays clean for scripts.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=zoo_core=trace` - Trace the facility logic only
/// - Default: the configured `log_filter`
pub fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
