//! # Shell State
//!
//! Everything the shell holds between commands.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  main.rs                                                                │
//! │  ShellConfig::load() ──► ZooState::from_config() ──► Shell::new(state)  │
//! │                                                                         │
//! │  ┌──────────────────────────┐                                           │
//! │  │        ZooState          │                                           │
//! │  │                          │                                           │
//! │  │  Arc<Mutex<Zoo>>         │  graph + ticket machine + rules           │
//! │  └──────────────────────────┘                                           │
//! │                                                                         │
//! │  The config itself is read-only after startup and is not state.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod zoo;

pub use zoo::ZooState;
