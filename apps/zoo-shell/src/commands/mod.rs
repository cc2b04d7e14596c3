//! # Shell Commands
//!
//! Every command the shell understands, parsed from one line of input.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (parsing, dispatch, responses)
//! ├── area.rs     ◄─── add-area, remove-area, area, connect, unreachable
//! ├── animal.rs   ◄─── add-animal
//! ├── visit.rs    ◄─── path, visit
//! └── ticket.rs   ◄─── fee, supply, pay
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  "pay 20=1 50p=1"                                                       │
//! │         │                                                               │
//! │         ▼  Command::parse                                               │
//! │  Command::Pay(CashCount { £20 x1, 50p x1 })                             │
//! │         │                                                               │
//! │         ▼  execute(&ZooState, command)                                  │
//! │  state.with_zoo(|zoo| ticket::pay(zoo, inserted))                       │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Result<Response, ApiError> ──► text or JSON                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod animal;
pub mod area;
pub mod ticket;
pub mod visit;

use std::fmt;

use serde::Serialize;
use zoo_core::validation::validate_count;
use zoo_core::{
    AnimalKind, AreaId, AreaKind, CashCount, Denomination, PaymentStatus, RefundReason,
};

use crate::error::ApiError;
use crate::state::ZooState;

/// Help text printed by `help`.
pub const HELP: &str = "\
Commands:
  add-area <entrance|picnic|enclosure|aquarium|cage> [capacity]
  remove-area <id>
  area <id>
  connect <from> <to>
  add-animal <area> <kind> <nickname>
  path <id> [id...]
  visit <id> [id...]
  unreachable
  fee [<pounds> <pence>]
  supply [<denomination>=<count>...]
  pay <denomination>=<count>...
  help
  quit

Denominations: 20 10 5 2 1 50p 20p 10p
Animals: lion zebra gazelle shark starfish seal parrot buzzard";

// =============================================================================
// Parsing
// =============================================================================

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddArea { kind: AreaKind, capacity: usize },
    RemoveArea(AreaId),
    ShowArea(AreaId),
    Connect { from: AreaId, to: AreaId },
    AddAnimal {
        area: AreaId,
        kind: AnimalKind,
        nickname: String,
    },
    Path(Vec<AreaId>),
    Visit(Vec<AreaId>),
    Unreachable,
    Fee(Option<(i64, i64)>),
    Supply(Option<CashCount>),
    Pay(CashCount),
    Help,
    Quit,
}

impl Command {
    /// Parses one line. Blank lines and `#` comments give `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Command>, ApiError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let mut words = line.split_whitespace();
        let Some(word) = words.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = words.collect();

        let command = match word.to_lowercase().as_str() {
            "add-area" => {
                let kind = required(&args, 0, "area kind")?.parse()?;
                let capacity = match args.get(1) {
                    Some(raw) => {
                        zoo_core::validation::validate_capacity(parse_int(raw, "capacity")?)?
                    }
                    None => 0,
                };
                Command::AddArea { kind, capacity }
            }
            "remove-area" => Command::RemoveArea(required(&args, 0, "area id")?.parse()?),
            "area" => Command::ShowArea(required(&args, 0, "area id")?.parse()?),
            "connect" => Command::Connect {
                from: required(&args, 0, "from")?.parse()?,
                to: required(&args, 1, "to")?.parse()?,
            },
            "add-animal" => {
                let area = required(&args, 0, "area id")?.parse()?;
                let kind = required(&args, 1, "animal kind")?.parse()?;
                required(&args, 2, "nickname")?;
                Command::AddAnimal {
                    area,
                    kind,
                    nickname: args[2..].join(" "),
                }
            }
            "path" => Command::Path(parse_path(&args)?),
            "visit" => Command::Visit(parse_path(&args)?),
            "unreachable" => Command::Unreachable,
            "fee" => match args.as_slice() {
                [] => Command::Fee(None),
                [pounds, pence] => Command::Fee(Some((
                    parse_int(pounds, "pounds")?,
                    parse_int(pence, "pence")?,
                ))),
                _ => return Err(ApiError::validation("usage: fee [<pounds> <pence>]")),
            },
            "supply" if args.is_empty() => Command::Supply(None),
            "supply" => Command::Supply(Some(parse_cash(&args)?)),
            "pay" => {
                required(&args, 0, "cash")?;
                Command::Pay(parse_cash(&args)?)
            }
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(ApiError::unknown_command(other)),
        };

        Ok(Some(command))
    }
}

fn required<'a>(args: &[&'a str], index: usize, what: &str) -> Result<&'a str, ApiError> {
    args.get(index)
        .copied()
        .ok_or_else(|| ApiError::validation(format!("missing {}", what)))
}

fn parse_int(raw: &str, field: &str) -> Result<i64, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::validation(format!("{} must be a whole number, got '{}'", field, raw)))
}

fn parse_path(args: &[&str]) -> Result<Vec<AreaId>, ApiError> {
    if args.is_empty() {
        return Err(ApiError::validation("a path needs at least one area id"));
    }
    args.iter()
        .map(|raw| raw.parse::<AreaId>().map_err(ApiError::from))
        .collect()
}

/// Parses `20=1 50p=2 ...`. Repeated denominations add up; a total that
/// no longer fits a ledger count is rejected.
fn parse_cash(args: &[&str]) -> Result<CashCount, ApiError> {
    let pairs = args
        .iter()
        .map(|pair| -> Result<(Denomination, u32), ApiError> {
            let (denomination, count) = pair.split_once('=').ok_or_else(|| {
                ApiError::validation(format!("expected <denomination>=<count>, got '{}'", pair))
            })?;
            let denomination: Denomination = denomination.parse()?;
            let count = validate_count(parse_int(count, "count")?)?;
            Ok((denomination, count))
        })
        .collect::<Result<Vec<_>, ApiError>>()?;
    Ok(CashCount::try_from_pairs(pairs)?)
}

// =============================================================================
// Dispatch
// =============================================================================

/// What a command produced.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Response {
    AreaCreated(area::AreaCreated),
    AreaRemoved(area::Removed),
    Area(area::AreaView),
    Connected(area::Connected),
    Unreachable(area::UnreachableView),
    Admission(animal::AdmissionView),
    Path(visit::PathCheck),
    Visit(visit::VisitReport),
    Fee(ticket::FeeView),
    Supply(ticket::SupplyView),
    Payment(ticket::PaymentView),
    Help { text: String },
    Quit,
}

/// Runs one command against the facility, inside a single lock scope.
pub fn execute(state: &ZooState, command: Command) -> Result<Response, ApiError> {
    state.with_zoo(|zoo| -> Result<Response, ApiError> {
        let response = match command {
            Command::AddArea { kind, capacity } => {
                Response::AreaCreated(area::add_area(zoo, kind, capacity)?)
            }
            Command::RemoveArea(id) => Response::AreaRemoved(area::remove_area(zoo, id)?),
            Command::ShowArea(id) => Response::Area(area::show_area(zoo, id)?),
            Command::Connect { from, to } => Response::Connected(area::connect(zoo, from, to)?),
            Command::AddAnimal {
                area,
                kind,
                nickname,
            } => Response::Admission(animal::add_animal(zoo, area, kind, &nickname)?),
            Command::Path(path) => Response::Path(visit::check_path(zoo, path)),
            Command::Visit(path) => Response::Visit(visit::visit(zoo, path)?),
            Command::Unreachable => Response::Unreachable(area::unreachable(zoo)),
            Command::Fee(new_fee) => Response::Fee(ticket::fee(zoo, new_fee)?),
            Command::Supply(stock) => Response::Supply(ticket::supply(zoo, stock)),
            Command::Pay(inserted) => Response::Payment(ticket::pay(zoo, inserted)),
            Command::Help => Response::Help {
                text: HELP.to_string(),
            },
            Command::Quit => Response::Quit,
        };
        Ok(response)
    })
}

// =============================================================================
// Text Rendering
// =============================================================================

fn join_ids(ids: &[AreaId], separator: &str) -> String {
    ids.iter()
        .map(AreaId::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::AreaCreated(created) => {
                write!(f, "Area {} ({})", created.id, created.kind)
            }
            Response::AreaRemoved(removed) => write!(f, "Area {} removed", removed.id),
            Response::Area(view) => {
                write!(f, "Area {}: {}", view.id, view.kind)?;
                if let Some(capacity) = view.capacity {
                    write!(f, ", {}/{} residents", view.residents.len(), capacity)?;
                    for resident in &view.residents {
                        write!(f, "\n  {} ({})", resident.nickname, resident.kind)?;
                    }
                }
                if view.exits.is_empty() {
                    write!(f, "\n  exits: none")
                } else {
                    write!(f, "\n  exits: {}", join_ids(&view.exits, ", "))
                }
            }
            Response::Connected(c) => write!(f, "Path {} → {} opened", c.from, c.to),
            Response::Unreachable(view) if view.areas.is_empty() => {
                write!(f, "Unreachable areas: none")
            }
            Response::Unreachable(view) => {
                write!(f, "Unreachable areas: {}", join_ids(&view.areas, ", "))
            }
            Response::Admission(view) => write!(
                f,
                "{} the {}: {} (code {})",
                view.nickname, view.kind, view.result, view.code
            ),
            Response::Path(check) => write!(
                f,
                "Path {} is {}",
                join_ids(&check.path, " → "),
                if check.allowed { "allowed" } else { "not allowed" }
            ),
            Response::Visit(report) if report.seen.is_empty() => write!(f, "Seen: nobody"),
            Response::Visit(report) => write!(f, "Seen: {}", report.seen.join(", ")),
            Response::Fee(view) => write!(f, "Entrance fee: {}", view.display),
            Response::Supply(view) => write!(
                f,
                "Stock: {} ({} pieces, total {})",
                view.stock, view.pieces, view.total
            ),
            Response::Payment(view) => match view.status {
                PaymentStatus::Exact => write!(f, "Paid {} exactly. No change.", view.paid),
                PaymentStatus::ChangeGiven => write!(
                    f,
                    "Paid {}. Change {}: {}",
                    view.paid, view.returned_total, view.returned
                ),
                PaymentStatus::Refunded { reason } => {
                    let why = match reason {
                        RefundReason::InsufficientPayment => "not enough paid",
                        RefundReason::InsufficientStock => "not enough change in the machine",
                        RefundReason::ChangeUnavailable => "change unavailable",
                        RefundReason::StockOverflow => "machine is full",
                    };
                    write!(f, "Refunded ({}): {}", why, view.returned)
                }
                PaymentStatus::ShortChanged { shortfall } => write!(
                    f,
                    "Paid {}. Change {}: {} (short by {})",
                    view.paid, view.returned_total, view.returned, shortfall
                ),
            },
            Response::Help { text } => f.write_str(text),
            Response::Quit => write!(f, "Goodbye"),
        }
    }
}
