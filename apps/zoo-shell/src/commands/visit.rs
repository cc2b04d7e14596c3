//! # Path & Visit Commands
//!
//! ```text
//! > path 0 1 2        → Path 0 → 1 → 2 is allowed
//! > visit 0 1 2       → Seen: Marty, Gigi
//! ```

use serde::Serialize;
use tracing::debug;
use zoo_core::{AreaId, Zoo};

use crate::error::ApiError;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathCheck {
    pub path: Vec<AreaId>,
    pub allowed: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitReport {
    pub path: Vec<AreaId>,
    pub seen: Vec<String>,
}

pub fn check_path(zoo: &Zoo, path: Vec<AreaId>) -> PathCheck {
    let allowed = zoo.is_path_allowed(&path);
    PathCheck { path, allowed }
}

pub fn visit(zoo: &Zoo, path: Vec<AreaId>) -> Result<VisitReport, ApiError> {
    debug!(?path, "visit command");
    let seen = zoo.visit(&path)?;
    Ok(VisitReport { path, seen })
}
