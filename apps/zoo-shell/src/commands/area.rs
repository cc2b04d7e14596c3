//! # Area Commands
//!
//! Building and inspecting the facility layout.
//!
//! ```text
//! > add-area enclosure 4        → Area 1 added (enclosure)
//! > connect 0 1                 → Path 0 → 1 opened
//! > area 1                      → Area 1: enclosure, 0/4 residents, exits [ ]
//! > unreachable                 → Unreachable areas: none
//! > remove-area 1               → Area 1 removed
//! ```

use serde::Serialize;
use tracing::debug;
use zoo_core::{Area, AreaId, AreaKind, Zoo};

use crate::error::ApiError;

/// A newly created (or, for a second entrance, existing) area.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaCreated {
    pub id: AreaId,
    pub kind: String,
}

/// Snapshot of one area for display.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaView {
    pub id: AreaId,
    pub kind: String,
    /// `None` for areas that aren't habitats
    pub capacity: Option<usize>,
    pub residents: Vec<ResidentView>,
    pub exits: Vec<AreaId>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResidentView {
    pub nickname: String,
    pub kind: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Connected {
    pub from: AreaId,
    pub to: AreaId,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Removed {
    pub id: AreaId,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnreachableView {
    pub areas: Vec<AreaId>,
}

impl AreaView {
    fn from_area(id: AreaId, area: &Area, exits: &[AreaId]) -> Self {
        let habitat = area.as_habitat();
        AreaView {
            id,
            kind: area.kind().to_string(),
            capacity: habitat.map(|h| h.capacity()),
            residents: habitat
                .map(|h| {
                    h.inhabitants()
                        .iter()
                        .map(|a| ResidentView {
                            nickname: a.nickname().to_string(),
                            kind: a.kind().to_string(),
                        })
                        .collect()
                })
                .unwrap_or_default(),
            exits: exits.to_vec(),
        }
    }
}

pub fn add_area(zoo: &mut Zoo, kind: AreaKind, capacity: usize) -> Result<AreaCreated, ApiError> {
    debug!(%kind, capacity, "add-area command");
    let id = zoo.add_area(Area::from_kind(kind, capacity))?;
    let kind = zoo
        .area(id)
        .map(|area| area.kind().to_string())
        .unwrap_or_else(|| kind.to_string());
    Ok(AreaCreated { id, kind })
}

pub fn remove_area(zoo: &mut Zoo, id: AreaId) -> Result<Removed, ApiError> {
    debug!(%id, "remove-area command");
    zoo.remove_area(id)?;
    Ok(Removed { id })
}

pub fn show_area(zoo: &Zoo, id: AreaId) -> Result<AreaView, ApiError> {
    let area = zoo
        .area(id)
        .ok_or(zoo_core::CoreError::AreaNotFound(id))?;
    let exits = zoo.graph().adjacent(id).unwrap_or_default();
    Ok(AreaView::from_area(id, area, exits))
}

pub fn connect(zoo: &mut Zoo, from: AreaId, to: AreaId) -> Result<Connected, ApiError> {
    debug!(%from, %to, "connect command");
    zoo.connect_areas(from, to)?;
    Ok(Connected { from, to })
}

pub fn unreachable(zoo: &Zoo) -> UnreachableView {
    UnreachableView {
        areas: zoo.find_unreachable_areas(),
    }
}
