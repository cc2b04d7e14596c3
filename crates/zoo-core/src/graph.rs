//! # Area Graph
//!
//! The facility's one-way system: areas are nodes, paths are directed edges.
//!
//! ## Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   areas:        0 ─ Entrance    1 ─ Enclosure    2 ─ Picnic   3 ─ Cage  │
//! │                                                                         │
//! │   connections:  0 → [1, 2]                                              │
//! │                 1 → [2]                                                 │
//! │                 2 → [0]          (cycles are fine)                      │
//! │                 3 → []           (nothing leads to 3: unreachable)      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - `AreaId(0)` always exists and is the only entrance.
//! - Ids are never reused: the counter only moves forward.
//! - Edges are kept in creation order and never removed. Duplicates are kept.
//! - An edge may point at an id that no longer exists. Lookups treat such a
//!   target as a dead end.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use tracing::{debug, trace};

use crate::error::{CoreError, CoreResult};
use crate::types::{Area, AreaId};

/// Directed graph of facility areas.
#[derive(Debug, Clone)]
pub struct AreaGraph {
    areas: BTreeMap<AreaId, Area>,
    connections: BTreeMap<AreaId, Vec<AreaId>>,
    last_id: AreaId,
}

impl Default for AreaGraph {
    fn default() -> Self {
        AreaGraph::new()
    }
}

impl AreaGraph {
    /// Creates a graph holding only the entrance.
    pub fn new() -> Self {
        let mut areas = BTreeMap::new();
        areas.insert(AreaId::ENTRANCE, Area::Entrance);
        let mut connections = BTreeMap::new();
        connections.insert(AreaId::ENTRANCE, Vec::new());

        AreaGraph {
            areas,
            connections,
            last_id: AreaId::ENTRANCE,
        }
    }

    // =========================================================================
    // Areas
    // =========================================================================

    /// Adds an area and returns its freshly allocated id.
    ///
    /// A second entrance is refused with [`CoreError::DuplicateOrigin`]
    /// and no id is consumed.
    pub fn add_area(&mut self, area: Area) -> CoreResult<AreaId> {
        if area.is_entrance() {
            return Err(CoreError::DuplicateOrigin {
                existing: AreaId::ENTRANCE,
            });
        }

        let id = self.last_id.next().ok_or(CoreError::IdsExhausted)?;
        self.last_id = id;

        debug!(%id, kind = %area.kind(), "Area added");
        self.areas.insert(id, area);
        self.connections.insert(id, Vec::new());
        Ok(id)
    }

    /// Removes an area together with its outgoing paths.
    ///
    /// ## Returns
    /// - `Err(CannotRemoveOrigin)` for the entrance (nothing changes)
    /// - `Ok(None)` for an id that isn't there
    /// - `Ok(Some(area))` with the removed area otherwise
    ///
    /// Edges from other areas into the removed one are left in place.
    pub fn remove_area(&mut self, id: AreaId) -> CoreResult<Option<Area>> {
        if id.is_entrance() {
            return Err(CoreError::CannotRemoveOrigin);
        }

        self.connections.remove(&id);
        let removed = self.areas.remove(&id);
        if removed.is_some() {
            debug!(%id, "Area removed");
        }
        Ok(removed)
    }

    pub fn area(&self, id: AreaId) -> Option<&Area> {
        self.areas.get(&id)
    }

    pub fn area_mut(&mut self, id: AreaId) -> Option<&mut Area> {
        self.areas.get_mut(&id)
    }

    pub fn contains(&self, id: AreaId) -> bool {
        self.areas.contains_key(&id)
    }

    /// Ids of every current area, ascending.
    pub fn area_ids(&self) -> Vec<AreaId> {
        self.areas.keys().copied().collect()
    }

    /// Number of current areas, entrance included.
    pub fn len(&self) -> usize {
        self.areas.len()
    }

    /// Always false: the entrance cannot be removed.
    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    /// The most recently allocated id.
    pub fn last_id(&self) -> AreaId {
        self.last_id
    }

    // =========================================================================
    // Connections
    // =========================================================================

    /// Opens a one-way path `from → to`.
    ///
    /// `to` is not checked. `from` must still have an adjacency entry,
    /// otherwise there is nowhere to keep the edge and `AreaNotFound(from)`
    /// is returned.
    pub fn connect(&mut self, from: AreaId, to: AreaId) -> CoreResult<()> {
        let adjacent = self
            .connections
            .get_mut(&from)
            .ok_or(CoreError::AreaNotFound(from))?;
        adjacent.push(to);
        trace!(%from, %to, "Areas connected");
        Ok(())
    }

    /// Outgoing paths of `id`, in the order they were opened.
    pub fn adjacent(&self, id: AreaId) -> Option<&[AreaId]> {
        self.connections.get(&id).map(Vec::as_slice)
    }

    /// Whether a single step `from → to` exists.
    pub fn has_edge(&self, from: AreaId, to: AreaId) -> bool {
        self.adjacent(from)
            .is_some_and(|adjacent| adjacent.contains(&to))
    }

    /// Checks that every consecutive pair of `path` is a direct edge.
    ///
    /// A single-element path is always allowed, whatever the id. An empty
    /// path names no walk at all and is not allowed.
    pub fn is_path_allowed(&self, path: &[AreaId]) -> bool {
        match path {
            [] => false,
            [_] => true,
            _ => path.windows(2).all(|step| self.has_edge(step[0], step[1])),
        }
    }

    // =========================================================================
    // Reachability
    // =========================================================================

    /// Every current area reachable from `start` by following paths,
    /// `start` included.
    ///
    /// Breadth-first with an explicit visited set, so cycles terminate and
    /// no area is expanded twice. An unknown `start` reaches nothing.
    pub fn reachable_from(&self, start: AreaId) -> BTreeSet<AreaId> {
        let mut visited = BTreeSet::new();
        if !self.contains(start) {
            return visited;
        }

        let mut frontier = VecDeque::from([start]);
        visited.insert(start);

        while let Some(current) = frontier.pop_front() {
            let Some(adjacent) = self.adjacent(current) else {
                continue;
            };
            for &next in adjacent {
                if self.contains(next) && visited.insert(next) {
                    frontier.push_back(next);
                }
            }
        }

        visited
    }

    /// Areas that no walk from the entrance can reach, ascending.
    pub fn unreachable_areas(&self) -> Vec<AreaId> {
        let reachable = self.reachable_from(AreaId::ENTRANCE);
        self.area_ids()
            .into_iter()
            .filter(|id| !reachable.contains(id))
            .collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
