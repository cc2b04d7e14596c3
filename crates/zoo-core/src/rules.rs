//! # Habitat Rules
//!
//! Which habitat each animal kind lives in, and which kinds tolerate each
//! other. The facility only ever talks to the [`HabitatRules`] trait, so a
//! different rule book can be plugged in without touching the graph or the
//! admission logic.
//!
//! ## Standard Rule Book
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Kind       Habitat     Tolerates                                       │
//! │  ────────   ─────────   ─────────────────────────                       │
//! │  Lion       Enclosure   Lion                                            │
//! │  Zebra      Enclosure   Zebra, Gazelle                                  │
//! │  Gazelle    Enclosure   Gazelle, Zebra                                  │
//! │  Shark      Aquarium    Shark, Starfish                                 │
//! │  Starfish   Aquarium    Starfish, Shark, Seal                           │
//! │  Seal       Aquarium    Seal, Starfish                                  │
//! │  Parrot     Cage        Parrot                                          │
//! │  Buzzard    Cage        Buzzard                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Note that Shark and Seal both tolerate Starfish but not each other.

use crate::types::{AnimalKind, HabitatCategory};

/// Pure lookup the facility consults before admitting an animal.
pub trait HabitatRules {
    /// The only habitat category `kind` may live in.
    fn habitat_for(&self, kind: AnimalKind) -> HabitatCategory;

    /// Whether an existing `resident` accepts `candidate` as a neighbour.
    ///
    /// Asked from the resident's side: the resident's own entry decides.
    fn is_compatible(&self, resident: AnimalKind, candidate: AnimalKind) -> bool;

    /// Convenience: can `kind` live in a habitat of `category`?
    fn is_correct_habitat(&self, kind: AnimalKind, category: HabitatCategory) -> bool {
        self.habitat_for(kind) == category
    }
}

/// Rule table indexed by [`AnimalKind::index`].
const HABITATS: [HabitatCategory; 8] = [
    HabitatCategory::Enclosure, // Lion
    HabitatCategory::Enclosure, // Zebra
    HabitatCategory::Enclosure, // Gazelle
    HabitatCategory::Aquarium,  // Shark
    HabitatCategory::Aquarium,  // Starfish
    HabitatCategory::Aquarium,  // Seal
    HabitatCategory::Cage,      // Parrot
    HabitatCategory::Cage,      // Buzzard
];

/// `TOLERATES[resident][candidate]`, same index order as [`AnimalKind::ALL`].
const TOLERATES: [[bool; 8]; 8] = {
    const T: bool = true;
    const F: bool = false;
    [
        //  Lion Zebra Gaz  Shark Star Seal Parr Buzz
        [T, F, F, F, F, F, F, F], // Lion
        [F, T, T, F, F, F, F, F], // Zebra
        [F, T, T, F, F, F, F, F], // Gazelle
        [F, F, F, T, T, F, F, F], // Shark
        [F, F, F, T, T, T, F, F], // Starfish
        [F, F, F, F, T, T, F, F], // Seal
        [F, F, F, F, F, F, T, F], // Parrot
        [F, F, F, F, F, F, F, T], // Buzzard
    ]
};

/// The zoo's standard rule book.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRules;

impl HabitatRules for StandardRules {
    fn habitat_for(&self, kind: AnimalKind) -> HabitatCategory {
        HABITATS[kind.index()]
    }

    fn is_compatible(&self, resident: AnimalKind, candidate: AnimalKind) -> bool {
        TOLERATES[resident.index()][candidate.index()]
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
