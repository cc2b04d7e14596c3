//! # Domain Types
//!
//! Core domain types used throughout the zoo facility.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Area        │   │    Habitat      │   │     Animal      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Entrance       │   │  category       │   │  kind           │       │
//! │  │  PicnicArea     │──►│  capacity       │──►│  nickname       │       │
//! │  │  Habitat(..)    │   │  inhabitants    │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     AreaId      │   │HabitatCategory  │   │   AnimalKind    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  u32, 0 = gate  │   │  Enclosure      │   │  Lion, Zebra,   │       │
//! │  │  never reused   │   │  Aquarium       │   │  Shark, Parrot  │       │
//! │  └─────────────────┘   │  Cage           │   │  ...            │       │
//! │                        └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Kinds are closed enums. Behaviour that depends on a kind (which habitat an
//! animal lives in, who it tolerates) is looked up in [`crate::rules`], never
//! derived from the concrete type of a value.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

// =============================================================================
// Area Identifier
// =============================================================================

/// Identifier of an area in the facility graph.
///
/// `AreaId(0)` is the entrance. Every other id is handed out by a counter
/// that only ever goes up, so an id is never reused after removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AreaId(u32);

impl AreaId {
    /// The permanent entrance area.
    pub const ENTRANCE: AreaId = AreaId(0);

    #[inline]
    pub const fn new(raw: u32) -> Self {
        AreaId(raw)
    }

    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn is_entrance(&self) -> bool {
        self.0 == 0
    }

    /// Returns the id after this one, or `None` once the counter is exhausted.
    pub(crate) fn next(&self) -> Option<AreaId> {
        self.0.checked_add(1).map(AreaId)
    }
}

impl fmt::Display for AreaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for AreaId {
    fn from(raw: u32) -> Self {
        AreaId(raw)
    }
}

impl FromStr for AreaId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(AreaId)
            .map_err(|_| ValidationError::InvalidFormat {
                field: "area id".to_string(),
                reason: format!("'{}' is not a non-negative integer", s.trim()),
            })
    }
}

// =============================================================================
// Animals
// =============================================================================

/// The closed set of animal kinds the zoo can house.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimalKind {
    Lion,
    Zebra,
    Gazelle,
    Shark,
    Starfish,
    Seal,
    Parrot,
    Buzzard,
}

impl AnimalKind {
    /// Every kind, in table order.
    pub const ALL: [AnimalKind; 8] = [
        AnimalKind::Lion,
        AnimalKind::Zebra,
        AnimalKind::Gazelle,
        AnimalKind::Shark,
        AnimalKind::Starfish,
        AnimalKind::Seal,
        AnimalKind::Parrot,
        AnimalKind::Buzzard,
    ];

    /// Position of this kind in [`AnimalKind::ALL`], used to index rule tables.
    #[inline]
    pub const fn index(&self) -> usize {
        *self as usize
    }

    pub const fn name(&self) -> &'static str {
        match self {
            AnimalKind::Lion => "lion",
            AnimalKind::Zebra => "zebra",
            AnimalKind::Gazelle => "gazelle",
            AnimalKind::Shark => "shark",
            AnimalKind::Starfish => "starfish",
            AnimalKind::Seal => "seal",
            AnimalKind::Parrot => "parrot",
            AnimalKind::Buzzard => "buzzard",
        }
    }
}

impl fmt::Display for AnimalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AnimalKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        AnimalKind::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "animal kind".to_string(),
                allowed: AnimalKind::ALL.iter().map(|k| k.name().to_string()).collect(),
            })
    }
}

/// An animal living (or about to live) in the zoo.
///
/// Immutable once created: the kind and nickname are fixed for life.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animal {
    kind: AnimalKind,
    nickname: String,
}

impl Animal {
    pub fn new(kind: AnimalKind, nickname: impl Into<String>) -> Self {
        Animal {
            kind,
            nickname: nickname.into(),
        }
    }

    #[inline]
    pub fn kind(&self) -> AnimalKind {
        self.kind
    }

    #[inline]
    pub fn nickname(&self) -> &str {
        &self.nickname
    }
}

// =============================================================================
// Areas
// =============================================================================

/// Category of a habitat. Each animal kind is eligible for exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HabitatCategory {
    Enclosure,
    Aquarium,
    Cage,
}

impl fmt::Display for HabitatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HabitatCategory::Enclosure => write!(f, "enclosure"),
            HabitatCategory::Aquarium => write!(f, "aquarium"),
            HabitatCategory::Cage => write!(f, "cage"),
        }
    }
}

/// The kind tag of an area, used when creating areas from text or config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AreaKind {
    Entrance,
    PicnicArea,
    Habitat(HabitatCategory),
}

impl fmt::Display for AreaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AreaKind::Entrance => write!(f, "entrance"),
            AreaKind::PicnicArea => write!(f, "picnic area"),
            AreaKind::Habitat(category) => write!(f, "{}", category),
        }
    }
}

impl FromStr for AreaKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "entrance" => Ok(AreaKind::Entrance),
            "picnic" | "picnic_area" | "picnic-area" => Ok(AreaKind::PicnicArea),
            "enclosure" => Ok(AreaKind::Habitat(HabitatCategory::Enclosure)),
            "aquarium" => Ok(AreaKind::Habitat(HabitatCategory::Aquarium)),
            "cage" => Ok(AreaKind::Habitat(HabitatCategory::Cage)),
            _ => Err(ValidationError::NotAllowed {
                field: "area kind".to_string(),
                allowed: ["entrance", "picnic", "enclosure", "aquarium", "cage"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            }),
        }
    }
}

/// A habitat: a category, a fixed capacity and its residents in arrival order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habitat {
    category: HabitatCategory,
    capacity: usize,
    inhabitants: Vec<Animal>,
}

impl Habitat {
    pub fn new(category: HabitatCategory, capacity: usize) -> Self {
        Habitat {
            category,
            capacity,
            inhabitants: Vec::new(),
        }
    }

    #[inline]
    pub fn category(&self) -> HabitatCategory {
        self.category
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn inhabitants(&self) -> &[Animal] {
        &self.inhabitants
    }

    /// Full once the resident count has reached capacity.
    pub fn is_full(&self) -> bool {
        self.inhabitants.len() >= self.capacity
    }

    pub(crate) fn admit(&mut self, animal: Animal) {
        self.inhabitants.push(animal);
    }
}

/// A node of the facility graph.
///
/// Outgoing paths are owned by [`crate::graph::AreaGraph`], not by the area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Area {
    Entrance,
    PicnicArea,
    Habitat(Habitat),
}

impl Area {
    pub fn enclosure(capacity: usize) -> Self {
        Area::Habitat(Habitat::new(HabitatCategory::Enclosure, capacity))
    }

    pub fn aquarium(capacity: usize) -> Self {
        Area::Habitat(Habitat::new(HabitatCategory::Aquarium, capacity))
    }

    pub fn cage(capacity: usize) -> Self {
        Area::Habitat(Habitat::new(HabitatCategory::Cage, capacity))
    }

    /// Builds an empty area of the given kind. Capacity only matters for habitats.
    pub fn from_kind(kind: AreaKind, capacity: usize) -> Self {
        match kind {
            AreaKind::Entrance => Area::Entrance,
            AreaKind::PicnicArea => Area::PicnicArea,
            AreaKind::Habitat(category) => Area::Habitat(Habitat::new(category, capacity)),
        }
    }

    pub fn kind(&self) -> AreaKind {
        match self {
            Area::Entrance => AreaKind::Entrance,
            Area::PicnicArea => AreaKind::PicnicArea,
            Area::Habitat(habitat) => AreaKind::Habitat(habitat.category()),
        }
    }

    #[inline]
    pub fn is_entrance(&self) -> bool {
        matches!(self, Area::Entrance)
    }

    pub fn as_habitat(&self) -> Option<&Habitat> {
        match self {
            Area::Habitat(habitat) => Some(habitat),
            _ => None,
        }
    }

    pub fn as_habitat_mut(&mut self) -> Option<&mut Habitat> {
        match self {
            Area::Habitat(habitat) => Some(habitat),
            _ => None,
        }
    }
}

// =============================================================================
// Admission Result Codes
// =============================================================================

/// Outcome of trying to add an animal to an area.
///
/// The numeric values are stable and double as wire/status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum AdmissionCode {
    AnimalAdded = 0,
    NotAHabitat = 1,
    WrongHabitat = 2,
    HabitatFull = 3,
    IncompatibleInhabitants = 4,
    AreaNotFound = 5,
}

impl AdmissionCode {
    #[inline]
    pub const fn code(&self) -> u8 {
        *self as u8
    }

    #[inline]
    pub const fn is_admitted(&self) -> bool {
        matches!(self, AdmissionCode::AnimalAdded)
    }
}

impl fmt::Display for AdmissionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            AdmissionCode::AnimalAdded => "animal added",
            AdmissionCode::NotAHabitat => "area is not a habitat",
            AdmissionCode::WrongHabitat => "wrong habitat for this animal",
            AdmissionCode::HabitatFull => "habitat is full",
            AdmissionCode::IncompatibleInhabitants => "incompatible with current inhabitants",
            AdmissionCode::AreaNotFound => "area not found",
        };
        f.write_str(text)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_id_parsing() {
        assert_eq!("7".parse::<AreaId>().unwrap(), AreaId::new(7));
        assert_eq!(" 0 ".parse::<AreaId>().unwrap(), AreaId::ENTRANCE);
        assert!("-1".parse::<AreaId>().is_err());
        assert!("gate".parse::<AreaId>().is_err());
    }

    #[test]
    fn test_animal_kind_parsing() {
        assert_eq!("Lion".parse::<AnimalKind>().unwrap(), AnimalKind::Lion);
        assert_eq!("starfish".parse::<AnimalKind>().unwrap(), AnimalKind::Starfish);
        assert!("unicorn".parse::<AnimalKind>().is_err());
    }

    #[test]
    fn test_kind_indexes_match_table_order() {
        for (i, kind) in AnimalKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn test_area_kind_parsing() {
        assert_eq!("picnic".parse::<AreaKind>().unwrap(), AreaKind::PicnicArea);
        assert_eq!(
            "aquarium".parse::<AreaKind>().unwrap(),
            AreaKind::Habitat(HabitatCategory::Aquarium)
        );
        assert!("car park".parse::<AreaKind>().is_err());
    }

    #[test]
    fn test_habitat_full_at_capacity() {
        let mut habitat = Habitat::new(HabitatCategory::Cage, 1);
        assert!(!habitat.is_full());
        habitat.admit(Animal::new(AnimalKind::Parrot, "Polly"));
        assert!(habitat.is_full());

        let zero = Habitat::new(HabitatCategory::Cage, 0);
        assert!(zero.is_full());
    }

    #[test]
    fn test_admission_codes_are_stable() {
        assert_eq!(AdmissionCode::AnimalAdded.code(), 0);
        assert_eq!(AdmissionCode::IncompatibleInhabitants.code(), 4);
        assert!(AdmissionCode::AnimalAdded.is_admitted());
        assert!(!AdmissionCode::HabitatFull.is_admitted());
    }
}
