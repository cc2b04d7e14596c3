//! # Animal Commands
//!
//! `add-animal <area> <kind> <nickname...>`
//!
//! A refusal is an ordinary response carrying the admission code, not an
//! error: scripts branch on `code`.

use serde::Serialize;
use tracing::debug;
use zoo_core::validation::validate_nickname;
use zoo_core::{AdmissionCode, Animal, AnimalKind, AreaId, Zoo};

use crate::error::ApiError;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdmissionView {
    pub area: AreaId,
    pub nickname: String,
    pub kind: AnimalKind,
    pub admitted: bool,
    pub result: AdmissionCode,
    /// Stable numeric value of `result`
    pub code: u8,
}

pub fn add_animal(
    zoo: &mut Zoo,
    area: AreaId,
    kind: AnimalKind,
    nickname: &str,
) -> Result<AdmissionView, ApiError> {
    let nickname = validate_nickname(nickname)?;
    debug!(%area, %kind, %nickname, "add-animal command");

    let result = zoo.add_animal(area, Animal::new(kind, nickname.clone()));
    Ok(AdmissionView {
        area,
        nickname,
        kind,
        admitted: result.is_admitted(),
        result,
        code: result.code(),
    })
}
