//! Catalog wire format (PokeAPI-compatible subset) and its normalization.

use cc_core::ports::CatalogError;
use cc_core::{EntityId, EntityRecord};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct EntityDto {
    pub id: Option<u64>,
    pub name: Option<String>,
    #[serde(default)]
    pub sprites: Option<SpritesDto>,
    #[serde(default)]
    pub types: Vec<TypeSlotDto>,
    pub height: Option<u32>,
    pub weight: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SpritesDto {
    pub front_default: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TypeSlotDto {
    #[serde(default)]
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedDto,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NamedDto {
    pub name: String,
}

impl EntityDto {
    /// Parse a response body.
    pub(crate) fn parse(body: &[u8]) -> Result<Self, CatalogError> {
        serde_json::from_slice(body).map_err(|err| CatalogError::Malformed(err.to_string()))
    }

    /// Normalize into a record for the id that was requested.
    pub(crate) fn into_record(self, requested: EntityId) -> Result<EntityRecord, CatalogError> {
        if let Some(id) = self.id {
            if id != u64::from(requested.get()) {
                return Err(CatalogError::Malformed(format!(
                    "requested entity {requested}, catalog answered {id}"
                )));
            }
        }

        let name = self
            .name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| CatalogError::Malformed("missing entity name".to_string()))?;

        let mut types = self.types;
        types.sort_by_key(|slot| slot.slot);

        Ok(EntityRecord {
            id: requested,
            name: display_name(name),
            sprite: self
                .sprites
                .and_then(|sprites| sprites.front_default)
                .filter(|url| !url.is_empty()),
            types: types.into_iter().map(|slot| slot.kind.name).collect(),
            height: self.height,
            weight: self.weight,
        })
    }
}

/// `mr-mime` -> `Mr-Mime`, `pikachu` -> `Pikachu`.
fn display_name(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut word_start = true;
    for ch in raw.chars() {
        if word_start {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        word_start = ch == '-' || ch == ' ';
    }
    out
}
