/// A named, priced package scoped to one (animal, size) pair.
///
/// # Actor Framework
/// Managed by a [`ResourceActor`](crate::framework::ResourceActor); see
/// [`PriceOptionParams`] for the add/edit payload.
use crate::model::AnimalId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Price Options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PriceOptionId(pub u32);

impl From<u32> for PriceOptionId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for PriceOptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "price_option_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceOption {
    pub id: PriceOptionId,
    pub animal_id: AnimalId,
    pub animal_size: String,
    pub name: String,
    pub price: Decimal,
    pub description: String,
    pub active: bool,
}

impl PriceOption {
    /// True when this option belongs to `animal_id` in `size` (size compared ignoring case).
    pub fn applies_to(&self, animal_id: AnimalId, size: &str) -> bool {
        self.animal_id == animal_id && self.animal_size.eq_ignore_ascii_case(size.trim())
    }
}

/// Payload for adding or editing a price option. Edits replace the whole record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceOptionParams {
    pub animal_id: AnimalId,
    pub animal_size: String,
    pub name: String,
    pub price: Decimal,
    #[serde(default)]
    pub description: String,
}
