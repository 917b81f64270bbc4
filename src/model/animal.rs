/// Represents a sellable animal (Lamb, Sheep, Goat) and the sizes it comes in.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// See [`impl ActorEntity for Animal`](#impl-ActorEntity-for-Animal) for details on:
/// - Creation and edit parameters ([`AnimalParams`])
/// - Custom actions ([`CatalogAction`](crate::model::CatalogAction))
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Animals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnimalId(pub u32);

impl From<u32> for AnimalId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for AnimalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "animal_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animal {
    pub id: AnimalId,
    pub name: String,
    pub description: String,
    /// Size labels in display order, e.g. `["Small", "Medium", "Large"]`.
    pub sizes: Vec<String>,
    pub active: bool,
}

impl Animal {
    /// Creates a new, active Animal.
    pub fn new(
        id: AnimalId,
        name: impl Into<String>,
        description: impl Into<String>,
        sizes: Vec<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            sizes,
            active: true,
        }
    }

    /// Returns the stored label matching `size`, ignoring case.
    pub fn size_label(&self, size: &str) -> Option<&str> {
        self.sizes
            .iter()
            .map(String::as_str)
            .find(|label| label.eq_ignore_ascii_case(size.trim()))
    }
}

/// Payload for adding or editing an animal. Edits replace the whole record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimalParams {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub sizes: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_label_matches_case_insensitively() {
        let lamb = Animal::new(
            AnimalId(1),
            "Lamb",
            "",
            vec!["Small".into(), "Medium".into(), "Large".into()],
        );
        assert_eq!(lamb.size_label("medium"), Some("Medium"));
        assert_eq!(lamb.size_label(" LARGE "), Some("Large"));
        assert_eq!(lamb.size_label("XL"), None);
    }
}
