use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Cutting Styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CuttingStyleId(pub u32);

impl From<u32> for CuttingStyleId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CuttingStyleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cutting_style_{}", self.0)
    }
}

/// A preparation style (Traditional, Modern, ...), independent of animal and size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CuttingStyle {
    pub id: CuttingStyleId,
    pub name: String,
    pub active: bool,
}

impl CuttingStyle {
    pub fn new(id: CuttingStyleId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            active: true,
        }
    }
}

/// Payload for adding or renaming a cutting style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CuttingStyleParams {
    pub name: String,
}
