/// Activation actions shared by the catalog resources.
///
/// Animals, cutting styles and delivery dates are never deleted, only switched
/// off and on; price options may also be deleted. Each action returns the
/// updated record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogAction {
    /// Sets the active flag to the given value.
    SetActive(bool),
    /// Flips the active flag.
    ToggleActive,
}

impl CatalogAction {
    /// Applies the action to an active flag.
    pub fn apply(self, active: &mut bool) {
        match self {
            CatalogAction::SetActive(value) => *active = value,
            CatalogAction::ToggleActive => *active = !*active,
        }
    }
}
