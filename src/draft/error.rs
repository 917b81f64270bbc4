//! Error types for the order draft.

use super::{DraftStep, OrderDraft};
use crate::catalog::CatalogError;
use std::fmt;
use thiserror::Error;

/// Contact form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Phone,
    Address,
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ContactField::Name => "name",
            ContactField::Phone => "phone",
            ContactField::Address => "address",
        })
    }
}

/// One user-facing message for one field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FieldError {
    pub field: ContactField,
    pub message: &'static str,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DraftError {
    /// An earlier step has not been completed yet.
    #[error("Please complete the previous step first ({required})")]
    OutOfOrder { required: DraftStep },

    #[error("Please select an animal")]
    MissingAnimal,

    #[error("Please select a size")]
    MissingSize,

    #[error("{0} is not available")]
    Unavailable(String),

    #[error("{size} is not a size of {animal}")]
    UnknownSize { animal: String, size: String },

    #[error("That price option does not match the selected animal and size")]
    PriceMismatch,

    /// Every contact field that failed, in form order.
    #[error("{}", join(.0))]
    InvalidContact(Vec<FieldError>),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

fn join(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.message)
        .collect::<Vec<_>>()
        .join("; ")
}

impl DraftError {
    /// Messages for each contact field, empty for other errors.
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            DraftError::InvalidContact(errors) => errors,
            _ => &[],
        }
    }
}

/// A submission that was refused. The draft comes back so it can be fixed and resubmitted.
#[derive(Debug, Error)]
#[error("{error}")]
pub struct DraftRejected {
    pub draft: Box<OrderDraft>,
    #[source]
    pub error: DraftError,
}
