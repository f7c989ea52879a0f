//! Form definitions backing the portal routes.

use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::types::TypeConstraintError;

pub mod archive;
pub mod auth;
pub mod navigation;
pub mod service;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid value: {0}")]
    TypeConstraint(#[from] TypeConstraintError),

    #[error("value takes {size} bytes, at most {max} fit")]
    TooLarge { size: usize, max: usize },

    #[error("failed to encode value: {0}")]
    Encoding(String),
}
