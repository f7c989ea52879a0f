//! Session, authentication and shell services used by the route handlers.

use thiserror::Error;

pub mod auth;
pub mod session;

#[cfg(feature = "server")]
pub mod shell;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Form error: {0}")]
    Form(String),

    #[error("Type constraint: {0}")]
    TypeConstraint(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Gateway error: {0}")]
    Gateway(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
