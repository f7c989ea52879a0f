//! Error conversion glue between the layers.
//!
//! The domain and storage layers must not depend on service error types, so
//! the conversions live here.

use crate::domain::types::TypeConstraintError;
use crate::services::ServiceError;
use crate::storage::StorageError;

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::TypeConstraint(val.to_string())
    }
}

impl From<StorageError> for ServiceError {
    fn from(val: StorageError) -> Self {
        ServiceError::Storage(val.to_string())
    }
}

#[cfg(feature = "server")]
impl From<crate::gateway::GatewayError> for ServiceError {
    fn from(val: crate::gateway::GatewayError) -> Self {
        ServiceError::Gateway(val.to_string())
    }
}

impl From<crate::forms::FormError> for ServiceError {
    fn from(val: crate::forms::FormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}
