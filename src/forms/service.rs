use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::types::NonEmptyString;
use crate::forms::FormError;

#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ServicePriority {
    Low,
    #[default]
    Normal,
    High,
}

#[derive(Deserialize, Validate)]
/// Service request submitted from the service page.
pub struct ServiceRequestForm {
    #[validate(length(min = 1, max = 200))]
    pub subject: String,
    #[validate(length(min = 1, max = 5000))]
    pub details: String,
    #[serde(default)]
    pub priority: ServicePriority,
}

/// Validated service request.
#[derive(Debug)]
pub struct ServiceRequestPayload {
    pub subject: NonEmptyString,
    pub details: NonEmptyString,
    pub priority: ServicePriority,
}

impl TryFrom<ServiceRequestForm> for ServiceRequestPayload {
    type Error = FormError;

    fn try_from(form: ServiceRequestForm) -> Result<Self, Self::Error> {
        form.validate()?;

        Ok(Self {
            subject: NonEmptyString::new(form.subject)?,
            details: NonEmptyString::new(form.details)?,
            priority: form.priority,
        })
    }
}
