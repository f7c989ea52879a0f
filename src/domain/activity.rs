use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::user::{CurrentUser, UserType};

/// Kinds of activity the portal reports to the backend.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityAction {
    SignIn,
    SignOut,
    /// Actions recorded by other clients of the activity log.
    #[serde(other)]
    Other,
}

/// One entry of the remote activity log.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ActivityEvent {
    pub action: ActivityAction,
    pub user_email: String,
    pub user_name: String,
    pub user_type: Option<UserType>,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub details: Value,
}

impl ActivityEvent {
    /// Builds an event attributed to `user`.
    pub fn for_user(action: ActivityAction, user: &CurrentUser, timestamp: DateTime<Utc>) -> Self {
        Self {
            action,
            user_email: user.email.clone(),
            user_name: user.name.clone(),
            user_type: user.user_type,
            timestamp,
            details: Value::Null,
        }
    }
}
