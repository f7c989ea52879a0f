//! Authenticated portal identity.

use serde::{Deserialize, Serialize};

use crate::domain::nav::ViewMode;
use crate::domain::types::{NonEmptyString, UserEmail};

/// Kind of account, one per view mode.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Client,
    Team,
    Management,
}

impl UserType {
    /// View mode the account lands in after signing in.
    pub const fn view_mode(self) -> ViewMode {
        match self {
            UserType::Client => ViewMode::Client,
            UserType::Team => ViewMode::Team,
            UserType::Management => ViewMode::Management,
        }
    }
}

/// Identity displayed in the header and persisted in the session blob.
///
/// Field names follow the camelCase layout of the stored session JSON.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub name: String,
    pub email: String,
    pub company_name: String,
    pub role: String,
    /// Empty only for the signed-out placeholder.
    #[serde(default)]
    pub user_type: Option<UserType>,
}

impl CurrentUser {
    pub fn new(
        name: NonEmptyString,
        email: UserEmail,
        company_name: NonEmptyString,
        role: NonEmptyString,
        user_type: UserType,
    ) -> Self {
        Self {
            name: name.into_inner(),
            email: email.into_inner(),
            company_name: company_name.into_inner(),
            role: role.into_inner(),
            user_type: Some(user_type),
        }
    }

    /// Initials shown in the header avatar.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_first_two_words() {
        let user = CurrentUser {
            name: "Sarah Jane Miller".to_string(),
            ..CurrentUser::default()
        };
        assert_eq!(user.initials(), "SJ");
        assert_eq!(CurrentUser::default().initials(), "");
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let user = CurrentUser {
            name: "Sarah".to_string(),
            email: "sarah@client.com".to_string(),
            company_name: "Bloom".to_string(),
            role: "Client".to_string(),
            user_type: Some(UserType::Client),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["companyName"], "Bloom");
        assert_eq!(json["userType"], "client");
    }
}
