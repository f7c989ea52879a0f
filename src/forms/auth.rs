use serde::Deserialize;
use validator::Validate;

#[derive(Deserialize, Validate)]
/// Credentials posted from the login screen.
pub struct LoginForm {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_email_and_empty_password() {
        let form = LoginForm {
            email: "nope".to_string(),
            password: String::new(),
        };
        let errors = form.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
    }

    #[test]
    fn accepts_well_formed_credentials() {
        let form = LoginForm {
            email: "sarah@client.com".to_string(),
            password: "client123".to_string(),
        };
        assert!(form.validate().is_ok());
    }
}
