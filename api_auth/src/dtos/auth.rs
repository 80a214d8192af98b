use db::models::user::User;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Credential input. Shape is validated before any store access: the email
/// must be syntactically valid and the password at least 6 characters.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 6))]
    pub password: String,
}

/// Public projection of a user record; the password hash never leaves the
/// process.
#[derive(Debug, Serialize)]
pub struct SessionUser {
    pub id: Uuid,
    pub email: String,
}

impl From<User> for SessionUser {
    fn from(user: User) -> Self {
        SessionUser {
            id: user.id,
            email: user.email,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: SessionUser,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_credentials() {
        let req = LoginRequest {
            email: "user@example.com".to_string(),
            password: "123456".to_string(),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn rejects_short_password() {
        let req = LoginRequest {
            email: "user@example.com".to_string(),
            password: "12345".to_string(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn rejects_malformed_email() {
        let req = LoginRequest {
            email: "not-an-email".to_string(),
            password: "123456".to_string(),
        };
        assert!(req.validate().is_err());
    }
}
