//! User model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// User roles.
///
/// `admin` exists in the data model, but no endpoint currently enforces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

impl From<&str> for Role {
    fn from(s: &str) -> Self {
        s.parse().unwrap_or(Role::User)
    }
}

/// User record as stored in the database
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: String,
    pub full_name: Option<String>,
    pub phone_number: Option<String>,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Role tag parsed into the enum, unknown values degrade to `user`
    pub fn role(&self) -> Role {
        Role::from(self.role.as_str())
    }
}

/// Insert payload for a new user row
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub role: Role,
    pub full_name: Option<String>,
    pub phone_number: Option<String>,
    pub email: String,
}

/// Public profile projection: the password hash and role are never selected
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct UserProfile {
    pub username: String,
    pub full_name: Option<String>,
    pub phone_number: Option<String>,
    pub email: String,
}

/// Registration request (field names follow the frontend wire format)
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(
        required(message = "Username and password are required"),
        length(min = 1, message = "Username and password are required")
    )]
    pub username: Option<String>,
    #[validate(
        required(message = "Username and password are required"),
        length(min = 1, message = "Username and password are required")
    )]
    pub password: Option<String>,
    pub full_name: Option<String>,
    pub phone_number: Option<String>,
    #[validate(
        required(message = "Email is required"),
        email(message = "Email must be a valid address")
    )]
    pub email: Option<String>,
}

/// Login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(
        required(message = "Username and password are required"),
        length(min = 1, message = "Username and password are required")
    )]
    pub username: Option<String>,
    #[validate(
        required(message = "Username and password are required"),
        length(min = 1, message = "Username and password are required")
    )]
    pub password: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_strings() {
        assert_eq!("user".parse::<Role>().unwrap(), Role::User);
        assert_eq!("Admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!(Role::Admin.to_string(), "admin");
        assert!("librarian".parse::<Role>().is_err());
        assert_eq!(Role::from("librarian"), Role::User);
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_value(Role::User).unwrap(), "user");
        assert_eq!(serde_json::to_value(Role::Admin).unwrap(), "admin");
    }

    #[test]
    fn password_hash_is_never_serialized() {
        let user = User {
            id: 1,
            username: "alice".into(),
            password_hash: "$argon2id$secret".into(),
            role: "user".into(),
            full_name: None,
            phone_number: None,
            email: "a@x.com".into(),
            created_at: Utc::now(),
        };

        let value = serde_json::to_value(&user).unwrap();
        assert!(value.get("password_hash").is_none());
        assert_eq!(value["username"], "alice");
    }

    #[test]
    fn register_request_accepts_camel_case_fields() {
        let request: RegisterRequest = serde_json::from_str(
            r#"{
                "username": "alice",
                "password": "secret1",
                "fullName": "Alice A.",
                "phoneNumber": "+7 900 000-00-00",
                "email": "a@x.com"
            }"#,
        )
        .unwrap();

        assert_eq!(request.full_name.as_deref(), Some("Alice A."));
        assert_eq!(request.phone_number.as_deref(), Some("+7 900 000-00-00"));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn register_request_rejects_missing_or_invalid_fields() {
        let missing: RegisterRequest =
            serde_json::from_str(r#"{"username": "alice", "password": "secret1"}"#).unwrap();
        assert!(missing.validate().is_err());

        let bad_email: RegisterRequest = serde_json::from_str(
            r#"{"username": "alice", "password": "secret1", "email": "not-an-email"}"#,
        )
        .unwrap();
        assert!(bad_email.validate().is_err());

        let empty_username: RegisterRequest = serde_json::from_str(
            r#"{"username": "", "password": "secret1", "email": "a@x.com"}"#,
        )
        .unwrap();
        assert!(empty_username.validate().is_err());
    }
}
