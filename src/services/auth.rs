//! Authentication and user account service

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::user::{LoginRequest, NewUser, RegisterRequest, Role, UserProfile},
    repository::Repository,
};

#[derive(Clone)]
pub struct AuthService {
    repository: Repository,
}

impl AuthService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Register a new user with the default `user` role
    pub async fn register(&self, request: RegisterRequest) -> AppResult<i32> {
        request
            .validate()
            .map_err(|e| AppError::Validation(validation_message(&e)))?;

        // Presence is guaranteed by validation above
        let username = request.username.unwrap_or_default();
        let password = request.password.unwrap_or_default();
        let email = request.email.unwrap_or_default();

        // Advisory pre-check; the unique constraint remains the real guard
        if self.repository.users.username_exists(&username).await? {
            return Err(AppError::Conflict(
                "A user with this username already exists".to_string(),
            ));
        }

        let password_hash = hash_password(&password)?;

        let user = NewUser {
            username,
            password_hash,
            role: Role::User,
            full_name: request.full_name,
            phone_number: request.phone_number,
            email,
        };

        self.repository.users.create(&user).await
    }

    /// Authenticate by username and password.
    ///
    /// Unknown username and wrong password produce the same error, so the
    /// response does not reveal which of the two failed.
    pub async fn authenticate(&self, request: LoginRequest) -> AppResult<(i32, Role)> {
        request
            .validate()
            .map_err(|e| AppError::Validation(validation_message(&e)))?;

        let username = request.username.unwrap_or_default();
        let password = request.password.unwrap_or_default();

        let user = self
            .repository
            .users
            .get_by_username(&username)
            .await?
            .ok_or_else(|| {
                AppError::Authentication("Invalid username or password".to_string())
            })?;

        if !verify_password(&password, &user.password_hash)? {
            return Err(AppError::Authentication(
                "Invalid username or password".to_string(),
            ));
        }

        Ok((user.id, user.role()))
    }

    /// Public profile for a user
    pub async fn profile(&self, user_id: i32) -> AppResult<UserProfile> {
        self.repository.users.get_profile(user_id).await
    }
}

/// Hash a password with Argon2id and a fresh random salt
pub fn hash_password(plain: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;

    Ok(hash.to_string())
}

/// Verify a password against a stored PHC hash string
pub fn verify_password(plain: &str, hash: &str) -> AppResult<bool> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(format!("Stored password hash is malformed: {}", e)))?;

    Ok(Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok())
}

/// First human-readable message out of a set of validation errors
fn validation_message(errors: &validator::ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|field_errors| field_errors.iter())
        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .next()
        .unwrap_or_else(|| "Invalid request".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::LoginRequest;

    #[test]
    fn hash_and_verify_round_trip() {
        let hash = hash_password("secret1").expect("hashing should succeed");
        assert!(verify_password("secret1", &hash).expect("verify should succeed"));
        assert!(!verify_password("wrong", &hash).expect("verify should not error"));
    }

    #[test]
    fn hashing_salts_every_call() {
        let first = hash_password("secret1").unwrap();
        let second = hash_password("secret1").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn verify_errors_on_malformed_hash() {
        assert!(verify_password("anything", "not-a-phc-string").is_err());
    }

    #[test]
    fn validation_message_surfaces_field_message() {
        let request: LoginRequest = serde_json::from_str(r#"{"username": "alice"}"#).unwrap();
        let errors = request.validate().unwrap_err();
        assert_eq!(
            validation_message(&errors),
            "Username and password are required"
        );
    }
}
