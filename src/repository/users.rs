//! Users repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::user::{NewUser, User, UserProfile},
};

#[derive(Clone)]
pub struct UsersRepository {
    pool: Pool<Postgres>,
}

impl UsersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get user by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "SELECT id, username, password_hash, role, full_name, phone_number, email, created_at \
             FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", id)))
    }

    /// Get user by username
    pub async fn get_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password_hash, role, full_name, phone_number, email, created_at \
             FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Check if a username is already taken
    pub async fn username_exists(&self, username: &str) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)")
                .bind(username)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    /// Insert a new user and return the generated id.
    ///
    /// The unique constraints on username and email are the authoritative
    /// guard against concurrent registrations; violations are classified by
    /// constraint name rather than by matching the error message text.
    pub async fn create(&self, user: &NewUser) -> AppResult<i32> {
        let result = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO users (username, password_hash, role, full_name, phone_number, email)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .bind(&user.full_name)
        .bind(&user.phone_number)
        .bind(&user.email)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(id) => Ok(id),
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                Err(match db.constraint() {
                    Some("users_username_key") => {
                        AppError::Conflict("A user with this username already exists".to_string())
                    }
                    Some("users_email_key") => {
                        AppError::Conflict("A user with this email already exists".to_string())
                    }
                    _ => AppError::Conflict(
                        "User data violates a uniqueness constraint".to_string(),
                    ),
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Get the public profile for a user.
    ///
    /// The password hash and role are excluded by construction: the query
    /// never selects them.
    pub async fn get_profile(&self, id: i32) -> AppResult<UserProfile> {
        sqlx::query_as::<_, UserProfile>(
            "SELECT username, full_name, phone_number, email FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", id)))
    }
}
