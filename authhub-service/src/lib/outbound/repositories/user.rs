use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::CredentialRepository;
use crate::user::errors::AuthError;

/// Postgres-backed credential store.
///
/// The unique index on `users.email` is the single point of truth for
/// identity uniqueness; `insert` relies on it rather than on any in-process
/// coordination, so concurrent service instances stay correct.
pub struct PostgresCredentialRepository {
    pool: PgPool,
}

impl PostgresCredentialRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    email: String,
    display_name: Option<String>,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> Result<User, AuthError> {
        let email = EmailAddress::new(&self.email)
            .map_err(|e| AuthError::Internal(format!("stored email is invalid: {e}")))?;

        Ok(User {
            id: UserId(self.id),
            email,
            display_name: self.display_name,
            password_hash: self.password_hash,
            created_at: self.created_at,
        })
    }
}

#[async_trait]
impl CredentialRepository for PostgresCredentialRepository {
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, AuthError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, display_name, password_hash, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AuthError::StoreUnavailable(e.to_string()))?;

        row.map(UserRow::into_user).transpose()
    }

    async fn insert(&self, user: User) -> Result<User, AuthError> {
        sqlx::query(
            r#"
            INSERT INTO users (id, email, display_name, password_hash, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(user.id.0)
        .bind(user.email.as_str())
        .bind(user.display_name.as_deref())
        .bind(&user.password_hash)
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                // Lost the check-then-insert race: the unique index wins.
                if db_err.is_unique_violation() {
                    return AuthError::Conflict;
                }
            }
            AuthError::StoreUnavailable(e.to_string())
        })?;

        Ok(user)
    }
}
