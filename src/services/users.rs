use sqlx::PgPool;
use uuid::Uuid;

use crate::models::user::User;

pub struct UserService;

impl UserService {
    /// Resolve a verified external subject to an internal account.
    /// `Ok(None)` is a normal outcome: identity valid, not yet provisioned.
    /// The google_id column is unique, so at most one row can match.
    pub async fn find_by_google_id(pool: &PgPool, google_id: &str) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, name, email, picture, google_id, created_at, updated_at, deleted_at
             FROM users
             WHERE google_id = $1 AND deleted_at IS NULL",
        )
        .bind(google_id)
        .fetch_optional(pool)
        .await?;
        Ok(user)
    }

    pub async fn get_by_id(pool: &PgPool, id: Uuid) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, name, email, picture, google_id, created_at, updated_at, deleted_at
             FROM users
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(user)
    }
}
