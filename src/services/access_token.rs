use chrono::{DateTime, Days, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::token::{AccessToken, RefreshToken};

pub struct AccessTokenService;

impl AccessTokenService {
    /// Access tokens live for one calendar day from issuance.
    pub fn expires_from(created_at: DateTime<Utc>) -> DateTime<Utc> {
        created_at + Days::new(1)
    }

    /// Build a new token value with a fresh random id, linked to the
    /// refresh token it derives from; persistence is a separate step.
    fn mint(refresh_token: &RefreshToken, now: DateTime<Utc>) -> AccessToken {
        AccessToken {
            id: Uuid::new_v4(),
            user_id: refresh_token.user_id,
            refresh_token_id: refresh_token.id,
            created_at: now,
            expires_at: Self::expires_from(now),
        }
    }

    /// Mint and durably persist a short-lived credential derived from an
    /// already-persisted refresh token. Taking the materialized token (not
    /// a bare user id) guarantees the backing reference exists.
    pub async fn create_from_refresh_token(
        pool: &PgPool,
        refresh_token: &RefreshToken,
    ) -> anyhow::Result<AccessToken> {
        let token = Self::mint(refresh_token, Utc::now());

        sqlx::query(
            "INSERT INTO access_tokens (id, user_id, refresh_token_id, created_at, expires_at)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(token.id)
        .bind(token.user_id)
        .bind(token.refresh_token_id)
        .bind(token.created_at)
        .bind(token.expires_at)
        .execute(pool)
        .await?;

        Ok(token)
    }

    /// Reload a persisted token by its id (the row key).
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> anyhow::Result<Option<AccessToken>> {
        let token = sqlx::query_as::<_, AccessToken>(
            "SELECT id, user_id, refresh_token_id, created_at, expires_at
             FROM access_tokens
             WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(token)
    }
}
