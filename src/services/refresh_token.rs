use chrono::{DateTime, Months, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{
    auth::ClientContext,
    token::RefreshToken,
    user::User,
};

pub struct RefreshTokenService;

impl RefreshTokenService {
    /// Refresh tokens live for six calendar months from issuance, computed
    /// once at creation. Month arithmetic clamps the day-of-month at
    /// month-end (e.g. Aug 31 + 6 months lands on the last day of February).
    pub fn expires_from(created_at: DateTime<Utc>) -> DateTime<Utc> {
        created_at + Months::new(6)
    }

    /// Build a new token value with a fresh random id; persistence is a
    /// separate step.
    fn mint(user: &User, ctx: &ClientContext, now: DateTime<Utc>) -> RefreshToken {
        RefreshToken {
            id: Uuid::new_v4(),
            application: ctx.application.clone(),
            platform: ctx.platform.clone(),
            user_agent: ctx.user_agent.clone(),
            user_id: user.id,
            created_at: now,
            expires_at: Self::expires_from(now),
        }
    }

    /// Mint and durably persist a new session anchor for the user.
    /// The token is only returned once the row is written — there is no
    /// in-memory-only success path.
    pub async fn create_for_user(
        pool: &PgPool,
        user: &User,
        ctx: &ClientContext,
    ) -> anyhow::Result<RefreshToken> {
        let token = Self::mint(user, ctx, Utc::now());

        sqlx::query(
            "INSERT INTO refresh_tokens (id, application, platform, user_agent, user_id, created_at, expires_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(token.id)
        .bind(&token.application)
        .bind(&token.platform)
        .bind(&token.user_agent)
        .bind(token.user_id)
        .bind(token.created_at)
        .bind(token.expires_at)
        .execute(pool)
        .await?;

        Ok(token)
    }
}
