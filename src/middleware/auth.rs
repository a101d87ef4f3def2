use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};
use chrono::Utc;
use uuid::Uuid;

use crate::{services::access_token::AccessTokenService, AppState};

/// Identity attached to a request bearing a valid, unexpired access token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub access_token_id: Uuid,
}

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("Authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or((StatusCode::UNAUTHORIZED, "Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or((StatusCode::UNAUTHORIZED, "Invalid Authorization header format"))?;

        let token_id: Uuid = token
            .trim()
            .parse()
            .map_err(|_| (StatusCode::UNAUTHORIZED, "Invalid access token"))?;

        let access = AccessTokenService::find_by_id(&state.db, token_id)
            .await
            .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "Token lookup failed"))?
            .ok_or((StatusCode::UNAUTHORIZED, "Invalid access token"))?;

        // There is no revocation; the expiration timestamp is the only
        // invalidation mechanism, checked here by the consumer.
        if access.expires_at <= Utc::now() {
            return Err((StatusCode::UNAUTHORIZED, "Access token expired"));
        }

        Ok(AuthenticatedUser {
            user_id: access.user_id,
            access_token_id: access.id,
        })
    }
}
