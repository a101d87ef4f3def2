use sqlx::PgPool;

use crate::{
    models::auth::{LoginResponse, RejectReason, Verification, VerifiedIdentity},
    services::{
        access_token::AccessTokenService, identity::GoogleIdVerifier,
        refresh_token::RefreshTokenService, user_agent, users::UserService,
    },
};

/// Fixed access-token lifetime reported to clients, in seconds.
pub const ACCESS_TOKEN_TTL_SECONDS: u64 = 86400;

/// Outcome of the login flow.
#[derive(Debug)]
pub enum LoginOutcome {
    Completed(LoginResponse),
    /// Identity verified but no matching account exists. Returned as data,
    /// not an error, so a separate signup flow can pick up the claims.
    NotProvisioned(VerifiedIdentity),
    Rejected(RejectReason),
}

pub struct AuthService;

impl AuthService {
    /// End-to-end login: verify the provider assertion, resolve the user,
    /// then mint the refresh/access token pair. Access-token issuance takes
    /// the persisted refresh token as input, so the two writes are strictly
    /// sequential. Expected rejections come back as `Rejected`; provider or
    /// store faults propagate as errors and are never retried here (the
    /// token writes are not idempotent).
    pub async fn login(
        pool: &PgPool,
        verifier: &GoogleIdVerifier,
        method: &str,
        credential: &str,
        user_agent: &str,
    ) -> anyhow::Result<LoginOutcome> {
        match method.to_lowercase().as_str() {
            "google" => {}
            _ => return Ok(LoginOutcome::Rejected(RejectReason::UnknownMethod)),
        }

        let identity = match verifier.verify(credential).await? {
            Verification::Verified(identity) => identity,
            Verification::Rejected(reason) => return Ok(LoginOutcome::Rejected(reason)),
        };

        let user = match UserService::find_by_google_id(pool, &identity.sub).await? {
            Some(user) => user,
            None => return Ok(LoginOutcome::NotProvisioned(identity)),
        };

        let ctx = user_agent::parse_client_context(user_agent);
        let refresh_token = RefreshTokenService::create_for_user(pool, &user, &ctx).await?;
        let access_token = AccessTokenService::create_from_refresh_token(pool, &refresh_token).await?;

        Ok(LoginOutcome::Completed(LoginResponse {
            access_token,
            expires_in: ACCESS_TOKEN_TTL_SECONDS,
            token_type: "Bearer".to_string(),
            refresh_token,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use sqlx::postgres::PgPoolOptions;

    fn lazy_pool() -> PgPool {
        // Never actually connects — the flows under test must return
        // before touching the store.
        PgPoolOptions::new()
            .connect_lazy("postgres://localhost/unreachable")
            .unwrap()
    }

    fn test_verifier() -> GoogleIdVerifier {
        GoogleIdVerifier::new(&Config {
            database_url: "postgres://localhost/unreachable".into(),
            host: "127.0.0.1".into(),
            port: 0,
            server_id: "test-server".into(),
            client_id: "test-client".into(),
            google_issuer: "https://accounts.google.com".into(),
            google_certs_url: "https://www.googleapis.com/oauth2/v3/certs".into(),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn unknown_method_is_rejected_without_verification() {
        let outcome =
            AuthService::login(&lazy_pool(), &test_verifier(), "facebook", "whatever", "")
                .await
                .unwrap();
        match outcome {
            LoginOutcome::Rejected(RejectReason::UnknownMethod) => {}
            other => panic!("expected UnknownMethod rejection, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn method_selector_is_case_insensitive() {
        // "GOOGLE" must dispatch to the verifier; a malformed credential is
        // then rejected before any network or store access.
        let outcome = AuthService::login(&lazy_pool(), &test_verifier(), "GOOGLE", "not-a-jwt", "")
            .await
            .unwrap();
        match outcome {
            LoginOutcome::Rejected(RejectReason::Unauthorized) => {}
            other => panic!("expected Unauthorized rejection, got {other:?}"),
        }
    }
}
