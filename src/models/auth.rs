use serde::{Deserialize, Serialize};

use super::token::{AccessToken, RefreshToken};

/// Login request body: which provider the credential came from, and the
/// opaque assertion string itself.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub method: String,
    pub credential: String,
}

/// Identity claims extracted from a validated provider assertion.
/// Not a User record — resolution happens separately.
#[derive(Debug, Clone, Serialize)]
pub struct VerifiedIdentity {
    pub sub: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub picture: Option<String>,
}

/// Tagged verification outcome so callers cannot forget the negative case.
#[derive(Debug)]
pub enum Verification {
    Verified(VerifiedIdentity),
    Rejected(RejectReason),
}

/// Expected, locally classified rejection causes. Dependency failures
/// (provider unreachable, store write failed) are not listed here — those
/// propagate as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RejectReason {
    #[error("Unknown authentication method")]
    UnknownMethod,
    #[error("Unauthorized client")]
    Unauthorized,
    #[error("Audience mismatch")]
    AudienceMismatch,
    #[error("Token has been expired")]
    CredentialExpired,
}

/// Client signature parsed from the request's User-Agent, recorded with
/// each refresh token for audit.
#[derive(Debug, Clone)]
pub struct ClientContext {
    pub application: String,
    pub platform: String,
    pub user_agent: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: AccessToken,
    pub expires_in: u64,
    pub token_type: String,
    pub refresh_token: RefreshToken,
}
