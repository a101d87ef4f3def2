use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    Json,
};
use serde_json::{json, Value};

use crate::{
    middleware::auth::AuthenticatedUser,
    models::{auth::LoginRequest, user::UserProfile},
    services::{
        auth::{AuthService, LoginOutcome},
        users::UserService,
    },
    AppState,
};

pub async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<LoginRequest>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    match AuthService::login(
        &state.db,
        &state.verifier,
        &body.method,
        &body.credential,
        user_agent,
    )
    .await
    {
        Ok(LoginOutcome::Completed(response)) => {
            Ok(Json(serde_json::to_value(response).unwrap()))
        }
        // Valid identity, no account yet: hand the claims back so the
        // client can start the signup flow.
        Ok(LoginOutcome::NotProvisioned(identity)) => Ok(Json(json!({ "result": identity }))),
        Ok(LoginOutcome::Rejected(reason)) => Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": reason.to_string() })),
        )),
        Err(e) => {
            tracing::error!("login flow failed: {:#}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Internal server error" })),
            ))
        }
    }
}

pub async fn me(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    UserService::get_by_id(&state.db, user.user_id)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
        })?
        .map(|u| Json(serde_json::to_value(UserProfile::from(u)).unwrap()))
        .ok_or((
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "User not found" })),
        ))
}
