use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use crate::AppState;

/// Liveness probe: the service is only useful when the token store is
/// reachable, so the probe pings it.
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    if let Err(e) = sqlx::query("SELECT 1").execute(&state.db).await {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "service": "signin-api",
                "status": "error",
                "store": e.to_string(),
            })),
        );
    }

    (
        StatusCode::OK,
        Json(json!({
            "service": "signin-api",
            "status": "ok",
            "store": "reachable",
        })),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use sqlx::postgres::PgPoolOptions;

    use crate::{config::Config, services::identity::GoogleIdVerifier, AppState};

    fn test_state() -> AppState {
        let config = Arc::new(Config {
            // Port 1 is never a Postgres, so the ping must fail fast.
            database_url: "postgres://127.0.0.1:1/signin".into(),
            host: "127.0.0.1".into(),
            port: 0,
            server_id: "test-server".into(),
            client_id: "test-client".into(),
            google_issuer: "https://accounts.google.com".into(),
            google_certs_url: "https://www.googleapis.com/oauth2/v3/certs".into(),
        });
        AppState {
            db: PgPoolOptions::new()
                .acquire_timeout(Duration::from_secs(2))
                .connect_lazy(&config.database_url)
                .unwrap(),
            verifier: Arc::new(GoogleIdVerifier::new(&config).unwrap()),
            config,
        }
    }

    #[tokio::test]
    async fn unreachable_store_reports_unavailable() {
        let (status, Json(body)) = health_check(State(test_state())).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["service"], "signin-api");
        assert_eq!(body["status"], "error");
    }
}
