use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    /// Expected audience (`aud`) of incoming Google ID tokens.
    pub server_id: String,
    /// Expected authorized party (`azp`) — the client application id.
    pub client_id: String,
    pub google_issuer: String,
    pub google_certs_url: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".into())
                .parse()?,
            server_id: required("SERVER_ID")?,
            client_id: required("CLIENT_ID")?,
            google_issuer: env::var("GOOGLE_ISSUER")
                .unwrap_or_else(|_| "https://accounts.google.com".into()),
            google_certs_url: env::var("GOOGLE_CERTS_URL")
                .unwrap_or_else(|_| "https://www.googleapis.com/oauth2/v3/certs".into()),
        })
    }
}

fn required(key: &str) -> anyhow::Result<String> {
    env::var(key).map_err(|_| anyhow::anyhow!("Missing required env var: {}", key))
}
