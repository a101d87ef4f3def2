pub mod access_token;
pub mod auth;
pub mod identity;
pub mod refresh_token;
pub mod user_agent;
pub mod users;
