use anyhow::Result;
use sea_orm::Database;
use tracing::{debug, info, warn};

use crate::schemas::AppState;

/// Signing and expiry settings for issued bearer tokens.
#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_expiry_minutes: i64,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The secret must never end up in logs
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"<redacted>")
            .field("token_expiry_minutes", &self.token_expiry_minutes)
            .finish()
    }
}

impl AuthConfig {
    pub fn from_env() -> Self {
        let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            warn!("JWT_SECRET not set, using an insecure development default");
            "insecure-development-secret".to_string()
        });

        let token_expiry_minutes = std::env::var("JWT_EXPIRY_MINUTES")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(30);

        Self {
            jwt_secret,
            token_expiry_minutes,
        }
    }
}

/// Initialize application configuration and state
pub async fn initialize_app_state_with_url(database_url: &str) -> Result<AppState> {
    // Load configuration
    dotenvy::dotenv().ok();

    // Connect to database
    info!("Connecting to database: {}", database_url);
    let db = Database::connect(database_url).await?;

    let auth = AuthConfig::from_env();
    debug!("Token expiry set to {} minutes", auth.token_expiry_minutes);

    Ok(AppState { db, auth })
}
