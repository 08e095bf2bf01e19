#[cfg(test)]
pub mod test_utils {
    use crate::config::AuthConfig;
    use crate::router::create_router;
    use crate::schemas::{ApiResponse, AppState};
    use axum::Router;
    use axum_test::TestServer;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Statement};
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    /// Create an in-memory SQLite database for testing
    pub async fn setup_test_db() -> DatabaseConnection {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to connect to in-memory database");

        // Cascade deletes depend on this pragma
        db.execute(Statement::from_string(
            db.get_database_backend(),
            "PRAGMA foreign_keys = ON;".to_string(),
        ))
        .await
        .expect("Failed to enable foreign keys");

        // Run migrations
        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");

        db
    }

    /// Create AppState for testing
    pub async fn setup_test_app_state() -> AppState {
        let db = setup_test_db().await;

        AppState {
            db,
            auth: AuthConfig {
                jwt_secret: "test-only-secret".to_string(),
                token_expiry_minutes: 30,
            },
        }
    }

    /// Initialize tracing for tests with output to STDERR. The log level is
    /// taken from RUST_LOG, defaulting to WARN.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Create axum app for testing
    pub async fn setup_test_app() -> Router {
        let _ = init_test_tracing();

        let state = setup_test_app_state().await;
        create_router(state)
    }

    /// Register `email` and log in, returning the bearer token.
    pub async fn register_and_login(server: &TestServer, email: &str) -> String {
        let response = server
            .post("/api/auth/register")
            .json(&serde_json::json!({
                "email": email,
                "password": "correct-horse"
            }))
            .await;
        response.assert_status_ok();

        let response = server
            .post("/api/auth/login")
            .json(&serde_json::json!({
                "email": email,
                "password": "correct-horse"
            }))
            .await;
        response.assert_status_ok();

        let body: ApiResponse<serde_json::Value> = response.json();
        body.data["access_token"]
            .as_str()
            .expect("login response carries a token")
            .to_string()
    }
}
