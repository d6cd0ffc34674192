use account_auth::db::service::DbService;
use std::sync::Arc;

pub mod client;

pub struct TestContext {
    pub db: Arc<DbService>,
}

impl TestContext {
    /// Fresh in-memory store per test, migrated and ready.
    pub async fn new() -> TestContext {
        let db = Arc::new(
            DbService::new("sqlite::memory:")
                .await
                .expect("Failed to initialize database service"),
        );
        TestContext { db }
    }
}

// Test data helpers
pub mod test_data {
    use serde_json::{json, Value};

    #[allow(dead_code)]
    pub fn sample_user() -> Value {
        json!({
            "email": "test123@xyz.com",
            "password": "test@123",
            "name": "testuser"
        })
    }

    #[allow(dead_code)]
    pub fn sample_user_with_email(email: &str) -> Value {
        json!({
            "email": email,
            "password": "test@123",
            "name": "testuser"
        })
    }
}
