use account_auth::{
    db::service::DbService,
    routes,
    types::{error::AppError, user::DBUserCreate},
};
use actix_web::{web, App};
use entity::user::Model as UserModel;
use std::sync::Arc;
use uuid::Uuid;

#[allow(dead_code)]
pub const TEST_PASSWORD: &str = "test@123";

pub struct TestClient {
    pub db: Arc<DbService>,
}

impl TestClient {
    pub fn new(db: Arc<DbService>) -> Self {
        TestClient { db }
    }

    #[allow(dead_code)]
    pub fn create_app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .configure(routes::configure_routes)
    }

    /// Seeds a user directly through the store, password `TEST_PASSWORD`.
    #[allow(dead_code)]
    pub async fn create_test_user(
        &self,
        email: Option<String>,
    ) -> Result<UserModel, AppError> {
        let email = email.unwrap_or_else(|| format!("user-{}@test.com", Uuid::new_v4()));

        self.db
            .create_user(DBUserCreate {
                email,
                password: TEST_PASSWORD.to_string(),
                name: "Test User".to_string(),
            })
            .await
    }

    /// Seeds a user and logs it in, returning the user and its bearer token.
    #[allow(dead_code)]
    pub async fn create_authed_user(
        &self,
        email: Option<String>,
    ) -> Result<(UserModel, String), AppError> {
        let user = self.create_test_user(email).await?;
        let token = self.db.get_or_create_token(user.id).await?;
        Ok((user, token))
    }
}
