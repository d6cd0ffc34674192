use actix_web::{web, App, HttpServer};
use log::{error, info};
use std::sync::Arc;

use account_auth::config::EnvConfig;
use account_auth::db::service::DbService;
use account_auth::routes::configure_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let config = EnvConfig::from_env();
    let addr = format!("0.0.0.0:{}", config.port);

    let db = Arc::new(
        DbService::new(&config.db_url)
            .await
            .expect("Failed to initialize database service"),
    );

    if let Some(admin) = &config.admin {
        bootstrap_admin(&db, &admin.email, &admin.password).await;
    }

    info!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(Arc::clone(&db)))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}

async fn bootstrap_admin(db: &Arc<DbService>, email: &str, password: &str) {
    match db.user_exists_by_email(email).await {
        Ok(true) => info!("Admin account already present, skipping bootstrap"),
        Ok(false) => match db.create_superuser(email, password).await {
            Ok(user) => info!("Bootstrapped admin account {}", user.email),
            Err(e) => error!("Admin bootstrap failed: {}", e),
        },
        Err(e) => error!("Admin bootstrap lookup failed: {}", e),
    }
}
