use actix_web::web;

pub mod health;
pub mod user;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/health").service(health::health));
    cfg.service(
        web::scope("/user")
            .service(user::create::create)
            .service(user::token::token)
            .service(user::me::retrieve)
            .service(user::me::partial_update)
            .service(user::me::reject_post),
    );
}
