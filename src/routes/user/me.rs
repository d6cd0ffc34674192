use actix_web::{get, patch, post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

use crate::db::service::DbService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{ProfileRes, RProfileUpdate, MIN_PASSWORD_LEN};

#[get("/me")]
async fn retrieve(db: web::Data<Arc<DbService>>, auth: BearerAuth) -> ApiResult<ProfileRes> {
    let user = db.get_user_by_token(auth.token()).await?;
    Ok(ApiResponse::Ok(ProfileRes {
        name: user.name,
        email: user.email,
    }))
}

#[patch("/me")]
async fn partial_update(
    db: web::Data<Arc<DbService>>,
    auth: BearerAuth,
    body: web::Json<RProfileUpdate>,
) -> ApiResult<ProfileRes> {
    let user = db.get_user_by_token(auth.token()).await?;
    let changes = body.into_inner();

    if let Some(password) = &changes.password {
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AppError::Validation(format!(
                "password must be at least {} characters",
                MIN_PASSWORD_LEN
            )));
        }
    }

    let updated = db
        .update_profile(user.id, changes.name, changes.password)
        .await?;

    Ok(ApiResponse::Ok(ProfileRes {
        name: updated.name,
        email: updated.email,
    }))
}

/// The profile resource is retrieve/update only. Method rejection wins over
/// auth, so this carries no extractor.
#[post("/me")]
async fn reject_post() -> ApiResult<ProfileRes> {
    Err(AppError::MethodNotAllowed)
}
