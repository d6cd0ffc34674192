use actix_web::{post, web};
use std::sync::Arc;

use crate::db::service::DbService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{DBUserCreate, RUserCreate, UserCreateRes, MIN_PASSWORD_LEN};

/// Signup. Open to anyone; the created representation never carries the
/// password in any form.
#[post("/create")]
async fn create(
    db: web::Data<Arc<DbService>>,
    body: web::Json<RUserCreate>,
) -> ApiResult<UserCreateRes> {
    let payload = body.into_inner();

    if payload.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::Validation(format!(
            "password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }

    let user = db
        .create_user(DBUserCreate {
            email: payload.email,
            password: payload.password,
            name: payload.name.unwrap_or_default(),
        })
        .await?;

    Ok(ApiResponse::Created(UserCreateRes {
        email: user.email,
        name: user.name,
    }))
}
