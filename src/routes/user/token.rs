use actix_web::{post, web};
use std::sync::Arc;

use crate::db::service::DbService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{RTokenCreate, TokenRes};

/// Login. A user's token is minted on first success and handed back
/// unchanged on every success after that.
#[post("/token")]
async fn token(
    db: web::Data<Arc<DbService>>,
    body: web::Json<RTokenCreate>,
) -> ApiResult<TokenRes> {
    let payload = body.into_inner();

    if payload.email.trim().is_empty() || payload.password.is_empty() {
        return Err(AppError::Validation(
            "email and password are required".into(),
        ));
    }

    let user = db.authenticate(&payload.email, &payload.password).await?;
    let key = db.get_or_create_token(user.id).await?;

    Ok(ApiResponse::Ok(TokenRes { token: key }))
}
