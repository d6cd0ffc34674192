use crate::db::service::DbService;
use crate::types::error::AppError;
use crate::utils::token::new_token;
use chrono::Utc;
use entity::auth_token::{ActiveModel as TokenActive, Entity as AuthToken};
use entity::user::Model as UserModel;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

impl DbService {
    /// Returns the user's standing token, issuing one on first login.
    pub async fn get_or_create_token(&self, user_id: Uuid) -> Result<String, AppError> {
        if let Some(existing) = AuthToken::find()
            .filter(entity::auth_token::Column::UserId.eq(user_id))
            .one(&self.db)
            .await?
        {
            return Ok(existing.key);
        }

        let key = new_token();
        TokenActive {
            key: Set(key.clone()),
            user_id: Set(user_id),
            created_at: Set(Utc::now()),
        }
        .insert(&self.db)
        .await?;
        Ok(key)
    }

    /// Resolves a presented bearer token to its owner.
    pub async fn get_user_by_token(&self, key: &str) -> Result<UserModel, AppError> {
        let token = AuthToken::find_by_id(key.to_owned())
            .one(&self.db)
            .await?
            .ok_or(AppError::Unauthorized)?;
        self.get_user_by_id(&token.user_id)
            .await
            .map_err(|_| AppError::Unauthorized)
    }
}
