use crate::db::service::DbService;
use crate::types::{error::AppError, user::DBUserCreate};
use crate::utils::{password, token};
use chrono::Utc;
use entity::user::{ActiveModel as UserActive, Entity as User, Model as UserModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, Set,
    TransactionTrait,
};
use uuid::Uuid;

/// Lowercase the whole address before storage or lookup.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

impl DbService {
    pub async fn user_exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(normalize_email(email)))
            .count(&self.db)
            .await?
            > 0)
    }

    pub async fn get_user_by_id(&self, id: &Uuid) -> Result<UserModel, AppError> {
        Ok(User::find_by_id(*id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<UserModel, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(normalize_email(email)))
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    /// Signup: validate, normalize and persist a new user.
    pub async fn create_user(&self, payload: DBUserCreate) -> Result<UserModel, AppError> {
        let email = normalize_email(&payload.email);
        if email.is_empty() || !email.contains('@') {
            return Err(AppError::Validation(
                "a valid email address is required".into(),
            ));
        }
        if self.user_exists_by_email(&email).await? {
            return Err(AppError::Validation(
                "a user with this email already exists".into(),
            ));
        }

        let now = Utc::now();
        let txn = self.db.begin().await?;

        let user = UserActive {
            id: Set(token::new_id()),
            name: Set(payload.name),
            email: Set(email),
            password_hash: Set(password::hash(&payload.password)?),
            is_staff: Set(false),
            is_superuser: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        Ok(user)
    }

    /// Administrative bootstrap path, never reachable from the public API.
    pub async fn create_superuser(&self, email: &str, password: &str) -> Result<UserModel, AppError> {
        let user = self
            .create_user(DBUserCreate {
                email: email.to_owned(),
                password: password.to_owned(),
                name: String::new(),
            })
            .await?;

        let mut am: UserActive = user.into();
        am.is_staff = Set(true);
        am.is_superuser = Set(true);
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.db).await?)
    }

    /// Credential check backing token issuance. The caller cannot tell an
    /// unknown email from a wrong password.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<UserModel, AppError> {
        let user = match self.get_user_by_email(email).await {
            Ok(user) => user,
            Err(_) => {
                return Err(AppError::Validation(
                    "unable to authenticate with provided credentials".into(),
                ))
            }
        };
        if !password::verify(password, &user.password_hash)? {
            return Err(AppError::Validation(
                "unable to authenticate with provided credentials".into(),
            ));
        }
        Ok(user)
    }

    /// Partial update of the caller's own account. Absent fields are left
    /// untouched; a new password is re-hashed before persisting.
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        name: Option<String>,
        password: Option<String>,
    ) -> Result<UserModel, AppError> {
        let mut am: UserActive = self.get_user_by_id(&user_id).await?.into();
        if let Some(name) = name {
            am.name = Set(name);
        }
        if let Some(password) = password {
            am.password_hash = Set(password::hash(&password)?);
        }
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.db).await?)
    }
}
