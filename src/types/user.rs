use serde::{Deserialize, Serialize};

/// Passwords shorter than this are rejected, on signup and on update.
pub const MIN_PASSWORD_LEN: usize = 5;

#[derive(Serialize, Deserialize)]
pub struct RUserCreate {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct UserCreateRes {
    pub email: String,
    pub name: String,
}

#[derive(Serialize, Deserialize)]
pub struct RTokenCreate {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
pub struct TokenRes {
    pub token: String,
}

/// The caller's own account, as exposed by the profile endpoint. Nothing
/// else leaves the store, passwords and hashes included.
#[derive(Serialize, Deserialize)]
pub struct ProfileRes {
    pub name: String,
    pub email: String,
}

#[derive(Serialize, Deserialize, Default)]
pub struct RProfileUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Persistence-level signup parameters, plaintext password included; the
/// store hashes before writing.
#[derive(Serialize, Deserialize)]
pub struct DBUserCreate {
    pub email: String,
    pub password: String,
    pub name: String,
}
