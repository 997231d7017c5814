use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::user::User;

// Request de login
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 3, max = 100))]
    pub username: String,

    #[validate(length(min = 8, max = 200))]
    pub password: String,
}

// Información del usuario autenticado (sin password)
#[derive(Debug, Serialize)]
pub struct AuthUserInfo {
    pub id: String,
    pub username: String,
    pub full_name: Option<String>,
    pub user_role: String,
}

impl From<User> for AuthUserInfo {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username,
            full_name: user.full_name,
            user_role: user.user_role,
        }
    }
}

// Response de login
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
    pub user: AuthUserInfo,
}
