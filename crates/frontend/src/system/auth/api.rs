use crate::shared::api;
use contracts::shared::error::ApiError;
use contracts::shared::mutation::Method;
use contracts::system::auth::{AuthResponse, LoginRequest, ProfileUpdate, RegisterRequest, UserInfo};

/// Вход по email и паролю
pub async fn login(request: &LoginRequest) -> Result<AuthResponse, ApiError> {
    api::send_json(Method::Post, "/api/auth/local", request, None).await
}

/// Регистрация нового пользователя
pub async fn register(request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
    api::send_json(Method::Post, "/api/auth/local/register", request, None).await
}

/// Записать имя и фамилию в профиль
pub async fn update_profile(
    user_id: i64,
    update: &ProfileUpdate,
    token: &str,
) -> Result<UserInfo, ApiError> {
    api::send_json(
        Method::Put,
        &format!("/api/users/{}", user_id),
        update,
        Some(token),
    )
    .await
}

/// Get current user info
pub async fn get_current_user(token: &str) -> Result<UserInfo, ApiError> {
    api::get_json_with_token("/api/users/me", Some(token)).await
}
