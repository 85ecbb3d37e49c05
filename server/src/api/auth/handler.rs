//! Authentication Handlers
//!
//! Handles admin login and token issuance

use std::time::Duration;

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::auth::verify_password;
use crate::core::ServerState;
use crate::security_log;
use crate::utils::{AppError, AppResult};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
}

/// POST /api/auth/login - 管理员登录
///
/// 校验配置的管理员凭证并签发 JWT。
/// 用户名不存在与口令错误返回同一错误消息，防止枚举。
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    // Fixed delay to prevent timing attacks (before checking result)
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    let username_matches = req.username == state.config.admin_username;

    // 无论用户名是否匹配都跑一次 argon2，保持耗时一致
    let password_valid = verify_password(&req.password, &state.config.admin_password_hash)
        .map_err(|e| AppError::Internal(format!("Password verification failed: {}", e)))?;

    if !username_matches || !password_valid {
        security_log!(
            "WARN",
            "login_failed",
            username = req.username.clone()
        );
        return Err(AppError::invalid_credentials());
    }

    let token = state
        .jwt_service
        .generate_token(&req.username, "admin")
        .map_err(|e| AppError::Internal(format!("Failed to generate token: {}", e)))?;

    tracing::info!(username = %req.username, "Admin logged in successfully");

    Ok(Json(LoginResponse {
        token,
        username: req.username,
    }))
}
