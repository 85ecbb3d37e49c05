//! 认证模块
//!
//! JWT 会话令牌 + Argon2 口令校验。
//! 登录接口签发令牌，中间件对所有 /api/admin/ 路由逐请求验证。

pub mod jwt;
pub mod middleware;
pub mod password;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtService};
pub use middleware::require_auth;
pub use password::{hash_password, verify_password};
