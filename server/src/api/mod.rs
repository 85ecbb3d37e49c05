//! API 路由模块
//!
//! 每个资源一个子模块，`router()` 返回挂载好路径的 `Router<ServerState>`。
//!
//! 路径约定：
//! - `/api/...` 公开接口 (报价提交、评价、画廊、公告、包裹追踪)
//! - `/api/admin/...` 管理接口 (需 JWT，由认证中间件统一拦截)

pub mod announcements;
pub mod auth;
pub mod gallery;
pub mod health;
pub mod orders;
pub mod quotes;
pub mod reviews;
pub mod stats;

use crate::utils::AppError;

/// 解析路径中的数字 ID
///
/// 路径参数按 String 提取再显式解析，非法 ID 返回 400 而不是
/// axum 默认的 422 拒绝
pub(crate) fn parse_id(raw: &str, resource: &str) -> Result<i64, AppError> {
    raw.parse::<i64>()
        .map_err(|_| AppError::Validation(format!("Invalid {} ID", resource)))
}
