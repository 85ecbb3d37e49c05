//! ZedCart Logistics Server - 物流营销站点后端
//!
//! # 架构概述
//!
//! 本模块是 ZedCart 后端的主入口，提供以下核心功能：
//!
//! - **数据库** (`db`): 嵌入式 SQLite 存储 (sqlx 连接池)
//! - **认证** (`auth`): JWT + Argon2 管理会话
//! - **HTTP API** (`api`): RESTful API 接口 (报价、订单、追踪、评价、画廊、公告)
//!
//! # 模块结构
//!
//! ```text
//! server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── auth/          # JWT 认证、口令校验
//! ├── api/           # HTTP 路由和处理器
//! ├── utils/         # 错误、日志
//! └── db/            # 数据库层 (schema、models、repository)
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod utils;

// Re-export 公共类型
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult, MessageResponse};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - 支持 tracing 格式说明符
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// 设置运行环境 (dotenv + 日志)
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    init_logger();
    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
+--------------------------------------+
|   ZedCart Logistics - Site Backend   |
+--------------------------------------+
    "#
    );
}
