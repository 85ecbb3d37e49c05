//! 工具模块 - 通用工具函数和类型
//!
//! # 内容
//!
//! - [`AppError`] - 应用错误类型
//! - [`MessageResponse`] - 简单消息响应
//! - 日志等工具

pub mod error;
pub mod logger;

pub use error::{AppError, AppResult, MessageResponse};
