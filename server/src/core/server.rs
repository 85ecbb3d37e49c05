//! Server Implementation
//!
//! HTTP 服务器启动和管理

use std::net::SocketAddr;

use axum::{Router, extract::DefaultBodyLimit, middleware};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};

use crate::auth::require_auth;
use crate::core::{Config, ServerState};
use crate::utils::AppError;

/// JSON 请求体上限 (画廊图片以 base64 内嵌，需要放宽默认 2MB 限制)
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// HTTP 请求日志中间件
async fn log_request(
    request: axum::extract::Request,
    next: middleware::Next,
) -> axum::response::Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let status = response.status();

    tracing::info!(target: "http_access", "{} {} {}", method, uri, status);

    response
}

/// Build the Axum router (without state)
pub fn build_app() -> Router<ServerState> {
    Router::<ServerState>::new()
        // Core APIs
        .merge(crate::api::auth::router())
        .merge(crate::api::health::router())
        // Site data APIs
        .merge(crate::api::quotes::router())
        .merge(crate::api::orders::router())
        .merge(crate::api::reviews::router())
        .merge(crate::api::gallery::router())
        .merge(crate::api::announcements::router())
        .merge(crate::api::stats::router())
}

/// Build the complete router with state and middleware stack
///
/// 中间件由内向外：认证 -> 静态文件 fallback -> 请求体限制 ->
/// CORS -> gzip 压缩 -> 访问日志
pub fn build_router(state: ServerState) -> Router {
    let mut app = build_app()
        // JWT 认证中间件 - 在 Router 级别应用，require_auth 内部会跳过公共路由
        // 使用 from_fn_with_state 以便中间件可以访问 ServerState
        .layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .with_state(state.clone());

    // 生产环境下由同一进程托管前端构建产物，未匹配的路径
    // 回落到 index.html (SPA 路由)
    if state.config.is_production() {
        let static_dir = state.config.static_dir.clone();
        let index = format!("{}/index.html", static_dir);
        app = app.fallback_service(
            ServeDir::new(&static_dir).not_found_service(ServeFile::new(index)),
        );
    }

    app.layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(middleware::from_fn(log_request))
}

/// HTTP Server
pub struct Server {
    config: Config,
    state: ServerState,
}

impl Server {
    /// Create server with an initialized state
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self { config, state }
    }

    pub async fn run(&self) -> Result<(), AppError> {
        let app = build_router(self.state.clone());

        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        tracing::info!("🚚 ZedCart server starting on {}", addr);

        let handle = axum_server::Handle::new();

        // Ctrl-C 触发优雅停机，给未完成的请求 10 秒收尾
        let handle_clone = handle.clone();
        tokio::spawn(async move {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down...");
            handle_clone.graceful_shutdown(Some(std::time::Duration::from_secs(10)));
        });

        axum_server::bind(addr)
            .handle(handle)
            .serve(app.into_make_service())
            .await
            .map_err(|e| AppError::Internal(format!("Server error: {}", e)))?;

        Ok(())
    }
}
