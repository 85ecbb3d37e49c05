use crate::auth::{JwtConfig, hash_password};

/// 服务器配置 - 站点后端的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | DATABASE_PATH | zedcart.db | SQLite 数据库文件路径 |
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | STATIC_DIR | dist | 前端静态文件目录 (仅生产环境) |
/// | ADMIN_USERNAME | admin | 管理员用户名 |
/// | ADMIN_PASSWORD_HASH | (无) | 管理员口令的 Argon2 哈希 |
/// | ADMIN_PASSWORD | admin123 | 明文口令 (仅当未设置哈希时使用) |
///
/// # 示例
///
/// ```ignore
/// DATABASE_PATH=/data/zedcart.db HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite 数据库文件路径
    pub database_path: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// JWT 认证配置
    pub jwt: JwtConfig,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 前端静态文件目录 (生产环境下作为 fallback 服务)
    pub static_dir: String,
    /// 管理员用户名
    pub admin_username: String,
    /// 管理员口令哈希 (Argon2 PHC 格式)
    pub admin_password_hash: String,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值。
    /// 部署在 Render 上时 (RENDER 环境变量存在)，数据库
    /// 落在持久化磁盘挂载点 /data 下。
    pub fn from_env() -> Self {
        let environment =
            std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let database_path = std::env::var("DATABASE_PATH").unwrap_or_else(|_| {
            if environment == "production" && std::env::var("RENDER").is_ok() {
                "/data/zedcart.db".into()
            } else {
                "zedcart.db".into()
            }
        });

        // 优先使用预先哈希的口令，避免明文出现在环境里
        let admin_password_hash = match std::env::var("ADMIN_PASSWORD_HASH") {
            Ok(hash) => hash,
            Err(_) => {
                let plain =
                    std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin123".into());
                hash_password(&plain).unwrap_or_else(|e| {
                    // Argon2 with valid defaults never fails on arbitrary input
                    panic!("FATAL: failed to hash admin password: {}", e)
                })
            }
        };

        Self {
            database_path,
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            jwt: JwtConfig::default(),
            environment,
            static_dir: std::env::var("STATIC_DIR").unwrap_or_else(|_| "dist".into()),
            admin_username: std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".into()),
            admin_password_hash,
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(database_path: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.database_path = database_path.into();
        config.http_port = http_port;
        config
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::verify_password;

    #[test]
    fn test_overrides() {
        let config = Config::with_overrides("test.db", 8080);
        assert_eq!(config.database_path, "test.db");
        assert_eq!(config.http_port, 8080);
    }

    #[test]
    fn test_default_admin_credentials() {
        let config = Config::with_overrides("test.db", 0);
        assert_eq!(config.admin_username, "admin");
        assert!(verify_password("admin123", &config.admin_password_hash).unwrap_or(false));
    }
}
