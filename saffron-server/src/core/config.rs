use std::path::PathBuf;

use crate::auth::JwtConfig;

/// 服务器配置 - 站点服务的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | /var/lib/saffron | 工作目录 |
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | ADMIN_EMAIL | admin@saffron.local | 初始管理员邮箱 |
/// | ADMIN_PASSWORD | (开发默认) | 初始管理员密码 |
/// | RESERVATION_RETENTION_HOURS | 720 | 预订记录保留时长 |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/data/saffron HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录，存储数据库、上传图片、日志等文件
    pub work_dir: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// JWT 认证配置
    pub jwt: JwtConfig,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 初始管理员邮箱 (首次启动时创建)
    pub admin_email: String,
    /// 初始管理员密码
    pub admin_password: String,
    /// 初始管理员显示名称
    pub admin_display_name: String,
    /// 预订记录默认保留时长 (小时)，供管理端清理接口参考
    pub reservation_retention_hours: i64,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/saffron".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            jwt: JwtConfig::default(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            admin_email: std::env::var("ADMIN_EMAIL")
                .unwrap_or_else(|_| "admin@saffron.local".into()),
            admin_password: std::env::var("ADMIN_PASSWORD")
                .unwrap_or_else(|_| "saffron-dev-password".into()),
            admin_display_name: std::env::var("ADMIN_DISPLAY_NAME")
                .unwrap_or_else(|_| "Administrator".into()),
            reservation_retention_hours: std::env::var("RESERVATION_RETENTION_HOURS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(720),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
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

    /// 数据库目录 (work_dir/database)
    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }

    /// 上传图片目录 (work_dir/uploads/images)
    pub fn images_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("uploads/images")
    }

    /// 确保工作目录结构存在
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.database_dir())?;
        std::fs::create_dir_all(self.images_dir())?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
