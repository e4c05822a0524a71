//! Saffron Server - 餐厅网站与后台管理 API 服务
//!
//! # 架构概述
//!
//! 本模块是 Saffron Server 的主入口，提供以下核心功能：
//!
//! - **数据库** (`db`): 嵌入式 SurrealDB 存储，按资源划分 Repository
//! - **认证** (`auth`): JWT + Argon2 认证体系，管理员路由保护
//! - **HTTP API** (`api`): 菜单、横幅、预订、订单、评价等 RESTful 接口
//!
//! # 模块结构
//!
//! ```text
//! saffron-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── auth/          # JWT 认证、中间件
//! ├── api/           # HTTP 路由和处理器
//! ├── db/            # 数据库层 (模型 + Repository)
//! └── utils/         # 错误、校验、日志工具
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod utils;

// Re-export 公共类型
pub use api::{OneshotRouter, build_app, build_router};
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

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

pub fn print_banner() {
    println!(
        r#"
   _____        __  __
  / ___/____ _ / _|/ _|_____ ___   _ __
  \__ \/ __ `// |_| |_/ ___// _ \ / /\ \
 ___/ / /_/ /|  _|  _/ /   | (_) | / / /
/____/\__,_/ |_| |_|/_/     \___/|_/_/_/

Saffron - restaurant site & admin API
"#
    );
}

/// 设置运行环境 (dotenv + 日志)
pub fn setup_environment() -> anyhow::Result<()> {
    // .env 文件可选，缺失时静默忽略
    let _ = dotenv::dotenv();

    let log_dir = std::env::var("LOG_DIR").ok();
    utils::logger::init_logger_with_file(
        std::env::var("LOG_LEVEL").ok().as_deref(),
        log_dir.as_deref(),
    );

    Ok(())
}
