//! 认证模块
//!
//! JWT 令牌签发/校验、请求认证中间件与管理员路由保护。

pub mod jwt;
pub mod middleware;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use middleware::{require_admin, require_auth};
