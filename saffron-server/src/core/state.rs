use std::path::PathBuf;
use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::DbService;
use crate::db::repository::AdminUserRepository;

/// 服务器状态 - 持有所有服务的单例引用
///
/// ServerState 是站点服务的核心数据结构，持有所有服务的共享引用。
/// 使用 Arc 实现浅拷贝，所有权成本极低。
///
/// # 服务组件
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | Surreal<Db> | 嵌入式数据库 |
/// | jwt_service | Arc<JwtService> | JWT 认证服务 |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 嵌入式数据库 (SurrealDB)
    pub db: Surreal<Db>,
    /// JWT 认证服务 (Arc 共享所有权)
    pub jwt_service: Arc<JwtService>,
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 工作目录结构 (确保目录存在)
    /// 2. 数据库 (work_dir/database/saffron.db)
    /// 3. JWT 服务
    /// 4. 初始管理员账户 (首次启动)
    ///
    /// # Panics
    ///
    /// 数据库初始化失败时 panic
    pub async fn initialize(config: &Config) -> Self {
        // 0. Ensure work_dir structure exists
        config
            .ensure_work_dir_structure()
            .expect("Failed to create work directory structure");

        // 1. Initialize DB
        let db_path = config.database_dir().join("saffron.db");
        let db_path_str = db_path.to_string_lossy();

        let db_service = DbService::new(&db_path_str)
            .await
            .expect("Failed to initialize database");

        let state = Self::with_db(config.clone(), db_service.db);

        // 2. Bootstrap the admin account
        state
            .bootstrap_admin()
            .await
            .expect("Failed to bootstrap admin account");

        state
    }

    /// 使用已打开的数据库构造状态 (测试用内存数据库走这里)
    pub fn with_db(config: Config, db: Surreal<Db>) -> Self {
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        Self {
            config,
            db,
            jwt_service,
        }
    }

    /// 首次启动时创建初始管理员账户
    ///
    /// 已存在任何账户时跳过。
    pub async fn bootstrap_admin(&self) -> Result<(), crate::utils::AppError> {
        let repo = AdminUserRepository::new(self.db.clone());
        if repo
            .any_exists()
            .await
            .map_err(crate::utils::AppError::from)?
        {
            return Ok(());
        }

        repo.create(
            &self.config.admin_email,
            &self.config.admin_display_name,
            &self.config.admin_password,
            "admin",
        )
        .await?;

        tracing::info!(
            email = %self.config.admin_email,
            "Bootstrapped initial admin account"
        );
        Ok(())
    }

    /// 获取数据库实例
    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }

    /// 获取工作目录
    pub fn work_dir(&self) -> PathBuf {
        PathBuf::from(&self.config.work_dir)
    }

    /// 获取 JWT 服务
    pub fn jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }

    /// 上传图片目录
    pub fn images_dir(&self) -> PathBuf {
        self.config.images_dir()
    }
}
