//! Backend 层
//!
//! 负责：
//!     - 读取配置文件（config.rs）
//!     - 连接模型管理后端，构建 model-admin-core 的服务（本文件）
//!     - 在 tokio 运行时中执行控制器发出的命令（executor.rs）

mod config;
mod executor;

pub use config::{apply_env_overrides, AppConfig, BackendConfig, ConfigService, FileConfigService};
pub use executor::Executor;

use std::sync::Arc;

use anyhow::{Context, Result};
use model_admin_client::RestBackend;
use model_admin_core::{ServiceContext, Services};

/// 根据后端配置创建服务
pub fn connect(config: &BackendConfig) -> Result<Services> {
    let backend = RestBackend::new(config.base_url.clone(), config.api_token.clone())
        .with_context(|| format!("Invalid backend configuration for {}", config.base_url))?;

    let ctx = Arc::new(ServiceContext::new(Arc::new(backend)));
    Ok(Services::new(ctx))
}
