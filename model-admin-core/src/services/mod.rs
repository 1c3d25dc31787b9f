//! 业务逻辑服务层

mod catalog_service;
mod record_service;
mod schema_service;

pub use catalog_service::CatalogService;
pub use record_service::RecordService;
pub use schema_service::SchemaService;

use std::sync::Arc;

use model_admin_client::{AdminBackend, ClientError};

use crate::error::CoreError;

/// 服务上下文 - 持有所有依赖
///
/// 平台层创建此上下文并注入后端实现。
pub struct ServiceContext {
    /// 模型管理后端
    pub backend: Arc<dyn AdminBackend>,
}

impl ServiceContext {
    /// 创建服务上下文
    #[must_use]
    pub fn new(backend: Arc<dyn AdminBackend>) -> Self {
        Self { backend }
    }

    /// 记录后端错误并转换为 [`CoreError`]
    ///
    /// Expected failures (not found, rejected input) log at `warn`,
    /// everything else at `error`.
    pub fn handle_client_error(&self, operation: &str, err: ClientError) -> CoreError {
        let err = CoreError::Client(err);
        if err.is_expected() {
            log::warn!("[{}] {operation} failed: {err}", self.backend.id());
        } else {
            log::error!("[{}] {operation} failed: {err}", self.backend.id());
        }
        err
    }
}

/// The services a controller command may need, built over one context.
pub struct Services {
    pub catalog: CatalogService,
    pub schema: SchemaService,
    pub records: RecordService,
}

impl Services {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self {
            catalog: CatalogService::new(Arc::clone(&ctx)),
            schema: SchemaService::new(Arc::clone(&ctx)),
            records: RecordService::new(ctx),
        }
    }
}
