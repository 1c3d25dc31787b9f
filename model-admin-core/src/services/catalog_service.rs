//! 模型目录服务

use std::sync::Arc;

use model_admin_client::ModelName;

use crate::error::CoreResult;
use crate::services::ServiceContext;

/// Resolves the list of browsable models.
pub struct CatalogService {
    ctx: Arc<ServiceContext>,
}

impl CatalogService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 获取模型列表（保持后端顺序）
    pub async fn list_models(&self) -> CoreResult<Vec<ModelName>> {
        match self.ctx.backend.list_models().await {
            Ok(models) => {
                log::debug!("Loaded {} models", models.len());
                Ok(models)
            }
            Err(e) => Err(self.ctx.handle_client_error("list models", e)),
        }
    }
}
