//! 字段结构服务

use std::sync::Arc;

use model_admin_client::{FieldDescriptor, ModelName};

use crate::error::CoreResult;
use crate::services::ServiceContext;

/// Fetches a model's field descriptors.
pub struct SchemaService {
    ctx: Arc<ServiceContext>,
}

impl SchemaService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 获取字段描述列表
    ///
    /// Order is exactly what the backend returned; it defines table columns
    /// and form rows.
    pub async fn get_fields(&self, model: &ModelName) -> CoreResult<Vec<FieldDescriptor>> {
        match self.ctx.backend.get_fields(model).await {
            Ok(fields) => Ok(fields),
            Err(e) => Err(self
                .ctx
                .handle_client_error(&format!("get fields of {model}"), e)),
        }
    }
}
