//! 记录管理服务
//!
//! Generic listing and mutation of records for any model. Keys maintained by
//! the backend are removed from outgoing payloads here, so callers may pass
//! a full record map.

use std::sync::Arc;

use model_admin_client::{
    ModelName, Page, Payload, Record, RecordId, CREATED_AT_FIELD, ID_FIELD, UPDATED_AT_FIELD,
};

use crate::error::{CoreError, CoreResult};
use crate::form::strip_keys;
use crate::services::ServiceContext;

/// Keys never sent on create.
pub const CREATE_EXCLUDED_KEYS: [&str; 3] = [ID_FIELD, CREATED_AT_FIELD, UPDATED_AT_FIELD];

/// Keys never sent on update. `updated_at` may legitimately change.
pub const UPDATE_EXCLUDED_KEYS: [&str; 2] = [ID_FIELD, CREATED_AT_FIELD];

/// 记录管理服务
pub struct RecordService {
    ctx: Arc<ServiceContext>,
}

impl RecordService {
    /// 创建记录服务实例
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 列出记录（分页）
    ///
    /// `page` and `limit` are passed through unclamped.
    pub async fn list_records(&self, model: &ModelName, page: u32, limit: u32) -> CoreResult<Page> {
        match self.ctx.backend.list_records(model, page, limit).await {
            Ok(result) => Ok(result),
            Err(e) => Err(self
                .ctx
                .handle_client_error(&format!("list {model} page {page}"), e)),
        }
    }

    /// 获取单条记录
    pub async fn get_record(&self, model: &ModelName, id: &RecordId) -> CoreResult<Record> {
        match self.ctx.backend.get_record(model, id).await {
            Ok(record) => Ok(record),
            Err(e) if e.is_not_found() => {
                log::warn!("Record {model}/{id} no longer exists");
                Err(CoreError::RecordNotFound(format!("{model}/{id}")))
            }
            Err(e) => Err(self.ctx.handle_client_error(&format!("get {model}/{id}"), e)),
        }
    }

    /// 创建记录
    pub async fn create_record(&self, model: &ModelName, payload: Payload) -> CoreResult<Record> {
        let payload = strip_keys(payload, &CREATE_EXCLUDED_KEYS);
        match self.ctx.backend.create_record(model, &payload).await {
            Ok(record) => {
                log::info!("Created {model} record {}", display_id(&record));
                Ok(record)
            }
            Err(e) => Err(self.ctx.handle_client_error(&format!("create {model}"), e)),
        }
    }

    /// 更新记录
    pub async fn update_record(
        &self,
        model: &ModelName,
        id: &RecordId,
        payload: Payload,
    ) -> CoreResult<Record> {
        let payload = strip_keys(payload, &UPDATE_EXCLUDED_KEYS);
        match self.ctx.backend.update_record(model, id, &payload).await {
            Ok(record) => {
                log::info!("Updated {model} record {id}");
                Ok(record)
            }
            Err(e) if e.is_not_found() => {
                log::warn!("Record {model}/{id} no longer exists");
                Err(CoreError::RecordNotFound(format!("{model}/{id}")))
            }
            Err(e) => Err(self
                .ctx
                .handle_client_error(&format!("update {model}/{id}"), e)),
        }
    }

    /// 删除记录
    ///
    /// Irreversible. Front ends reach this only through the controller's
    /// confirmation dialog.
    pub async fn delete_record(&self, model: &ModelName, id: &RecordId) -> CoreResult<()> {
        match self.ctx.backend.delete_record(model, id).await {
            Ok(()) => {
                log::info!("Deleted {model} record {id}");
                Ok(())
            }
            Err(e) => Err(self
                .ctx
                .handle_client_error(&format!("delete {model}/{id}"), e)),
        }
    }
}

fn display_id(record: &Record) -> String {
    record
        .id()
        .map_or_else(|| "(no id)".to_string(), |id| id.to_string())
}
