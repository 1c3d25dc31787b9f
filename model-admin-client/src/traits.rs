use async_trait::async_trait;

use crate::error::Result;
use crate::types::{FieldDescriptor, ModelName, Page, Payload, Record, RecordId};

/// 模型管理后端 Trait
///
/// One method per endpoint of the admin contract. Implementations must not
/// reorder models or fields, and must not clamp pagination input.
#[async_trait]
pub trait AdminBackend: Send + Sync {
    /// 后端标识符（用于日志）
    fn id(&self) -> &'static str;

    /// 获取可浏览的模型名称列表
    async fn list_models(&self) -> Result<Vec<ModelName>>;

    /// 获取模型的字段描述（有序）
    async fn get_fields(&self, model: &ModelName) -> Result<Vec<FieldDescriptor>>;

    /// 获取记录列表 (分页)
    ///
    /// `page` is 1-indexed. The returned [`Page`] echoes `page` and `limit`.
    async fn list_records(&self, model: &ModelName, page: u32, limit: u32) -> Result<Page>;

    /// 获取单条记录
    async fn get_record(&self, model: &ModelName, id: &RecordId) -> Result<Record>;

    /// 创建记录
    async fn create_record(&self, model: &ModelName, payload: &Payload) -> Result<Record>;

    /// 更新记录
    async fn update_record(
        &self,
        model: &ModelName,
        id: &RecordId,
        payload: &Payload,
    ) -> Result<Record>;

    /// 删除记录
    async fn delete_record(&self, model: &ModelName, id: &RecordId) -> Result<()>;
}
