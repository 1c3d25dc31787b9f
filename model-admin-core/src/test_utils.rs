//! 测试辅助模块
//!
//! 提供内存中的 mock 后端和便捷的测试工厂方法。

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use model_admin_client::{
    AdminBackend, ClientError, FieldDescriptor, FieldType, ModelName, Page, Payload, Record,
    RecordId, Result,
};
use serde_json::Value;
use tokio::sync::RwLock;

use crate::services::ServiceContext;

const FIXED_TIMESTAMP: &str = "2024-01-01T00:00:00.000Z";

/// One call received by [`MockBackend`].
#[derive(Debug, Clone, PartialEq)]
pub enum BackendCall {
    ListModels,
    GetFields(ModelName),
    ListRecords { model: ModelName, page: u32, limit: u32 },
    GetRecord { model: ModelName, id: RecordId },
    Create { model: ModelName, payload: Payload },
    Update { model: ModelName, id: RecordId, payload: Payload },
    Delete { model: ModelName, id: RecordId },
}

#[derive(Default)]
struct MockState {
    models: Vec<(ModelName, Vec<FieldDescriptor>)>,
    records: HashMap<ModelName, Vec<Record>>,
    next_id: i64,
}

// ===== MockBackend =====

#[derive(Clone, Default)]
pub struct MockBackend {
    state: Arc<RwLock<MockState>>,
    calls: Arc<RwLock<Vec<BackendCall>>>,
    /// 如果 Some，下一次调用返回此错误
    fail_next: Arc<RwLock<Option<ClientError>>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn context(&self) -> Arc<ServiceContext> {
        Arc::new(ServiceContext::new(Arc::new(self.clone())))
    }

    pub async fn add_model(&self, name: &str, fields: Vec<FieldDescriptor>) {
        let mut state = self.state.write().await;
        let name = ModelName::new(name);
        state.records.entry(name.clone()).or_default();
        state.models.push((name, fields));
    }

    /// Seeds a record directly, bypassing call recording.
    pub async fn insert(&self, model: &str, fields: Value) -> RecordId {
        let mut state = self.state.write().await;
        let record = state.materialize(payload(fields));
        let id = record.id().unwrap_or_else(|| RecordId::new("?"));
        state
            .records
            .entry(ModelName::new(model))
            .or_default()
            .push(record);
        id
    }

    pub async fn fail_next_network(&self) {
        *self.fail_next.write().await = Some(ClientError::Network {
            detail: "connection refused".to_string(),
        });
    }

    pub async fn calls(&self) -> Vec<BackendCall> {
        self.calls.read().await.clone()
    }

    async fn record_call(&self, call: BackendCall) -> Result<()> {
        self.calls.write().await.push(call);
        match self.fail_next.write().await.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl MockState {
    fn materialize(&mut self, fields: Payload) -> Record {
        self.next_id += 1;
        let mut map = Payload::new();
        map.insert("id".to_string(), Value::from(self.next_id));
        map.extend(fields);
        map.insert("created_at".to_string(), Value::from(FIXED_TIMESTAMP));
        map.insert("updated_at".to_string(), Value::from(FIXED_TIMESTAMP));
        Record::new(map)
    }

    fn records_of(&mut self, model: &ModelName) -> Result<&mut Vec<Record>> {
        self.records.get_mut(model).ok_or_else(|| ClientError::NotFound {
            resource: model.to_string(),
        })
    }
}

#[async_trait]
impl AdminBackend for MockBackend {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn list_models(&self) -> Result<Vec<ModelName>> {
        self.record_call(BackendCall::ListModels).await?;
        let state = self.state.read().await;
        Ok(state.models.iter().map(|(name, _)| name.clone()).collect())
    }

    async fn get_fields(&self, model: &ModelName) -> Result<Vec<FieldDescriptor>> {
        self.record_call(BackendCall::GetFields(model.clone())).await?;
        let state = self.state.read().await;
        state
            .models
            .iter()
            .find(|(name, _)| name == model)
            .map(|(_, fields)| fields.clone())
            .ok_or_else(|| ClientError::NotFound {
                resource: model.to_string(),
            })
    }

    async fn list_records(&self, model: &ModelName, page: u32, limit: u32) -> Result<Page> {
        self.record_call(BackendCall::ListRecords {
            model: model.clone(),
            page,
            limit,
        })
        .await?;
        let mut state = self.state.write().await;
        let all = state.records_of(model)?;
        let skip = (page.saturating_sub(1) as usize).saturating_mul(limit as usize);
        Ok(Page {
            records: all.iter().skip(skip).take(limit as usize).cloned().collect(),
            total: all.len() as u64,
            page,
            limit,
        })
    }

    async fn get_record(&self, model: &ModelName, id: &RecordId) -> Result<Record> {
        self.record_call(BackendCall::GetRecord {
            model: model.clone(),
            id: id.clone(),
        })
        .await?;
        let mut state = self.state.write().await;
        state
            .records_of(model)?
            .iter()
            .find(|r| r.id().as_ref() == Some(id))
            .cloned()
            .ok_or_else(|| ClientError::NotFound {
                resource: format!("{model}/{id}"),
            })
    }

    async fn create_record(&self, model: &ModelName, payload: &Payload) -> Result<Record> {
        self.record_call(BackendCall::Create {
            model: model.clone(),
            payload: payload.clone(),
        })
        .await?;
        let mut state = self.state.write().await;
        state.records_of(model)?;
        let record = state.materialize(payload.clone());
        state.records_of(model)?.push(record.clone());
        Ok(record)
    }

    async fn update_record(
        &self,
        model: &ModelName,
        id: &RecordId,
        payload: &Payload,
    ) -> Result<Record> {
        self.record_call(BackendCall::Update {
            model: model.clone(),
            id: id.clone(),
            payload: payload.clone(),
        })
        .await?;
        let mut state = self.state.write().await;
        let record = state
            .records_of(model)?
            .iter_mut()
            .find(|r| r.id().as_ref() == Some(id))
            .ok_or_else(|| ClientError::NotFound {
                resource: format!("{model}/{id}"),
            })?;
        let mut fields = record.clone().into_fields();
        fields.extend(payload.clone());
        *record = Record::new(fields);
        Ok(record.clone())
    }

    async fn delete_record(&self, model: &ModelName, id: &RecordId) -> Result<()> {
        self.record_call(BackendCall::Delete {
            model: model.clone(),
            id: id.clone(),
        })
        .await?;
        let mut state = self.state.write().await;
        let records = state.records_of(model)?;
        let before = records.len();
        records.retain(|r| r.id().as_ref() != Some(id));
        if records.len() == before {
            return Err(ClientError::NotFound {
                resource: format!("{model}/{id}"),
            });
        }
        Ok(())
    }
}

// ===== 工厂方法 =====

/// Field layout of the `Course` test model.
pub fn course_fields() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::new("id", FieldType::Int, false),
        FieldDescriptor::new("title", FieldType::String, false),
        FieldDescriptor::new("description", FieldType::String, true),
        FieldDescriptor::new("published", FieldType::Boolean, true),
        FieldDescriptor::new("price", FieldType::Float, true),
        FieldDescriptor::new("created_at", FieldType::Datetime, false),
        FieldDescriptor::new("updated_at", FieldType::Datetime, false),
    ]
}

/// Converts a `json!` object literal into a [`Payload`].
pub fn payload(value: Value) -> Payload {
    match value {
        Value::Object(map) => map,
        _ => Payload::new(),
    }
}
