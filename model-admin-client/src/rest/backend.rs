//! `AdminBackend` Trait 实现

use async_trait::async_trait;
use reqwest::Method;

use crate::error::Result;
use crate::traits::AdminBackend;
use crate::types::{
    FieldDescriptor, FieldsResponse, ModelName, Page, Payload, Record, RecordId, RecordsResponse,
};

use super::{BACKEND_NAME, RestBackend};

#[async_trait]
impl AdminBackend for RestBackend {
    fn id(&self) -> &'static str {
        BACKEND_NAME
    }

    async fn list_models(&self) -> Result<Vec<ModelName>> {
        self.get_json(&self.models_url(), "models").await
    }

    async fn get_fields(&self, model: &ModelName) -> Result<Vec<FieldDescriptor>> {
        let response: FieldsResponse = self
            .get_json(&self.fields_url(model), model.as_str())
            .await?;
        Ok(response.fields)
    }

    async fn list_records(&self, model: &ModelName, page: u32, limit: u32) -> Result<Page> {
        let url = format!("{}?page={page}&limit={limit}", self.records_url(model));
        let response: RecordsResponse = self.get_json(&url, model.as_str()).await?;
        Ok(Page {
            records: response.data,
            total: response.total,
            page,
            limit,
        })
    }

    async fn get_record(&self, model: &ModelName, id: &RecordId) -> Result<Record> {
        self.get_json(&self.record_url(model, id), &format!("{model}/{id}"))
            .await
    }

    async fn create_record(&self, model: &ModelName, payload: &Payload) -> Result<Record> {
        self.send_json(Method::POST, &self.records_url(model), payload, model.as_str())
            .await
    }

    async fn update_record(
        &self,
        model: &ModelName,
        id: &RecordId,
        payload: &Payload,
    ) -> Result<Record> {
        self.send_json(
            Method::PATCH,
            &self.record_url(model, id),
            payload,
            &format!("{model}/{id}"),
        )
        .await
    }

    async fn delete_record(&self, model: &ModelName, id: &RecordId) -> Result<()> {
        self.delete(&self.record_url(model, id), &format!("{model}/{id}"))
            .await
    }
}
