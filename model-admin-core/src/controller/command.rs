//! Commands emitted by the controller and the outcomes fed back to it.

use std::fmt;

use model_admin_client::{FieldDescriptor, ModelName, Page, Payload, Record, RecordId};

use crate::error::CoreResult;
use crate::pagination::PageRequest;
use crate::services::Services;

/// Identifies which request an outcome answers.
///
/// `seq` comes from the controller's monotonically increasing generation
/// counter; `model` is the model the request was issued for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ticket {
    pub seq: u64,
    pub model: ModelName,
}

/// 变更类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Create,
    Update,
    Delete,
}

impl fmt::Display for MutationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Create => "created",
            Self::Update => "updated",
            Self::Delete => "deleted",
        })
    }
}

/// Backend work requested by the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    ListModels {
        seq: u64,
    },
    FetchFields(Ticket),
    FetchPage {
        ticket: Ticket,
        request: PageRequest,
    },
    FetchRecord {
        ticket: Ticket,
        id: RecordId,
    },
    CreateRecord {
        ticket: Ticket,
        payload: Payload,
    },
    UpdateRecord {
        ticket: Ticket,
        id: RecordId,
        payload: Payload,
    },
    DeleteRecord {
        ticket: Ticket,
        id: RecordId,
    },
}

/// Result of a [`Command`], tagged with the request it answers.
#[derive(Debug, Clone)]
pub enum Outcome {
    Models {
        seq: u64,
        result: CoreResult<Vec<ModelName>>,
    },
    Fields {
        ticket: Ticket,
        result: CoreResult<Vec<FieldDescriptor>>,
    },
    Page {
        ticket: Ticket,
        request: PageRequest,
        result: CoreResult<Page>,
    },
    Record {
        ticket: Ticket,
        id: RecordId,
        result: CoreResult<Record>,
    },
    Mutation {
        ticket: Ticket,
        kind: MutationKind,
        result: CoreResult<()>,
    },
}

impl Command {
    /// Runs the command against the services.
    pub async fn execute(self, services: &Services) -> Outcome {
        match self {
            Self::ListModels { seq } => Outcome::Models {
                seq,
                result: services.catalog.list_models().await,
            },
            Self::FetchFields(ticket) => {
                let result = services.schema.get_fields(&ticket.model).await;
                Outcome::Fields { ticket, result }
            }
            Self::FetchPage { ticket, request } => {
                let result = services
                    .records
                    .list_records(&ticket.model, request.page, request.limit)
                    .await;
                Outcome::Page {
                    ticket,
                    request,
                    result,
                }
            }
            Self::FetchRecord { ticket, id } => {
                let result = services.records.get_record(&ticket.model, &id).await;
                Outcome::Record { ticket, id, result }
            }
            Self::CreateRecord { ticket, payload } => {
                let result = services
                    .records
                    .create_record(&ticket.model, payload)
                    .await
                    .map(|_| ());
                Outcome::Mutation {
                    ticket,
                    kind: MutationKind::Create,
                    result,
                }
            }
            Self::UpdateRecord {
                ticket,
                id,
                payload,
            } => {
                let result = services
                    .records
                    .update_record(&ticket.model, &id, payload)
                    .await
                    .map(|_| ());
                Outcome::Mutation {
                    ticket,
                    kind: MutationKind::Update,
                    result,
                }
            }
            Self::DeleteRecord { ticket, id } => {
                let result = services.records.delete_record(&ticket.model, &id).await;
                Outcome::Mutation {
                    ticket,
                    kind: MutationKind::Delete,
                    result,
                }
            }
        }
    }

    /// Short description for logs.
    pub fn describe(&self) -> String {
        match self {
            Self::ListModels { .. } => "list models".to_string(),
            Self::FetchFields(t) => format!("fields of {}", t.model),
            Self::FetchPage { ticket, request } => {
                format!("{} page {} (limit {})", ticket.model, request.page, request.limit)
            }
            Self::FetchRecord { ticket, id } => format!("get {}/{id}", ticket.model),
            Self::CreateRecord { ticket, .. } => format!("create {}", ticket.model),
            Self::UpdateRecord { ticket, id, .. } => format!("update {}/{id}", ticket.model),
            Self::DeleteRecord { ticket, id } => format!("delete {}/{id}", ticket.model),
        }
    }
}
