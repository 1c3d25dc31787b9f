//! View states.
//!
//! ```text
//!  NoModelSelected ──select──▶ ModelSelected(Loading) ──fields+page──▶ Ready(Workspace)
//!         ▲                          ▲                                   │
//!         └──────── (empty catalog)  └────────────── select ─────────────┘
//! ```
//!
//! A [`Workspace`] holds exactly one [`Dialog`], so two dialogs can never be
//! open at the same time.

use model_admin_client::{FieldDescriptor, ModelName, Page, Record, RecordId};

use crate::form::RecordForm;
use crate::pagination::{total_pages, PageRequest};

/// 视图状态
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ViewState {
    /// Nothing chosen yet (or the catalog is empty).
    #[default]
    NoModelSelected,
    /// A model is chosen; its fields and first page are in flight.
    ModelSelected(Loading),
    /// Fields and a page are present.
    Ready(Workspace),
}

impl ViewState {
    pub fn model(&self) -> Option<&ModelName> {
        match self {
            Self::NoModelSelected => None,
            Self::ModelSelected(loading) => Some(&loading.model),
            Self::Ready(ws) => Some(&ws.model),
        }
    }

    pub fn workspace(&self) -> Option<&Workspace> {
        match self {
            Self::Ready(ws) => Some(ws),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        match self {
            Self::NoModelSelected => false,
            Self::ModelSelected(_) => true,
            Self::Ready(ws) => ws.busy,
        }
    }
}

/// Partial results gathered while a model loads.
#[derive(Debug, Clone, PartialEq)]
pub struct Loading {
    pub model: ModelName,
    pub request: PageRequest,
    pub fields: Option<Vec<FieldDescriptor>>,
    pub page: Option<Page>,
}

impl Loading {
    pub(crate) fn new(model: ModelName, request: PageRequest) -> Self {
        Self {
            model,
            request,
            fields: None,
            page: None,
        }
    }
}

/// A loaded model: fields, the visible page and at most one dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct Workspace {
    pub model: ModelName,
    pub fields: Vec<FieldDescriptor>,
    pub page: Page,
    /// Page the latest listing was requested for.
    pub request: PageRequest,
    /// A listing for this workspace is in flight.
    pub busy: bool,
    pub dialog: Dialog,
}

impl Workspace {
    pub fn total_pages(&self) -> u64 {
        total_pages(self.page.total, self.page.limit)
    }

    /// Looks a record up on the visible page.
    pub fn record(&self, id: &RecordId) -> Option<&Record> {
        self.page
            .records
            .iter()
            .find(|r| r.id().as_ref() == Some(id))
    }

    /// The first `limit` fields, used as table columns.
    pub fn columns(&self, limit: usize) -> &[FieldDescriptor] {
        &self.fields[..self.fields.len().min(limit)]
    }
}

/// Create/edit form plus submission state.
#[derive(Debug, Clone, PartialEq)]
pub struct FormDialog {
    pub form: RecordForm,
    /// Sequence number of the in-flight mutation, if any.
    pub pending: Option<u64>,
    /// Last validation or backend error; input is kept.
    pub error: Option<String>,
}

impl FormDialog {
    pub(crate) fn new(form: RecordForm) -> Self {
        Self {
            form,
            pending: None,
            error: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// 对话框
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Dialog {
    #[default]
    None,
    Create(FormDialog),
    Edit {
        record: Record,
        form: FormDialog,
    },
    /// Read-only view; `record` is `None` until the fresh fetch lands.
    View {
        id: RecordId,
        record: Option<Record>,
    },
    /// Explicit delete confirmation. Nothing is deleted before
    /// [`confirm_delete`](super::ViewController::confirm_delete).
    ConfirmDelete {
        id: RecordId,
        pending: Option<u64>,
        error: Option<String>,
    },
}

impl Dialog {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::None)
    }

    pub fn is_pending(&self) -> bool {
        match self {
            Self::Create(form) | Self::Edit { form, .. } => form.is_pending(),
            Self::ConfirmDelete { pending, .. } => pending.is_some(),
            Self::None | Self::View { .. } => false,
        }
    }

    /// Sequence number of the mutation this dialog is waiting on.
    pub(crate) fn pending_seq(&self) -> Option<u64> {
        match self {
            Self::Create(form) | Self::Edit { form, .. } => form.pending,
            Self::ConfirmDelete { pending, .. } => *pending,
            Self::None | Self::View { .. } => None,
        }
    }

    pub fn form(&self) -> Option<&FormDialog> {
        match self {
            Self::Create(form) | Self::Edit { form, .. } => Some(form),
            _ => None,
        }
    }
}
