//! View controller
//!
//! A synchronous state machine that owns everything a front end shows:
//! the model catalog, the selected model's fields and page, and the open
//! dialog. It performs no IO. Every intent returns the [`Command`]s to run;
//! their [`Outcome`]s are handed back through [`ViewController::apply`].
//!
//! ## Stale responses
//!
//! Each fetch carries a [`Ticket`] whose `seq` is drawn from one increasing
//! counter. The controller remembers the newest `seq` issued per fetch kind
//! and drops any outcome that does not carry it, or whose model (or page
//! request) no longer matches the current state. A slow answer for a model
//! the user already left can therefore never overwrite the new model's
//! fields or records.

mod command;
mod state;

pub use command::{Command, MutationKind, Outcome, Ticket};
pub use state::{Dialog, FormDialog, Loading, ViewState, Workspace};

use model_admin_client::{FieldDescriptor, ModelName, Page, Record, RecordId};

use crate::config::ViewSettings;
use crate::editor::EditorSettings;
use crate::error::{CoreError, CoreResult};
use crate::form::RecordForm;
use crate::pagination::{clamp_page, total_pages, PageRequest};

/// 通知级别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// Transient, non-fatal message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Newest sequence number issued per fetch kind.
#[derive(Debug, Default)]
struct Latest {
    models: u64,
    fields: u64,
    page: u64,
    record: u64,
}

/// 视图控制器
#[derive(Debug)]
pub struct ViewController {
    settings: ViewSettings,
    editor_settings: EditorSettings,
    models: Vec<ModelName>,
    models_loading: bool,
    state: ViewState,
    limit: u32,
    seq: u64,
    latest: Latest,
    notices: Vec<Notice>,
}

impl ViewController {
    pub fn new(settings: ViewSettings) -> Self {
        let limit = settings.initial_limit();
        Self {
            editor_settings: EditorSettings::from(&settings),
            settings,
            models: Vec::new(),
            models_loading: false,
            state: ViewState::NoModelSelected,
            limit,
            seq: 0,
            latest: Latest::default(),
            notices: Vec::new(),
        }
    }

    // ===== 查询 =====

    pub fn settings(&self) -> &ViewSettings {
        &self.settings
    }

    pub fn models(&self) -> &[ModelName] {
        &self.models
    }

    pub fn models_loading(&self) -> bool {
        self.models_loading
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn selected_model(&self) -> Option<&ModelName> {
        self.state.model()
    }

    pub fn workspace(&self) -> Option<&Workspace> {
        self.state.workspace()
    }

    pub fn dialog(&self) -> Option<&Dialog> {
        self.workspace().map(|ws| &ws.dialog)
    }

    /// Page size used for the next listing.
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Drains queued notices.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Mutable access to the open create/edit form, unless a submission is
    /// in flight.
    pub fn form_mut(&mut self) -> Option<&mut RecordForm> {
        let ws = self.workspace_mut()?;
        match &mut ws.dialog {
            Dialog::Create(dialog) | Dialog::Edit { form: dialog, .. } if !dialog.is_pending() => {
                Some(&mut dialog.form)
            }
            _ => None,
        }
    }

    // ===== 意图 =====

    /// Loads the model catalog. Called once per view activation.
    pub fn activate(&mut self) -> Vec<Command> {
        let seq = self.next_seq();
        self.latest.models = seq;
        self.models_loading = true;
        vec![Command::ListModels { seq }]
    }

    /// Switches to `model`, discarding all state of the previous one, and
    /// fetches its fields and first page.
    pub fn select_model(&mut self, model: ModelName) -> Vec<Command> {
        log::debug!("Selecting model {model}");
        let request = PageRequest::first(self.limit);
        self.state = ViewState::ModelSelected(Loading::new(model.clone(), request));

        let fields = self.ticket(&model);
        self.latest.fields = fields.seq;
        let page = self.ticket(&model);
        self.latest.page = page.seq;
        // A view dialog of the previous model must not pick up its record.
        self.latest.record = page.seq;

        vec![
            Command::FetchFields(fields),
            Command::FetchPage {
                ticket: page,
                request,
            },
        ]
    }

    /// Requests page `page` (values below 1 become 1). Pages past the end
    /// are clamped once the response reports the total.
    pub fn change_page(&mut self, page: u32) -> Vec<Command> {
        let Some(ws) = self.workspace() else {
            return Vec::new();
        };
        if ws.busy || ws.dialog.is_open() {
            return Vec::new();
        }
        let request = ws.request.with_page(page.max(1));
        self.fetch_page(request)
    }

    /// Changes the page size and returns to page 1.
    pub fn change_limit(&mut self, limit: u32) -> Vec<Command> {
        if limit == 0 {
            return Vec::new();
        }
        match &self.state {
            ViewState::Ready(ws) if !ws.busy && !ws.dialog.is_open() => {
                self.limit = limit;
                self.fetch_page(PageRequest::first(limit))
            }
            ViewState::NoModelSelected => {
                self.limit = limit;
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    pub fn next_page(&mut self) -> Vec<Command> {
        let Some(ws) = self.workspace() else {
            return Vec::new();
        };
        if u64::from(ws.request.page) >= ws.total_pages() {
            return Vec::new();
        }
        let next = ws.request.page.saturating_add(1);
        self.change_page(next)
    }

    pub fn prev_page(&mut self) -> Vec<Command> {
        let Some(ws) = self.workspace() else {
            return Vec::new();
        };
        if ws.request.page <= 1 {
            return Vec::new();
        }
        let prev = ws.request.page - 1;
        self.change_page(prev)
    }

    /// Re-fetches whatever is current: the page, the whole model while it
    /// is still loading, or the catalog when nothing is selected.
    pub fn refresh(&mut self) -> Vec<Command> {
        match &self.state {
            ViewState::NoModelSelected => self.activate(),
            ViewState::ModelSelected(loading) => {
                let model = loading.model.clone();
                self.select_model(model)
            }
            ViewState::Ready(ws) if ws.dialog.is_open() => Vec::new(),
            ViewState::Ready(ws) => {
                let request = ws.request;
                self.fetch_page(request)
            }
        }
    }

    pub fn open_create(&mut self) -> Vec<Command> {
        let settings = self.editor_settings.clone();
        if let Some(ws) = self.idle_workspace_mut() {
            let form = RecordForm::blank(&ws.fields, &settings);
            ws.dialog = Dialog::Create(FormDialog::new(form));
        }
        Vec::new()
    }

    /// Opens the edit dialog pre-filled from the visible row.
    pub fn open_edit(&mut self, id: &RecordId) -> Vec<Command> {
        let settings = self.editor_settings.clone();
        let Some(ws) = self.idle_workspace_mut() else {
            return Vec::new();
        };
        match ws.record(id).cloned() {
            Some(record) => {
                let form = RecordForm::from_record(&ws.fields, &record, &settings);
                ws.dialog = Dialog::Edit {
                    record,
                    form: FormDialog::new(form),
                };
            }
            None => self.record_missing(id),
        }
        Vec::new()
    }

    /// Opens the read-only dialog and fetches the record afresh.
    pub fn open_view(&mut self, id: &RecordId) -> Vec<Command> {
        let Some(model) = self.idle_workspace_mut().map(|ws| ws.model.clone()) else {
            return Vec::new();
        };
        let ticket = self.ticket(&model);
        self.latest.record = ticket.seq;
        if let Some(ws) = self.workspace_mut() {
            ws.dialog = Dialog::View {
                id: id.clone(),
                record: None,
            };
        }
        vec![Command::FetchRecord {
            ticket,
            id: id.clone(),
        }]
    }

    /// First half of the delete gesture: only opens the confirmation.
    pub fn request_delete(&mut self, id: &RecordId) -> Vec<Command> {
        let Some(ws) = self.idle_workspace_mut() else {
            return Vec::new();
        };
        if ws.record(id).is_some() {
            ws.dialog = Dialog::ConfirmDelete {
                id: id.clone(),
                pending: None,
                error: None,
            };
        } else {
            self.record_missing(id);
        }
        Vec::new()
    }

    /// Second half of the delete gesture. Issues the delete at most once.
    pub fn confirm_delete(&mut self) -> Vec<Command> {
        let Some((model, id)) = self.workspace().and_then(|ws| match &ws.dialog {
            Dialog::ConfirmDelete {
                id, pending: None, ..
            } => Some((ws.model.clone(), id.clone())),
            _ => None,
        }) else {
            return Vec::new();
        };

        let ticket = self.ticket(&model);
        if let Some(Dialog::ConfirmDelete { pending, error, .. }) =
            self.workspace_mut().map(|ws| &mut ws.dialog)
        {
            *pending = Some(ticket.seq);
            *error = None;
        }
        vec![Command::DeleteRecord { ticket, id }]
    }

    /// Submits the open create/edit form.
    ///
    /// Conversion and nullability errors stay in the dialog and nothing is
    /// sent. A second submit while one is in flight does nothing.
    pub fn submit(&mut self) -> Vec<Command> {
        let Some(ws) = self.workspace() else {
            return Vec::new();
        };
        let model = ws.model.clone();
        let target = match &ws.dialog {
            Dialog::Create(form) if !form.is_pending() => {
                form.form.to_payload().map(|payload| (None, payload))
            }
            Dialog::Edit { record, form } if !form.is_pending() => match record.id() {
                Some(id) => form.form.to_payload().map(|payload| (Some(id), payload)),
                None => Err(CoreError::RecordNotFound(format!("{model}/(no id)"))),
            },
            _ => return Vec::new(),
        };

        let ticket = self.ticket(&model);
        let seq = ticket.seq;
        let (result, command) = match target {
            Ok((None, payload)) => (Ok(()), Some(Command::CreateRecord { ticket, payload })),
            Ok((Some(id), payload)) => (
                Ok(()),
                Some(Command::UpdateRecord {
                    ticket,
                    id,
                    payload,
                }),
            ),
            Err(e) => (Err(e.to_string()), None),
        };

        if let Some(Dialog::Create(form) | Dialog::Edit { form, .. }) =
            self.workspace_mut().map(|ws| &mut ws.dialog)
        {
            match result {
                Ok(()) => {
                    form.pending = Some(seq);
                    form.error = None;
                }
                Err(message) => form.error = Some(message),
            }
        }
        command.into_iter().collect()
    }

    /// Closes any dialog, discarding unsaved input.
    pub fn cancel(&mut self) -> Vec<Command> {
        if let Some(ws) = self.workspace_mut() {
            ws.dialog = Dialog::None;
        }
        Vec::new()
    }

    // ===== 结果 =====

    /// Applies a backend outcome. Stale outcomes are dropped.
    pub fn apply(&mut self, outcome: Outcome) -> Vec<Command> {
        match outcome {
            Outcome::Models { seq, result } => {
                self.apply_models(seq, result);
                Vec::new()
            }
            Outcome::Fields { ticket, result } => {
                self.apply_fields(&ticket, result);
                Vec::new()
            }
            Outcome::Page {
                ticket,
                request,
                result,
            } => self.apply_page(&ticket, request, result),
            Outcome::Record { ticket, id, result } => {
                self.apply_record(&ticket, &id, result);
                Vec::new()
            }
            Outcome::Mutation {
                ticket,
                kind,
                result,
            } => self.apply_mutation(&ticket, kind, result),
        }
    }

    fn apply_models(&mut self, seq: u64, result: CoreResult<Vec<ModelName>>) {
        if seq != self.latest.models {
            log::debug!("Dropping stale model list (seq {seq})");
            return;
        }
        self.models_loading = false;
        match result {
            Ok(models) => {
                if models.is_empty() {
                    self.notices.push(Notice::info("No models available"));
                }
                self.models = models;
            }
            Err(e) => {
                self.models.clear();
                self.notices
                    .push(Notice::error(format!("Failed to load models: {e}")));
            }
        }
    }

    fn apply_fields(
        &mut self,
        ticket: &Ticket,
        result: CoreResult<Vec<FieldDescriptor>>,
    ) {
        if ticket.seq != self.latest.fields || self.selected_model() != Some(&ticket.model) {
            log::debug!("Dropping stale fields of {} (seq {})", ticket.model, ticket.seq);
            return;
        }
        let fields = result.unwrap_or_else(|e| {
            self.notices.push(Notice::error(format!(
                "Failed to load fields of {}: {e}",
                ticket.model
            )));
            Vec::new()
        });

        match &mut self.state {
            ViewState::ModelSelected(loading) => loading.fields = Some(fields),
            ViewState::Ready(ws) => ws.fields = fields,
            ViewState::NoModelSelected => {}
        }
        self.promote();
    }

    fn apply_page(
        &mut self,
        ticket: &Ticket,
        request: PageRequest,
        result: CoreResult<Page>,
    ) -> Vec<Command> {
        let current = match &self.state {
            ViewState::ModelSelected(loading) => Some((&loading.model, loading.request)),
            ViewState::Ready(ws) => Some((&ws.model, ws.request)),
            ViewState::NoModelSelected => None,
        };
        let matches = current
            .is_some_and(|(model, current)| *model == ticket.model && current == request);
        if ticket.seq != self.latest.page || !matches {
            log::debug!(
                "Dropping stale page {} of {} (seq {})",
                request.page,
                ticket.model,
                ticket.seq
            );
            return Vec::new();
        }

        let (request, page) = match result {
            Ok(mut page) => {
                let clamped = clamp_page(request.page, page.total, request.limit);
                if clamped != request.page && page.total > 0 {
                    log::debug!(
                        "Page {} of {} is out of range, clamping to {clamped}",
                        request.page,
                        ticket.model
                    );
                    return self.fetch_page(request.with_page(clamped));
                }
                // With no records there is nothing to re-fetch; show page 1.
                let request = request.with_page(clamped);
                page.page = request.page;
                page.limit = request.limit;
                (request, page)
            }
            Err(e) => {
                self.notices.push(Notice::error(format!(
                    "Failed to load {} records: {e}",
                    ticket.model
                )));
                (request, Page::empty(request.limit))
            }
        };

        match &mut self.state {
            ViewState::ModelSelected(loading) => {
                loading.request = request;
                loading.page = Some(page);
            }
            ViewState::Ready(ws) => {
                ws.request = request;
                ws.page = page;
                ws.busy = false;
            }
            ViewState::NoModelSelected => {}
        }
        self.promote();
        Vec::new()
    }

    fn apply_record(
        &mut self,
        ticket: &Ticket,
        id: &RecordId,
        result: CoreResult<Record>,
    ) {
        if ticket.seq != self.latest.record || self.selected_model() != Some(&ticket.model) {
            log::debug!("Dropping stale record {}/{id}", ticket.model);
            return;
        }
        let Some(ws) = self.workspace_mut() else {
            return;
        };
        let Dialog::View {
            id: shown,
            record: slot,
        } = &mut ws.dialog
        else {
            return;
        };
        if shown != id {
            return;
        }
        match result {
            Ok(record) => *slot = Some(record),
            Err(e) => {
                ws.dialog = Dialog::None;
                self.notices.push(Notice::error(e.to_string()));
            }
        }
    }

    fn apply_mutation(
        &mut self,
        ticket: &Ticket,
        kind: MutationKind,
        result: CoreResult<()>,
    ) -> Vec<Command> {
        let Some(ws) = self.workspace_mut().filter(|ws| ws.model == ticket.model) else {
            log::info!(
                "Ignoring {kind} result for {} which is no longer selected",
                ticket.model
            );
            return Vec::new();
        };

        let owns_dialog = ws.dialog.pending_seq() == Some(ticket.seq);
        match result {
            Ok(()) => {
                if owns_dialog {
                    ws.dialog = Dialog::None;
                }
                let request = ws.request;
                self.notices
                    .push(Notice::info(format!("{} record {kind}", ticket.model)));
                self.fetch_page(request)
            }
            Err(e) => {
                let message = e.to_string();
                if owns_dialog {
                    match &mut ws.dialog {
                        Dialog::Create(form) | Dialog::Edit { form, .. } => {
                            form.pending = None;
                            form.error = Some(message.clone());
                        }
                        Dialog::ConfirmDelete { pending, error, .. } => {
                            *pending = None;
                            *error = Some(message.clone());
                        }
                        Dialog::None | Dialog::View { .. } => {}
                    }
                }
                self.notices.push(Notice::error(message));
                Vec::new()
            }
        }
    }

    // ===== 内部 =====

    fn next_seq(&mut self) -> u64 {
        self.seq += 1;
        self.seq
    }

    fn ticket(&mut self, model: &ModelName) -> Ticket {
        Ticket {
            seq: self.next_seq(),
            model: model.clone(),
        }
    }

    fn workspace_mut(&mut self) -> Option<&mut Workspace> {
        match &mut self.state {
            ViewState::Ready(ws) => Some(ws),
            _ => None,
        }
    }

    /// Workspace with no dialog open.
    fn idle_workspace_mut(&mut self) -> Option<&mut Workspace> {
        self.workspace_mut().filter(|ws| !ws.dialog.is_open())
    }

    fn fetch_page(&mut self, request: PageRequest) -> Vec<Command> {
        let Some(model) = self.selected_model().cloned() else {
            return Vec::new();
        };
        let ticket = self.ticket(&model);
        self.latest.page = ticket.seq;
        match &mut self.state {
            ViewState::ModelSelected(loading) => loading.request = request,
            ViewState::Ready(ws) => {
                ws.request = request;
                ws.busy = true;
            }
            ViewState::NoModelSelected => {}
        }
        vec![Command::FetchPage { ticket, request }]
    }

    fn record_missing(&mut self, id: &RecordId) {
        self.notices
            .push(Notice::error(CoreError::RecordNotFound(id.to_string()).to_string()));
    }

    /// `ModelSelected` becomes `Ready` once both fields and page are in.
    fn promote(&mut self) {
        let ViewState::ModelSelected(loading) = &mut self.state else {
            return;
        };
        if loading.fields.is_none() || loading.page.is_none() {
            return;
        }
        let model = loading.model.clone();
        let request = loading.request;
        let fields = loading.fields.take().unwrap_or_default();
        let page = loading
            .page
            .take()
            .unwrap_or_else(|| Page::empty(request.limit));
        log::debug!(
            "{model} ready: {} fields, {} of {} records",
            fields.len(),
            page.records.len(),
            page.total
        );
        self.state = ViewState::Ready(Workspace {
            model,
            fields,
            page,
            request,
            busy: false,
            dialog: Dialog::None,
        });
    }
}

/// Number of pages in a workspace, at least 1 for display.
pub fn display_total_pages(ws: &Workspace) -> u64 {
    total_pages(ws.page.total, ws.page.limit).max(1)
}

#[cfg(test)]
#[path = "controller_tests.rs"]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests;
