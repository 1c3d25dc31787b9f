//! Record forms backing the create and edit dialogs.
//!
//! A form holds one entry per editable field, in field order. Fields the
//! backend maintains (`id`, `created_at`, `updated_at`) never get an entry.

use std::fmt::Display;

use chrono::{Local, TimeZone};
use model_admin_client::{FieldDescriptor, Payload, Record};
use serde_json::Value;

use crate::editor::{ControlValue, EditorSettings, FieldEditor};
use crate::error::{CoreError, CoreResult};

/// One editable row of a form.
#[derive(Debug, Clone, PartialEq)]
pub struct FormEntry {
    pub editor: FieldEditor,
    pub control: ControlValue,
    /// 编辑表单：记录中的原值及其初始控件状态
    origin: Option<(Value, ControlValue)>,
}

impl FormEntry {
    fn blank(editor: FieldEditor) -> Self {
        let control = editor.empty_control();
        Self {
            editor,
            control,
            origin: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.editor.field().name
    }

    /// Whether the control differs from what the form was opened with.
    /// Entries of a blank form always count as modified.
    pub fn is_modified(&self) -> bool {
        self.origin
            .as_ref()
            .is_none_or(|(_, initial)| *initial != self.control)
    }

    /// The stored value to send back unchanged, if the entry is untouched.
    fn untouched_value(&self) -> Option<&Value> {
        match &self.origin {
            Some((value, initial)) if *initial == self.control => Some(value),
            _ => None,
        }
    }
}

/// Editable snapshot of a record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordForm {
    entries: Vec<FormEntry>,
}

impl RecordForm {
    /// Blank form for a new record.
    pub fn blank(fields: &[FieldDescriptor], settings: &EditorSettings) -> Self {
        let entries = editable(fields)
            .map(|field| FormEntry::blank(FieldEditor::for_field(field, settings)))
            .collect();
        Self { entries }
    }

    /// Form pre-filled from an existing record.
    pub fn from_record(fields: &[FieldDescriptor], record: &Record, settings: &EditorSettings) -> Self {
        Self::from_record_in(fields, record, settings, &Local)
    }

    pub fn from_record_in<Tz>(
        fields: &[FieldDescriptor],
        record: &Record,
        settings: &EditorSettings,
        tz: &Tz,
    ) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let entries = editable(fields)
            .map(|field| {
                let editor = FieldEditor::for_field(field, settings);
                let value = record.value_of(&field.name).clone();
                let control = editor.to_display_in(&value, tz);
                FormEntry {
                    editor,
                    control: control.clone(),
                    origin: Some((value, control)),
                }
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[FormEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry_mut(&mut self, index: usize) -> Option<&mut FormEntry> {
        self.entries.get_mut(index)
    }

    /// Replaces the control of the entry named `field`. Returns `false` if
    /// the form has no such entry.
    pub fn set(&mut self, field: &str, control: ControlValue) -> bool {
        match self.entries.iter_mut().find(|e| e.name() == field) {
            Some(entry) => {
                entry.control = control;
                true
            }
            None => false,
        }
    }

    pub fn control(&self, field: &str) -> Option<&ControlValue> {
        self.entries
            .iter()
            .find(|e| e.name() == field)
            .map(|e| &e.control)
    }

    /// Converts every entry to its stored value.
    ///
    /// Untouched entries of an edit form keep the record's original value.
    /// Fails on the first conversion error, or with a validation error when
    /// an edited non-nullable field would be stored as `null`.
    pub fn to_payload(&self) -> CoreResult<Payload> {
        self.to_payload_in(&Local)
    }

    pub fn to_payload_in<Tz: TimeZone>(&self, tz: &Tz) -> CoreResult<Payload> {
        let mut payload = Payload::new();
        for entry in &self.entries {
            let field = entry.editor.field();
            if let Some(original) = entry.untouched_value() {
                payload.insert(field.name.clone(), original.clone());
                continue;
            }
            let value = entry.editor.from_control_in(&entry.control, tz)?;
            if value.is_null() && !field.nullable {
                return Err(CoreError::ValidationError(format!(
                    "{} is required",
                    field.name
                )));
            }
            payload.insert(field.name.clone(), value);
        }
        Ok(payload)
    }
}

fn editable(fields: &[FieldDescriptor]) -> impl Iterator<Item = &FieldDescriptor> {
    fields.iter().filter(|f| !f.is_system_managed())
}

/// Drops `keys` from a payload.
pub(crate) fn strip_keys(mut payload: Payload, keys: &[&str]) -> Payload {
    for key in keys {
        payload.remove(*key);
    }
    payload
}
