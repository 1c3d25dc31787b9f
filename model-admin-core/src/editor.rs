//! Field editor dispatcher
//!
//! Chooses an input control for each field from its declared
//! [`FieldType`] and converts between stored JSON values and control state.
//!
//! ```text
//!   stored Value ──to_display──▶ ControlValue ──(user edits)──▶ ControlValue ──from_control──▶ stored Value
//! ```
//!
//! For every value an editor can produce, `from_control(to_display(v)) == v`.

use std::fmt::Display;

use chrono::{Local, TimeZone};
use model_admin_client::{FieldDescriptor, FieldType};
use serde_json::{Number, Value};

use crate::config::{NumericInputPolicy, ViewSettings};
use crate::error::{CoreError, CoreResult};
use crate::utils::datetime::{self, EDITOR_FORMAT};

/// 编辑控件类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorKind {
    /// true / false / unset
    TriState,
    /// Local wall-clock time, minute precision
    DateTime,
    Integer,
    Float,
    SingleLine,
    MultiLine,
}

impl EditorKind {
    /// Whether the control holds free text (as opposed to a choice).
    pub fn is_text(self) -> bool {
        !matches!(self, Self::TriState)
    }
}

/// Control state as the user sees and edits it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlValue {
    /// Tri-state choice; `None` is "unset".
    Choice(Option<bool>),
    /// Raw text of a text-like control.
    Text(String),
}

impl ControlValue {
    /// Advances a choice: unset → true → false → unset. Text is unchanged.
    #[must_use]
    pub fn next_choice(&self) -> Self {
        match self {
            Self::Choice(None) => Self::Choice(Some(true)),
            Self::Choice(Some(true)) => Self::Choice(Some(false)),
            Self::Choice(Some(false)) => Self::Choice(None),
            Self::Text(_) => self.clone(),
        }
    }

    /// Short label for rendering the control.
    pub fn label(&self) -> &str {
        match self {
            Self::Choice(None) => "(unset)",
            Self::Choice(Some(true)) => "True",
            Self::Choice(Some(false)) => "False",
            Self::Text(text) => text,
        }
    }
}

/// Settings consulted during dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSettings {
    pub long_text_markers: Vec<String>,
    pub numeric_input: NumericInputPolicy,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self::from(&ViewSettings::default())
    }
}

impl From<&ViewSettings> for EditorSettings {
    fn from(settings: &ViewSettings) -> Self {
        Self {
            long_text_markers: settings.long_text_markers.clone(),
            numeric_input: settings.numeric_input,
        }
    }
}

/// Editor bound to one field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldEditor {
    field: FieldDescriptor,
    kind: EditorKind,
    numeric_input: NumericInputPolicy,
}

impl FieldEditor {
    /// Dispatch on the declared field type.
    pub fn for_field(field: &FieldDescriptor, settings: &EditorSettings) -> Self {
        let kind = match field.field_type {
            FieldType::Boolean => EditorKind::TriState,
            FieldType::Datetime => EditorKind::DateTime,
            FieldType::Int => EditorKind::Integer,
            FieldType::Float => EditorKind::Float,
            FieldType::String => {
                if is_long_text(&field.name, &settings.long_text_markers) {
                    EditorKind::MultiLine
                } else {
                    EditorKind::SingleLine
                }
            }
            FieldType::Other => EditorKind::SingleLine,
        };
        Self {
            field: field.clone(),
            kind,
            numeric_input: settings.numeric_input,
        }
    }

    pub fn field(&self) -> &FieldDescriptor {
        &self.field
    }

    pub fn kind(&self) -> EditorKind {
        self.kind
    }

    /// Control state for a field with no value yet.
    pub fn empty_control(&self) -> ControlValue {
        match self.kind {
            EditorKind::TriState => ControlValue::Choice(None),
            _ => ControlValue::Text(String::new()),
        }
    }

    /// Stored value → control state, date-times in the local zone.
    pub fn to_display(&self, value: &Value) -> ControlValue {
        self.to_display_in(value, &Local)
    }

    pub fn to_display_in<Tz>(&self, value: &Value, tz: &Tz) -> ControlValue
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        match self.kind {
            EditorKind::TriState => ControlValue::Choice(value.as_bool()),
            EditorKind::DateTime => {
                let text = match value {
                    Value::Null => String::new(),
                    Value::String(s) => datetime::parse_instant(s).map_or_else(
                        || s.clone(),
                        |instant| datetime::format_in(&instant, tz, EDITOR_FORMAT),
                    ),
                    other => other.to_string(),
                };
                ControlValue::Text(text)
            }
            EditorKind::Integer
            | EditorKind::Float
            | EditorKind::SingleLine
            | EditorKind::MultiLine => ControlValue::Text(plain_text(value)),
        }
    }

    /// Control state → stored value, reading date-times as local time.
    pub fn from_control(&self, control: &ControlValue) -> CoreResult<Value> {
        self.from_control_in(control, &Local)
    }

    pub fn from_control_in<Tz: TimeZone>(
        &self,
        control: &ControlValue,
        tz: &Tz,
    ) -> CoreResult<Value> {
        match (self.kind, control) {
            (EditorKind::TriState, ControlValue::Choice(choice)) => {
                Ok(choice.map_or(Value::Null, Value::Bool))
            }
            (EditorKind::TriState, ControlValue::Text(text)) => match text.trim() {
                "" => Ok(Value::Null),
                "true" => Ok(Value::Bool(true)),
                "false" => Ok(Value::Bool(false)),
                other => Err(self.conversion(format!("'{other}' is not true or false"))),
            },
            (_, ControlValue::Choice(_)) => Err(self.conversion("expected text input".into())),
            (EditorKind::DateTime, ControlValue::Text(text)) => self.datetime_value(text, tz),
            // 可空字段留空即为 null
            (_, ControlValue::Text(text)) if self.field.nullable && text.trim().is_empty() => {
                Ok(Value::Null)
            }
            (EditorKind::Integer, ControlValue::Text(text)) => self.integer_value(text),
            (EditorKind::Float, ControlValue::Text(text)) => self.float_value(text),
            (EditorKind::SingleLine | EditorKind::MultiLine, ControlValue::Text(text)) => {
                Ok(Value::String(text.clone()))
            }
        }
    }

    fn datetime_value<Tz: TimeZone>(&self, text: &str, tz: &Tz) -> CoreResult<Value> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(Value::Null);
        }
        datetime::parse_local_minute_in(text, tz)
            .or_else(|| datetime::parse_instant(text))
            .map(|instant| Value::String(datetime::to_iso_instant(&instant)))
            .ok_or_else(|| self.conversion(format!("'{text}' is not a date-time (YYYY-MM-DDTHH:MM)")))
    }

    fn integer_value(&self, text: &str) -> CoreResult<Value> {
        let text = text.trim();
        match text.parse::<i64>() {
            Ok(n) => Ok(Value::from(n)),
            Err(_) => self.numeric_fallback(text, Value::from(0_i64), "an integer"),
        }
    }

    fn float_value(&self, text: &str) -> CoreResult<Value> {
        let text = text.trim();
        match text.parse::<f64>().ok().and_then(Number::from_f64) {
            Some(n) => Ok(Value::Number(n)),
            None => {
                let zero = Number::from_f64(0.0).map_or(Value::from(0_i64), Value::Number);
                self.numeric_fallback(text, zero, "a number")
            }
        }
    }

    fn numeric_fallback(&self, text: &str, zero: Value, expected: &str) -> CoreResult<Value> {
        match self.numeric_input {
            NumericInputPolicy::CoerceToZero => {
                log::debug!(
                    "Field '{}': coercing unparsable input '{text}' to {zero}",
                    self.field.name
                );
                Ok(zero)
            }
            NumericInputPolicy::Reject if text.is_empty() => Ok(Value::Null),
            NumericInputPolicy::Reject => {
                Err(self.conversion(format!("'{text}' is not {expected}")))
            }
        }
    }

    fn conversion(&self, detail: String) -> CoreError {
        CoreError::ConversionError {
            field: self.field.name.clone(),
            detail,
        }
    }
}

/// Case-sensitive substring match against the configured markers.
pub fn is_long_text(field_name: &str, markers: &[String]) -> bool {
    markers
        .iter()
        .any(|marker| !marker.is_empty() && field_name.contains(marker.as_str()))
}

fn plain_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
