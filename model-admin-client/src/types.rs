//! Wire types shared by every backend operation.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key of the immutable primary key carried by every record.
pub const ID_FIELD: &str = "id";
/// Write-once creation timestamp key.
pub const CREATED_AT_FIELD: &str = "created_at";
/// Backend-maintained modification timestamp key.
pub const UPDATED_AT_FIELD: &str = "updated_at";

// ============ Model Types ============

/// Name of a browsable backend entity ("User", "Course", ...).
///
/// Opaque: the client never interprets it beyond putting it in a URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelName(String);

impl ModelName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ModelName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ModelName {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for ModelName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ============ Field Schema Types ============

/// Declared type of a model field.
///
/// Closed set: any type string the backend sends that is not listed here
/// deserializes to [`FieldType::Other`] instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Int,
    Float,
    Boolean,
    Datetime,
    #[serde(other)]
    Other,
}

impl FieldType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Int => "int",
            Self::Float => "float",
            Self::Boolean => "boolean",
            Self::Datetime => "datetime",
            Self::Other => "other",
        }
    }
}

/// Metadata describing one attribute of a model.
///
/// The backend returns descriptors in display order; that order is kept
/// verbatim and defines table columns and form rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Field key inside a [`Record`].
    pub name: String,
    /// Declared type.
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Whether `null` is an acceptable value.
    #[serde(default)]
    pub nullable: bool,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, field_type: FieldType, nullable: bool) -> Self {
        Self {
            name: name.into(),
            field_type,
            nullable,
        }
    }

    /// `id`, `created_at` and `updated_at` are maintained by the backend.
    pub fn is_system_managed(&self) -> bool {
        matches!(
            self.name.as_str(),
            ID_FIELD | CREATED_AT_FIELD | UPDATED_AT_FIELD
        )
    }
}

// ============ Record Types ============

/// Primary key of a record, normalized to its textual form.
///
/// The backend may use numeric or string ids; both address the same URL
/// segment once rendered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Build an id from a JSON value; only strings and numbers qualify.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Self(s.clone())),
            Value::Number(n) => Some(Self(n.to_string())),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// One instance of a model: field name to arbitrary JSON value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Primary key, if the record carries a usable `id`.
    pub fn id(&self) -> Option<RecordId> {
        self.0.get(ID_FIELD).and_then(RecordId::from_value)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Value of `field`, or `null` when absent.
    pub fn value_of(&self, field: &str) -> &Value {
        self.0.get(field).unwrap_or(&Value::Null)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for Record {
    fn from(value: Map<String, Value>) -> Self {
        Self(value)
    }
}

/// Body sent to create/update; keys are field names.
pub type Payload = Map<String, Value>;

// ============ Pagination Types ============

/// One offset-based slice of a model's records.
///
/// `page` and `limit` echo the request that produced it; the backend only
/// reports `records` and `total`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Records on this page, in backend order.
    pub records: Vec<Record>,
    /// Total number of records across all pages.
    pub total: u64,
    /// 1-indexed page number.
    pub page: u32,
    /// Page size used for the request.
    pub limit: u32,
}

impl Page {
    /// Empty page used when a listing fails or nothing is loaded yet.
    pub fn empty(limit: u32) -> Self {
        Self {
            records: Vec::new(),
            total: 0,
            page: 1,
            limit,
        }
    }

    /// `ceil(total / limit)`; zero when there are no records.
    pub fn total_pages(&self) -> u64 {
        if self.limit == 0 {
            return 0;
        }
        self.total.div_ceil(u64::from(self.limit))
    }
}

// ============ Wire Envelopes ============

/// `GET /models/{model}/fields`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldsResponse {
    pub fields: Vec<FieldDescriptor>,
}

/// `GET /models/{model}/records`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordsResponse {
    pub data: Vec<Record>,
    #[serde(default)]
    pub total: u64,
}
