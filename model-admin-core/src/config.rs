//! View settings shared by the controller, editors and front ends.
//!
//! Every key is optional when deserialized; missing keys take the defaults
//! below.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Default number of field columns shown in a records table.
pub const DEFAULT_TABLE_COLUMN_LIMIT: usize = 8;

/// Default page size.
pub const DEFAULT_PAGE_LIMIT: u32 = 10;

/// 数值输入无法解析时的处理策略
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NumericInputPolicy {
    /// Unparsable input stores `0` / `0.0`.
    #[default]
    CoerceToZero,
    /// Unparsable input is a conversion error.
    Reject,
}

/// View settings (`[view]` table of the config file)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    /// Maximum number of field columns in the records table.
    pub table_column_limit: usize,
    /// Substrings that turn a string field into a multi-line editor.
    pub long_text_markers: Vec<String>,
    /// Initial page size.
    pub page_limit: u32,
    /// Page sizes offered by the limit selector.
    pub page_limit_options: Vec<u32>,
    /// Numeric coercion behaviour.
    pub numeric_input: NumericInputPolicy,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            table_column_limit: DEFAULT_TABLE_COLUMN_LIMIT,
            long_text_markers: ["description", "content", "notes"]
                .into_iter()
                .map(String::from)
                .collect(),
            page_limit: DEFAULT_PAGE_LIMIT,
            page_limit_options: vec![10, 20, 50, 100],
            numeric_input: NumericInputPolicy::default(),
        }
    }
}

impl ViewSettings {
    /// Rejects settings no view can work with.
    pub fn validate(&self) -> CoreResult<()> {
        if self.table_column_limit == 0 {
            return Err(CoreError::ConfigError(
                "table_column_limit must be at least 1".to_string(),
            ));
        }
        if !self.page_limit_options.iter().any(|l| *l > 0) {
            return Err(CoreError::ConfigError(
                "page_limit_options needs at least one positive size".to_string(),
            ));
        }
        if self.long_text_markers.iter().any(|m| m.is_empty()) {
            return Err(CoreError::ConfigError(
                "long_text_markers must not contain empty strings".to_string(),
            ));
        }
        Ok(())
    }

    /// Page size to start with. Falls back to the first option (or the
    /// default) when the configured value is zero.
    pub fn initial_limit(&self) -> u32 {
        if self.page_limit > 0 {
            self.page_limit
        } else {
            self.page_limit_options
                .iter()
                .copied()
                .find(|l| *l > 0)
                .unwrap_or(DEFAULT_PAGE_LIMIT)
        }
    }

    /// Next larger (or, with `forward == false`, smaller) entry of
    /// `page_limit_options`, wrapping around.
    pub fn cycle_limit(&self, current: u32, forward: bool) -> u32 {
        let mut options: Vec<u32> = self
            .page_limit_options
            .iter()
            .copied()
            .filter(|l| *l > 0)
            .collect();
        options.sort_unstable();
        options.dedup();
        if options.is_empty() {
            return current;
        }

        let next = if forward {
            options.iter().copied().find(|l| *l > current)
        } else {
            options.iter().rev().copied().find(|l| *l < current)
        };
        match (next, forward) {
            (Some(l), _) => l,
            (None, true) => options[0],
            (None, false) => options[options.len() - 1],
        }
    }
}
