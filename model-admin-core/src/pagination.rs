//! Page arithmetic.

use serde::{Deserialize, Serialize};

/// The page a listing was requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageRequest {
    /// 1-indexed
    pub page: u32,
    pub limit: u32,
}

impl PageRequest {
    pub fn new(page: u32, limit: u32) -> Self {
        Self { page, limit }
    }

    pub fn first(limit: u32) -> Self {
        Self::new(1, limit)
    }

    #[must_use]
    pub fn with_page(self, page: u32) -> Self {
        Self { page, ..self }
    }
}

/// `ceil(total / limit)`. A zero limit yields zero pages.
pub fn total_pages(total: u64, limit: u32) -> u64 {
    if limit == 0 {
        return 0;
    }
    total.div_ceil(u64::from(limit))
}

/// Clamps `page` into `[1, max(1, total_pages)]`.
pub fn clamp_page(page: u32, total: u64, limit: u32) -> u32 {
    let last = u32::try_from(total_pages(total, limit).max(1)).unwrap_or(u32::MAX);
    page.clamp(1, last)
}
