//! 页面

pub mod records;
