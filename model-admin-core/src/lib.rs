//! Model Admin Core Library
//!
//! Platform-independent logic for administering arbitrary backend models:
//! - Model catalog, field schema and record services over an [`AdminBackend`](model_admin_client::AdminBackend)
//! - Value formatting for table cells and read-only views
//! - Field editor dispatch and record forms
//! - The [`ViewController`] state machine that drives a front end
//!
//! Nothing in this crate performs terminal or network IO directly; the
//! controller emits [`Command`]s and consumes [`Outcome`]s, leaving
//! execution to the front end.

pub mod config;
pub mod controller;
pub mod editor;
pub mod error;
pub mod form;
pub mod format;
pub mod pagination;
pub mod services;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use config::{NumericInputPolicy, ViewSettings};
pub use controller::{Command, Dialog, Notice, Outcome, Ticket, ViewController, ViewState};
pub use error::{CoreError, CoreResult};
pub use services::{ServiceContext, Services};
