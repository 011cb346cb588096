//! Core navigation and preview state machines.
//!
//! This module provides:
//! - [`DirectoryStore`] directory listing state with last-request-wins sequencing
//! - [`PreviewSession`] modal preview state and object URL lifecycle
//! - [`path`] relative path helpers
//! - [`error`] structured error types

pub mod error;
pub mod path;
mod preview;
mod store;

pub use preview::{MediaKind, PresentOutcome, PreviewSession, PreviewTicket, RenderedContent};
pub use store::{DirectoryStore, NavTicket};
