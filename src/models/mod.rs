//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Entry`], [`DirectoryListing`], [`PreviewProbe`] - Drive API wire types
//! - [`FileType`] - Semantic file classification by extension
//! - [`DriveRoute`] - Pathname-based navigation and history entries

mod entry;
mod file_type;
mod route;

pub use entry::{DirectoryListing, Entry, PreviewProbe};
pub use file_type::FileType;
pub use route::DriveRoute;
