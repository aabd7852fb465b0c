//! Page set synchronizer.
//!
//! Keeps a destination folder holding exactly one generated document per page
//! record plus an index document, deleting stale documents left over from
//! earlier runs.

pub mod grid;
pub mod record;
mod scan;
pub mod synchronizer;
pub mod templates;

pub use grid::{collect_entries, GridEntry};
pub use record::{validate_records, PageRecord, RecordError};
pub use synchronizer::{FolderState, IndexStyle, SyncConfig, SyncError, SyncReport, Synchronizer};
