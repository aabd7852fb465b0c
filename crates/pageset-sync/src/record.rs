//! Page records and their validation.

use std::collections::HashSet;

use serde::Deserialize;

/// Query parameter selecting the classic embed viewer.
const VIEWER_PARAM: &str = "ui=classic";

/// One page to generate.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PageRecord {
    /// Page title, written as `pagetitle`
    pub title: String,

    /// Short description shown in the index grid
    pub description: String,

    /// URL of the embedded visualization
    pub embed: String,

    /// Target file name inside the destination folder
    pub filename: String,
}

impl PageRecord {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        embed: impl Into<String>,
        filename: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            embed: embed.into(),
            filename: filename.into(),
        }
    }

    /// Viewer URL for the iframe, with the classic UI selected.
    pub fn embed_src(&self) -> String {
        let separator = if self.embed.contains('?') { '&' } else { '?' };
        format!("{}{}{}", self.embed, separator, VIEWER_PARAM)
    }
}

/// Errors in a record list, detected before anything is written.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("Page '{title}' has an empty filename")]
    EmptyFilename { title: String },

    #[error("Filename must be a plain file name: {0}")]
    InvalidFilename(String),

    #[error("Filename {filename} does not end in .{extension}")]
    WrongExtension { filename: String, extension: String },

    #[error("Filename {0} is reserved for the index document")]
    Reserved(String),

    #[error("Filename {0} is used by more than one page")]
    Duplicate(String),
}

/// Check that every record maps to a distinct generated document.
///
/// Filenames must be plain names inside the destination folder, carry the
/// document extension and never collide with the index document.
pub fn validate_records(
    records: &[PageRecord],
    extension: &str,
    index_name: &str,
) -> Result<(), RecordError> {
    let suffix = format!(".{}", extension);
    let mut seen = HashSet::new();

    for record in records {
        let filename = record.filename.as_str();

        if filename.is_empty() {
            return Err(RecordError::EmptyFilename {
                title: record.title.clone(),
            });
        }

        if filename.contains(['/', '\\']) || filename == "." || filename == ".." {
            return Err(RecordError::InvalidFilename(filename.to_string()));
        }

        if !filename.ends_with(&suffix) || filename.len() == suffix.len() {
            return Err(RecordError::WrongExtension {
                filename: filename.to_string(),
                extension: extension.to_string(),
            });
        }

        if filename == index_name {
            return Err(RecordError::Reserved(filename.to_string()));
        }

        if !seen.insert(filename) {
            return Err(RecordError::Duplicate(filename.to_string()));
        }
    }

    Ok(())
}
