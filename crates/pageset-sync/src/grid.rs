//! Link grid built from the headers of sibling documents.

use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;

use pageset_front::parse_header;

use crate::scan::document_files;

/// One card in the index grid.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GridEntry {
    /// Link target, the sibling's file name
    pub href: String,
    /// Card label
    pub title: String,
    /// Card body
    pub description: String,
}

/// Collect grid entries for every generated document in `folder`.
///
/// Only entries directly inside the folder whose name ends in
/// `.{extension}` are considered, symlinks included and the index document
/// excluded. Entries come back ordered
/// by file name. Documents without a title in their header are skipped;
/// a document that cannot be read fails the whole scan.
pub fn collect_entries(
    folder: &Path,
    extension: &str,
    index_name: &str,
) -> io::Result<Vec<GridEntry>> {
    let mut entries = Vec::new();

    for file in document_files(folder, extension)? {
        if file.name == index_name {
            continue;
        }

        let content = fs::read_to_string(&file.path)?;
        let header = parse_header(&content);

        if !header.has_title() {
            tracing::debug!("Skipping {}: no title in header", file.name);
            continue;
        }

        entries.push(GridEntry {
            href: file.name,
            title: header.title().to_string(),
            description: header.description().to_string(),
        });
    }

    Ok(entries)
}
