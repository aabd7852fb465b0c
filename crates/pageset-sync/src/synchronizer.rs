//! Folder synchronizer.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::grid::collect_entries;
use crate::record::{validate_records, PageRecord, RecordError};
use crate::scan::document_files;
use crate::templates::TemplateEngine;

/// How the index document builds its link grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexStyle {
    /// Embed a code chunk that scans sibling headers when the site is rendered
    #[default]
    Directive,

    /// Render the grid now from the documents just written
    Static,
}

/// Configuration shared by every synchronized folder.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Extension of generated documents, without the dot
    pub extension: String,

    /// How the index document is produced
    pub index_style: IndexStyle,
}

impl SyncConfig {
    /// File name of the index document.
    pub fn index_name(&self) -> String {
        format!("index.{}", self.extension)
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            extension: "qmd".to_string(),
            index_style: IndexStyle::Directive,
        }
    }
}

/// Whether the destination folder had to be created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FolderState {
    Created,
    Existed,
}

/// Outcome of synchronizing one folder.
#[derive(Debug)]
pub struct SyncReport {
    /// Destination folder
    pub folder: PathBuf,

    /// Whether the folder was created by this run
    pub folder_state: FolderState,

    /// Stale documents removed, in name order
    pub deleted: Vec<String>,

    /// Documents written, in record order, index last
    pub written: Vec<String>,
}

/// Errors that can occur while synchronizing a folder.
///
/// None of them is recovered from. Documents written before the failure
/// stay on disk.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("Invalid page records: {0}")]
    Records(#[from] RecordError),

    #[error("Failed to create folder {path}: {source}")]
    CreateFolder {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to read folder {path}: {source}")]
    ReadFolder {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to delete {path}: {source}")]
    Delete {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to render template: {0}")]
    Template(String),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
}

/// Reconciles a destination folder with a list of page records.
pub struct Synchronizer {
    config: SyncConfig,
    templates: TemplateEngine,
}

impl Synchronizer {
    /// Create a new synchronizer.
    pub fn new(config: SyncConfig) -> Self {
        Self {
            config,
            templates: TemplateEngine::new(),
        }
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// Synchronize `folder` with `records`.
    ///
    /// Validates the records, creates the folder when missing, deletes stale
    /// documents, writes every page and finally the index.
    pub fn sync(&self, folder: &Path, records: &[PageRecord]) -> Result<SyncReport, SyncError> {
        let index_name = self.config.index_name();
        validate_records(records, &self.config.extension, &index_name)?;

        let folder_state = self.ensure_folder(folder)?;

        // A fresh folder holds nothing to prune
        let deleted = match folder_state {
            FolderState::Created => Vec::new(),
            FolderState::Existed => {
                self.prune_stale(folder, &self.expected_filenames(records))?
            }
        };

        let mut written = Vec::with_capacity(records.len() + 1);
        for record in records {
            self.write_document(folder, record)?;
            written.push(record.filename.clone());
        }

        self.write_index(folder)?;
        written.push(index_name);

        Ok(SyncReport {
            folder: folder.to_path_buf(),
            folder_state,
            deleted,
            written,
        })
    }

    /// File names that belong in the folder: every record plus the index.
    pub fn expected_filenames(&self, records: &[PageRecord]) -> HashSet<String> {
        records
            .iter()
            .map(|r| r.filename.clone())
            .chain(std::iter::once(self.config.index_name()))
            .collect()
    }

    /// Create the destination folder if it does not exist yet.
    pub fn ensure_folder(&self, folder: &Path) -> Result<FolderState, SyncError> {
        if folder.is_dir() {
            tracing::info!("Folder exists: {}", folder.display());
            return Ok(FolderState::Existed);
        }

        fs::create_dir_all(folder).map_err(|e| SyncError::CreateFolder {
            path: folder.display().to_string(),
            source: e,
        })?;
        tracing::info!("Created folder: {}", folder.display());

        Ok(FolderState::Created)
    }

    /// Delete generated documents in `folder` that are not in `expected`.
    ///
    /// Candidates are the entries directly inside the folder carrying the
    /// document extension, symlinks included. Returns the deleted names in
    /// name order.
    pub fn prune_stale(
        &self,
        folder: &Path,
        expected: &HashSet<String>,
    ) -> Result<Vec<String>, SyncError> {
        let files =
            document_files(folder, &self.config.extension).map_err(|e| SyncError::ReadFolder {
                path: folder.display().to_string(),
                source: e,
            })?;

        let mut deleted = Vec::new();
        for file in files {
            if expected.contains(&file.name) {
                continue;
            }

            fs::remove_file(&file.path).map_err(|e| SyncError::Delete {
                path: file.path.display().to_string(),
                source: e,
            })?;
            tracing::info!("Deleted: {}", file.name);
            deleted.push(file.name);
        }

        Ok(deleted)
    }

    /// Render and write the document for one record, overwriting any
    /// existing file.
    pub fn write_document(&self, folder: &Path, record: &PageRecord) -> Result<PathBuf, SyncError> {
        let content = self
            .templates
            .render_page(record)
            .map_err(|e| SyncError::Template(e.to_string()))?;

        let path = folder.join(&record.filename);
        write_file(&path, &content)?;
        tracing::info!("Created: {}", record.filename);

        Ok(path)
    }

    /// Write the index document for `folder`.
    pub fn write_index(&self, folder: &Path) -> Result<PathBuf, SyncError> {
        let index_name = self.config.index_name();

        let content = match self.config.index_style {
            IndexStyle::Directive => self
                .templates
                .render_index_directive(&self.config.extension, &index_name),
            IndexStyle::Static => {
                let entries = collect_entries(folder, &self.config.extension, &index_name)
                    .map_err(|e| SyncError::ReadFolder {
                        path: folder.display().to_string(),
                        source: e,
                    })?;
                tracing::debug!("Rendering grid with {} entries", entries.len());
                self.templates
                    .render_grid(&entries)
                    .and_then(|grid| self.templates.render_index_static(&grid))
            }
        }
        .map_err(|e| SyncError::Template(e.to_string()))?;

        let path = folder.join(&index_name);
        write_file(&path, &content)?;
        tracing::info!("Created: {}", index_name);

        Ok(path)
    }
}

fn write_file(path: &Path, content: &str) -> Result<(), SyncError> {
    fs::write(path, content).map_err(|e| SyncError::Write {
        path: path.display().to_string(),
        source: e,
    })
}
