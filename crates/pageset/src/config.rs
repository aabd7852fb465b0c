//! Configuration file structure (pageset.toml).

use std::collections::HashSet;
use std::fs;
use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};
use pageset_sync::{IndexStyle, PageRecord, SyncConfig};
use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default, rename = "section")]
    pub sections: Vec<SectionConfig>,
}

#[derive(Debug, Deserialize)]
pub struct SiteConfig {
    /// Directory section folders resolve against, relative to the config file
    #[serde(default = "default_root")]
    pub root: String,

    /// Extension of generated documents
    #[serde(default = "default_extension")]
    pub extension: String,

    #[serde(default)]
    pub index: IndexStyle,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            extension: default_extension(),
            index: IndexStyle::default(),
        }
    }
}

/// One topic folder and the pages it holds.
#[derive(Debug, Deserialize)]
pub struct SectionConfig {
    pub folder: String,

    #[serde(default, rename = "page")]
    pub pages: Vec<PageRecord>,
}

fn default_root() -> String {
    ".".to_string()
}
fn default_extension() -> String {
    "qmd".to_string()
}

impl ConfigFile {
    /// Parse a configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        let config: ConfigFile = toml::from_str(content).context("Failed to parse config")?;
        config.check()?;
        Ok(config)
    }

    /// Synchronizer settings derived from the `[site]` table.
    pub fn sync_config(&self) -> SyncConfig {
        SyncConfig {
            extension: self.site.extension.trim_start_matches('.').to_string(),
            index_style: self.site.index,
        }
    }

    /// Resolve a section folder against the site root.
    ///
    /// `base` is the directory holding the config file.
    pub fn section_path(&self, base: &Path, section: &SectionConfig) -> PathBuf {
        base.join(&self.site.root).join(&section.folder)
    }

    fn check(&self) -> Result<()> {
        if self.site.extension.trim_start_matches('.').is_empty() {
            anyhow::bail!("site.extension must not be empty");
        }

        // Two sections sharing a folder would prune each other's pages
        let mut folders = HashSet::new();
        for section in &self.sections {
            if section.folder.trim().is_empty() {
                anyhow::bail!("Section folder must not be empty");
            }
            if !folders.insert(normalized_folder(&section.folder)) {
                anyhow::bail!("Section folder {} is listed more than once", section.folder);
            }
        }

        Ok(())
    }
}

/// Folder path with `.` components and trailing separators dropped, so
/// `a`, `a/` and `./a` compare equal.
fn normalized_folder(folder: &str) -> PathBuf {
    Path::new(folder)
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

/// Load configuration from `path` if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = ConfigFile::parse(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        tracing::debug!(
            "Loaded {} sections from {}",
            config.sections.len(),
            path.display()
        );
        return Ok(config);
    }
    Ok(ConfigFile::default())
}

/// Directory that relative paths in the config file resolve against.
pub fn config_base(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
