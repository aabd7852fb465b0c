//! Print the link grid for a folder.

use std::path::Path;

use anyhow::{Context, Result};
use pageset_sync::collect_entries;
use pageset_sync::templates::TemplateEngine;

use crate::config::load_config;

/// Render the grid the index document would show for `folder`.
pub fn render(config_path: &Path, folder: &Path) -> Result<String> {
    let sync_config = load_config(config_path)?.sync_config();

    let entries = collect_entries(folder, &sync_config.extension, &sync_config.index_name())
        .with_context(|| format!("Failed to scan {}", folder.display()))?;
    tracing::debug!("Found {} titled documents", entries.len());

    TemplateEngine::new()
        .render_grid(&entries)
        .context("Failed to render grid")
}

/// Run the index command.
pub fn run(config_path: &Path, folder: &Path) -> Result<()> {
    let grid = render(config_path, folder)?;
    println!("{}", grid);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn renders_titled_documents_only() {
        let temp = tempdir().unwrap();
        let folder = temp.path().join("geometry");
        fs::create_dir(&folder).unwrap();
        fs::write(folder.join("b.qmd"), "---\npagetitle: \"B\"\n---\n").unwrap();
        fs::write(folder.join("a.qmd"), "---\npagetitle: \"A\"\n---\n").unwrap();
        fs::write(folder.join("c.qmd"), "---\ndescription: \"untitled\"\n---\n").unwrap();

        let grid = render(&temp.path().join("pageset.toml"), &folder).unwrap();

        assert_eq!(grid.matches("<a href=").count(), 2);
        assert!(grid.find("a.qmd").unwrap() < grid.find("b.qmd").unwrap());
        assert!(!grid.contains("c.qmd"));
    }

    #[test]
    fn honours_configured_extension() {
        let temp = tempdir().unwrap();
        let config_path = temp.path().join("pageset.toml");
        fs::write(&config_path, "[site]\nextension = \"md\"\n").unwrap();
        fs::write(temp.path().join("a.md"), "---\npagetitle: \"A\"\n---\n").unwrap();
        fs::write(temp.path().join("b.qmd"), "---\npagetitle: \"B\"\n---\n").unwrap();

        let grid = render(&config_path, temp.path()).unwrap();

        assert_eq!(grid.matches("<a href=").count(), 1);
        assert!(grid.contains("a.md"));
    }
}
