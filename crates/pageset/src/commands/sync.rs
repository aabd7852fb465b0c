//! Synchronize every configured section.

use std::path::Path;

use anyhow::{Context, Result};
use pageset_sync::Synchronizer;

use crate::config::{config_base, load_config};

/// Run the sync command.
///
/// With `only` set, just the section whose folder matches is synchronized.
pub fn run(config_path: &Path, only: Option<&str>) -> Result<()> {
    let config = load_config(config_path)?;

    if config.sections.is_empty() {
        anyhow::bail!(
            "No sections configured in {}. Run 'pageset init' first.",
            config_path.display()
        );
    }

    let sections: Vec<_> = config
        .sections
        .iter()
        .filter(|s| only.map_or(true, |folder| s.folder == folder))
        .collect();

    if sections.is_empty() {
        anyhow::bail!(
            "No section with folder '{}' in {}",
            only.unwrap_or_default(),
            config_path.display()
        );
    }

    let base = config_base(config_path);
    let synchronizer = Synchronizer::new(config.sync_config());

    for section in sections {
        let folder = config.section_path(&base, section);
        let report = synchronizer
            .sync(&folder, &section.pages)
            .with_context(|| format!("Failed to synchronize {}", folder.display()))?;

        tracing::debug!(
            "{}: wrote {} documents, deleted {}",
            section.folder,
            report.written.len(),
            report.deleted.len()
        );
    }

    tracing::info!("Done!");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const CONFIG: &str = r#"
[[section]]
folder = "geometry"

[[section.page]]
title = "KD Tree"
description = "Spatial partitioning."
embed = "https://example/embed/kd"
filename = "kd-tree.qmd"

[[section]]
folder = "coding"

[[section.page]]
title = "Hatches"
description = "Hatch patterns."
embed = "https://example/embed/hatches"
filename = "hatches.qmd"
"#;

    #[test]
    fn syncs_every_section_relative_to_config() {
        let temp = tempdir().unwrap();
        let config_path = temp.path().join("pageset.toml");
        fs::write(&config_path, CONFIG).unwrap();

        run(&config_path, None).unwrap();

        assert!(temp.path().join("geometry/kd-tree.qmd").exists());
        assert!(temp.path().join("geometry/index.qmd").exists());
        assert!(temp.path().join("coding/hatches.qmd").exists());
        assert!(temp.path().join("coding/index.qmd").exists());
    }

    #[test]
    fn syncs_only_selected_section() {
        let temp = tempdir().unwrap();
        let config_path = temp.path().join("pageset.toml");
        fs::write(&config_path, CONFIG).unwrap();

        run(&config_path, Some("coding")).unwrap();

        assert!(temp.path().join("coding/hatches.qmd").exists());
        assert!(!temp.path().join("geometry").exists());
    }

    #[test]
    fn unknown_section_is_an_error() {
        let temp = tempdir().unwrap();
        let config_path = temp.path().join("pageset.toml");
        fs::write(&config_path, CONFIG).unwrap();

        assert!(run(&config_path, Some("missing")).is_err());
    }

    #[test]
    fn missing_config_is_an_error() {
        let temp = tempdir().unwrap();

        assert!(run(&temp.path().join("pageset.toml"), None).is_err());
    }
}
