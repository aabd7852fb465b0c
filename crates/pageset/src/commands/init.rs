//! Write a starter configuration.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub fn run(config_path: &Path, yes: bool) -> Result<()> {
    if config_path.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
        return Ok(());
    }

    if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    tracing::info!("Created {}", config_path.display());
    tracing::info!("Run 'pageset sync' to generate the pages.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# pageset configuration

[site]
# Section folders resolve against this directory, relative to this file
root = "."

# Extension of generated documents
extension = "qmd"

# "directive": the index scans sibling headers when the site is rendered
# "static": the index grid is rendered when pages are generated
index = "directive"

[[section]]
folder = "computational-geometry"

[[section.page]]
title = "KD Tree"
description = "Interactive visualization of KD Tree spatial partitioning and nearest neighbor search."
embed = "https://observablehq.com/embed/@syaleni/kd-tree"
filename = "kd-tree.qmd"

[[section.page]]
title = "Convex Hull"
description = "Interactive convex hull computation and visualization using computational geometry algorithms."
embed = "https://observablehq.com/embed/@syaleni/convex-hull"
filename = "convex-hull.qmd"

[[section.page]]
title = "Evolution"
description = "Computational geometry simulation exploring evolutionary algorithms."
embed = "https://observablehq.com/embed/35699e83a962b637"
filename = "evolution.qmd"

[[section.page]]
title = "Interpolators"
description = "Interactive exploration of interpolation methods and smooth curve generation."
embed = "https://observablehq.com/embed/96edd8bdd7f507a6"
filename = "interpolators.qmd"

[[section.page]]
title = "Parametric Curve Viewer"
description = "Interactive viewer for parametric curves and geometric forms."
embed = "https://observablehq.com/embed/@syaleni/parametric-curve-viewer"
filename = "parametric-curves.qmd"

[[section.page]]
title = "Radial Pattern"
description = "Interactive radial pattern generator using parametric geometry and trigonometric functions."
embed = "https://observablehq.com/embed/@syaleni/radial-pattern"
filename = "radial-patterns.qmd"

[[section.page]]
title = "Random Generatives"
description = "Generative art and randomized computational geometry visualizations."
embed = "https://observablehq.com/embed/65633b1f98ff39d9"
filename = "random-generatives.qmd"

[[section.page]]
title = "Some Circles"
description = "Generative circle patterns using parametric geometry and iterative algorithms."
embed = "https://observablehq.com/embed/@syaleni/some-circles"
filename = "some-circles.qmd"

[[section]]
folder = "creative-coding"

[[section.page]]
title = "Matrix Background"
description = "An animated Matrix-style background effect using canvas and JavaScript."
embed = "https://observablehq.com/embed/a606f84ced79cc40"
filename = "matrix-background.qmd"

[[section.page]]
title = "Click and Delete"
description = "Interactive canvas tool for clicking and deleting elements."
embed = "https://observablehq.com/embed/d06cacfd59717506"
filename = "click-and-delete.qmd"

[[section.page]]
title = "Paint Brush"
description = "Interactive paint brush tool built with canvas and Observable."
embed = "https://observablehq.com/embed/1f430318c59373ce"
filename = "paint-brush.qmd"

[[section.page]]
title = "Snap to Grid"
description = "Interactive snap-to-grid drawing tool."
embed = "https://observablehq.com/embed/8720d260866bb9b8"
filename = "snap-to-grid.qmd"

[[section.page]]
title = "Hatches"
description = "Generative hatch pattern exploration using creative coding techniques."
embed = "https://observablehq.com/embed/@syaleni/hatches"
filename = "hatches.qmd"

[[section.page]]
title = "Mouse Tracker"
description = "Interactive mouse position tracker with visual feedback."
embed = "https://observablehq.com/embed/@syaleni/mouse-tracker"
filename = "mouse-tracker.qmd"

[[section.page]]
title = "SVG Components"
description = "A collection of reusable SVG components and shapes."
embed = "https://observablehq.com/embed/@syaleni/svg-components"
filename = "svg-components.qmd"

[[section]]
folder = "structural-engineering"

[[section.page]]
title = "Mohr's Circle"
description = "Interactive Mohr's Circle for stress transformation and principal stress visualization."
embed = "https://observablehq.com/embed/@syaleni/mohrs-circle"
filename = "mohrs-circle.qmd"

[[section.page]]
title = "Section Properties Calculator"
description = "Interactive calculator for cross-section properties including moment of inertia, centroid, and section modulus."
embed = "https://observablehq.com/embed/@syaleni/section-properties-calculator"
filename = "section-properties.qmd"

[[section.page]]
title = "Analysis of a Simply Supported Beam"
description = "Interactive analysis of a simply supported beam with shear force and bending moment diagrams."
embed = "https://observablehq.com/embed/@syaleni/simply-supported-beam"
filename = "simply-supported-beam.qmd"

[[section.page]]
title = "Flexural Resistance of a Reinforced Concrete Beam"
description = "Interactive calculator for the flexural resistance of reinforced concrete beams per CSA design standards."
embed = "https://observablehq.com/embed/@syaleni/untitled"
filename = "reinforced-concrete-beam.qmd"

[[section.page]]
title = "Glass Panel Load Calculation"
description = "Interactive calculator for glass panel load capacity and thickness design per structural glazing standards."
embed = "https://observablehq.com/embed/94e1b9b15982b882"
filename = "glass-panel.qmd"

[[section.page]]
title = "Structural Wood Panels"
description = "Interactive reference and design tool for structural wood panels and sheathing properties."
embed = "https://observablehq.com/embed/@syaleni/structural-panels"
filename = "structural-wood-panels.qmd"

[[section.page]]
title = "Soil Pressure Coefficients"
description = "Interactive visualization of active and passive soil pressure coefficients using Rankine and Coulomb theories."
embed = "https://observablehq.com/embed/@syaleni/soil-pressure-coefficients"
filename = "soil-pressure-coefficients.qmd"
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigFile;
    use tempfile::tempdir;

    #[test]
    fn default_config_lists_three_sections() {
        let config = ConfigFile::parse(DEFAULT_CONFIG).unwrap();

        let folders: Vec<&str> = config.sections.iter().map(|s| s.folder.as_str()).collect();
        assert_eq!(
            folders,
            vec![
                "computational-geometry",
                "creative-coding",
                "structural-engineering"
            ]
        );
        assert!(config.sections.iter().all(|s| !s.pages.is_empty()));
    }

    #[test]
    fn default_pages_are_valid_records() {
        let config = ConfigFile::parse(DEFAULT_CONFIG).unwrap();
        let sync_config = config.sync_config();

        for section in &config.sections {
            pageset_sync::validate_records(
                &section.pages,
                &sync_config.extension,
                &sync_config.index_name(),
            )
            .unwrap();
        }
    }

    #[test]
    fn keeps_existing_config_without_yes() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("pageset.toml");
        fs::write(&path, "# mine\n").unwrap();

        run(&path, false).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "# mine\n");

        run(&path, true).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
    }
}
