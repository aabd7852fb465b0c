//! Fixed templates for generated documents.

use minijinja::{context, Environment};

use crate::grid::GridEntry;
use crate::record::PageRecord;

/// Inline style of the grid container.
pub const GRID_STYLE: &str = "display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 2rem; margin-top: 2rem;";

/// Inline style of one grid card.
pub const CARD_STYLE: &str = "text-decoration: none; color: inherit; border: 1px solid #ddd; border-radius: 8px; padding: 2rem; display: block;";

/// Inline style of a card title.
pub const CARD_TITLE_STYLE: &str = "font-size: 1.3rem; font-weight: bold; margin-bottom: 0.5rem;";

/// Template engine using minijinja.
///
/// Templates ending in `.qmd` are rendered verbatim; `grid.html` is
/// HTML-escaped.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the built-in templates.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);

        env.add_template("page.qmd", PAGE_TEMPLATE)
            .expect("Failed to add page template");
        env.add_template("index_directive.qmd", INDEX_DIRECTIVE_TEMPLATE)
            .expect("Failed to add index directive template");
        env.add_template("index_static.qmd", INDEX_STATIC_TEMPLATE)
            .expect("Failed to add static index template");
        env.add_template("grid.html", GRID_TEMPLATE)
            .expect("Failed to add grid template");

        Self { env }
    }

    /// Render the document for a single page record.
    pub fn render_page(&self, record: &PageRecord) -> Result<String, minijinja::Error> {
        self.env.get_template("page.qmd")?.render(context! {
            title => &record.title,
            description => &record.description,
            src => record.embed_src(),
        })
    }

    /// Render an index whose grid is built when the site is rendered.
    pub fn render_index_directive(
        &self,
        extension: &str,
        index_name: &str,
    ) -> Result<String, minijinja::Error> {
        self.env.get_template("index_directive.qmd")?.render(context! {
            suffix => format!(".{}", extension),
            index_name => index_name,
            grid_style => GRID_STYLE,
            card_style => CARD_STYLE,
            title_style => CARD_TITLE_STYLE,
        })
    }

    /// Render an index embedding an already rendered grid.
    pub fn render_index_static(&self, grid: &str) -> Result<String, minijinja::Error> {
        self.env
            .get_template("index_static.qmd")?
            .render(context! { grid => grid })
    }

    /// Render the link grid for a set of entries.
    pub fn render_grid(&self, entries: &[GridEntry]) -> Result<String, minijinja::Error> {
        self.env.get_template("grid.html")?.render(context! {
            entries => entries,
            grid_style => GRID_STYLE,
            card_style => CARD_STYLE,
            title_style => CARD_TITLE_STYLE,
        })
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

const PAGE_TEMPLATE: &str = r##"---
pagetitle: "{{ title }}"
description: "{{ description }}"
format:
  html:
    toc: false
    title-block-banner: false
---

<div class="observable-embed">
  <iframe
    src="{{ src }}"
    allow="cross-origin-isolated">
  </iframe>
</div>
"##;

const INDEX_DIRECTIVE_TEMPLATE: &str = concat!(
    "---\nformat:\n  html:\n    toc: false\n---\n",
    r##"
```{python}
#| echo: false
#| output: asis
import os
import re

def get_frontmatter(filepath):
    with open(filepath, "r", encoding="utf-8") as f:
        content = f.read()
    match = re.match(r"^---\n(.*?)\n---", content, re.DOTALL)
    if not match:
        return {}
    fm = {}
    for line in match.group(1).split("\n"):
        if ":" in line:
            key, _, value = line.partition(":")
            fm[key.strip()] = value.strip().strip('"')
    return fm

folder = os.getcwd()
pages = []

for fname in sorted(os.listdir(folder)):
    if fname.endswith("{{ suffix }}") and fname != "{{ index_name }}":
        fm = get_frontmatter(os.path.join(folder, fname))
        title = fm.get("pagetitle", "")
        description = fm.get("description", "")
        if not title:
            continue
        pages.append((title, description, fname))

html = '<div style="{{ grid_style }}">'
for title, description, link in pages:
    html += f'<a href="{link}" style="{{ card_style }}"><div style="{{ title_style }}">{title}</div><div>{description}</div></a>'
html += "</div>"

print(html)
```
"##
);

const INDEX_STATIC_TEMPLATE: &str = concat!(
    "---\nformat:\n  html:\n    toc: false\n---\n",
    r##"
```{=html}
{{ grid }}
```
"##
);

const GRID_TEMPLATE: &str = r##"<div style="{{ grid_style }}">
{%- for entry in entries %}<a href="{{ entry.href }}" style="{{ card_style }}"><div style="{{ title_style }}">{{ entry.title }}</div><div>{{ entry.description }}</div></a>
{%- endfor %}</div>"##;
