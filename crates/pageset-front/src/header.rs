//! Header block extraction and parsing.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

/// Matches a `---` delimited block at the very start of a document.
static HEADER_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\A---\n(.*?)\n---").expect("valid header regex"));

/// Key holding the page title.
pub const TITLE_KEY: &str = "pagetitle";

/// Key holding the page description.
pub const DESCRIPTION_KEY: &str = "description";

/// Parsed header of a generated document.
///
/// Keys are flattened: nested option lines such as `  toc: false` are stored
/// under their trimmed key like any top-level line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    fields: BTreeMap<String, String>,
}

impl Header {
    /// Look up a raw field value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Page title, empty when absent.
    pub fn title(&self) -> &str {
        self.get(TITLE_KEY).unwrap_or("")
    }

    /// Page description, empty when absent.
    pub fn description(&self) -> &str {
        self.get(DESCRIPTION_KEY).unwrap_or("")
    }

    /// Whether the header carries a non-empty title.
    pub fn has_title(&self) -> bool {
        !self.title().is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

/// Extract the header block from a document.
///
/// Returns the parsed header and the body after the closing marker, or
/// `None` when the document does not start with a header block.
pub fn extract_header(source: &str) -> Option<(Header, &str)> {
    let captures = HEADER_BLOCK.captures(source)?;
    let block = captures.get(1).map_or("", |m| m.as_str());
    let end = captures.get(0).map_or(0, |m| m.end());

    let mut fields = BTreeMap::new();
    for line in block.split('\n') {
        // Lines without a colon carry no field
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        fields.insert(
            key.trim().to_string(),
            value.trim().trim_matches('"').to_string(),
        );
    }

    Some((Header { fields }, source[end..].trim_start()))
}

/// Parse the header of a document, treating a missing block as empty.
pub fn parse_header(source: &str) -> Header {
    extract_header(source)
        .map(|(header, _)| header)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn extracts_quoted_fields() {
        let source = r#"---
pagetitle: "KD Tree"
description: "Spatial partitioning: nearest neighbours."
format:
  html:
    toc: false
---

<div class="observable-embed"></div>
"#;

        let (header, body) = extract_header(source).unwrap();

        assert_eq!(header.title(), "KD Tree");
        assert_eq!(
            header.description(),
            "Spatial partitioning: nearest neighbours."
        );
        assert_eq!(header.get("toc"), Some("false"));
        assert_eq!(header.get("format"), Some(""));
        assert!(body.starts_with("<div class=\"observable-embed\">"));
    }

    #[test]
    fn handles_no_header() {
        let source = "# Just Markdown\n\nNo header here.";

        assert!(extract_header(source).is_none());
        assert!(parse_header(source).is_empty());
    }

    #[test]
    fn requires_header_at_start() {
        let source = "\n---\npagetitle: \"Late\"\n---\n";

        assert!(parse_header(source).is_empty());
    }

    #[test]
    fn unclosed_header_is_empty() {
        let source = "---\npagetitle: \"Open\"\nno closing marker";

        let header = parse_header(source);

        assert!(header.is_empty());
        assert!(!header.has_title());
    }

    #[test]
    fn missing_title_reads_as_empty() {
        let header = parse_header("---\ndescription: \"Only a description\"\n---\n");

        assert_eq!(header.title(), "");
        assert!(!header.has_title());
        assert_eq!(header.description(), "Only a description");
        assert_eq!(header.len(), 1);
    }

    #[test]
    fn later_keys_override_earlier() {
        let header = parse_header("---\npagetitle: First\npagetitle: \"Second\"\n---");

        assert_eq!(header.title(), "Second");
    }

    #[test]
    fn unquoted_values_are_trimmed() {
        let header = parse_header("---\npagetitle:   Plain Title  \n---\n");

        assert_eq!(header.title(), "Plain Title");
    }
}
