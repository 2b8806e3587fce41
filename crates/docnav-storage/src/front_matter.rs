//! YAML front matter parsing for Markdown pages.
//!
//! A page may start with a `---` delimited YAML block:
//!
//! ```text
//! ---
//! title: Feature
//! description: Plan and build a feature end to end
//! ---
//! # Feature
//! ```
//!
//! Only `title` and `description` are read; other keys are ignored.

use serde::Deserialize;

/// Fields read from front matter.
#[derive(Debug, Default, PartialEq, Eq, Deserialize)]
pub(crate) struct FrontMatter {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Split content into front matter YAML and body.
///
/// Returns `None` for the YAML part if the content does not open with a
/// `---` line or the block is never closed.
pub(crate) fn split_front_matter(content: &str) -> (Option<&str>, &str) {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let Some(rest) = content
        .strip_prefix("---")
        .and_then(|r| r.strip_prefix("\r\n").or_else(|| r.strip_prefix('\n')))
    else {
        return (None, content);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        let marker = line.trim_end_matches(['\r', '\n']);
        if marker == "---" || marker == "..." {
            return (Some(&rest[..offset]), &rest[offset + line.len()..]);
        }
        offset += line.len();
    }

    (None, content)
}

/// Parse front matter YAML. Blank input yields empty fields.
pub(crate) fn parse_front_matter(yaml: &str) -> Result<FrontMatter, serde_yaml::Error> {
    if yaml.trim().is_empty() {
        return Ok(FrontMatter::default());
    }
    serde_yaml::from_str(yaml)
}

/// First level-one ATX heading outside fenced code blocks.
pub(crate) fn extract_h1(body: &str) -> Option<&str> {
    let mut in_fence = false;
    for line in body.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```") || trimmed.starts_with("~~~") {
            in_fence = !in_fence;
            continue;
        }
        if in_fence {
            continue;
        }
        if let Some(heading) = trimmed.strip_prefix("# ") {
            let heading = heading.trim().trim_end_matches('#').trim_end();
            if !heading.is_empty() {
                return Some(heading);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_split_with_front_matter() {
        let content = "---\ntitle: Feature\n---\n# Body\n";

        let (yaml, body) = split_front_matter(content);

        assert_eq!(yaml, Some("title: Feature\n"));
        assert_eq!(body, "# Body\n");
    }

    #[test]
    fn test_split_crlf() {
        let content = "---\r\ntitle: Feature\r\n---\r\nBody";

        let (yaml, body) = split_front_matter(content);

        assert_eq!(yaml, Some("title: Feature\r\n"));
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_split_without_front_matter() {
        let content = "# Just a page\n";

        assert_eq!(split_front_matter(content), (None, content));
    }

    #[test]
    fn test_split_unterminated_is_body() {
        let content = "---\ntitle: Feature\n# Body\n";

        assert_eq!(split_front_matter(content), (None, content));
    }

    #[test]
    fn test_split_empty_block() {
        let (yaml, body) = split_front_matter("---\n---\nBody");

        assert_eq!(yaml, Some(""));
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_split_horizontal_rule_later_is_not_front_matter() {
        let content = "Intro\n---\nMore";

        assert_eq!(split_front_matter(content), (None, content));
    }

    #[test]
    fn test_parse_fields_and_ignores_others() {
        let yaml = "title: \"Feature\"\ndescription: >\n  Plan and build\n  a feature\nsidebar:\n  order: 2\n";

        let fm = parse_front_matter(yaml).unwrap();

        assert_eq!(fm.title.as_deref(), Some("Feature"));
        assert_eq!(fm.description.as_deref(), Some("Plan and build a feature\n"));
    }

    #[test]
    fn test_parse_blank_is_default() {
        assert_eq!(parse_front_matter("  \n").unwrap(), FrontMatter::default());
    }

    #[test]
    fn test_parse_invalid_yaml() {
        assert!(parse_front_matter("title: [unclosed").is_err());
    }

    #[test]
    fn test_extract_h1() {
        assert_eq!(extract_h1("Intro\n\n# Title #\n## Sub"), Some("Title"));
        assert_eq!(extract_h1("## Only h2"), None);
        assert_eq!(extract_h1("#NoSpace"), None);
    }

    #[test]
    fn test_extract_h1_skips_code_fences() {
        let body = "```bash\n# not a heading\n```\n# Real\n";

        assert_eq!(extract_h1(body), Some("Real"));
    }
}
