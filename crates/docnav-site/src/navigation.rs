//! Navigation tree building.
//!
//! A [`GroupingSpecification`] is the declarative sidebar description as
//! authored in `navigation.yaml`:
//!
//! ```yaml
//! items:
//!   - label: Getting Started
//!     items:
//!       - { label: Installation, slug: getting-started/installation }
//!   - label: Commands
//!     collapsed: true
//!     items:
//!       - { label: Feature, slug: commands/feature }
//! ```
//!
//! [`build`] turns it into a [`NavigationNode`] tree. Shape is checked here;
//! whether slugs exist is checked later by [`validate`](crate::validate).

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

/// Declarative navigation layout.
///
/// The root behaves like a section: it must have at least one item.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroupingSpecification {
    /// Optional label for the root section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Top-level entries in display order.
    #[serde(default)]
    pub items: Vec<SpecNode>,
}

impl GroupingSpecification {
    /// Create a specification from top-level items.
    #[must_use]
    pub fn new(items: Vec<SpecNode>) -> Self {
        Self { label: None, items }
    }

    /// Parse a specification from YAML.
    pub fn from_yaml_str(content: &str) -> Result<Self, SpecLoadError> {
        Ok(serde_yaml::from_str(content)?)
    }
}

/// One raw entry of a [`GroupingSpecification`].
///
/// Every field is optional at this level so that authoring mistakes are
/// reported by [`build`] with a location rather than as a parse error.
/// Sections carry `items`; leaves carry `slug`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpecNode {
    /// Display label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Initial collapsed state (sections only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
    /// Target page (leaves only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Child entries (sections only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<SpecNode>>,
}

impl SpecNode {
    /// Section entry with the given children.
    #[must_use]
    pub fn section(label: impl Into<String>, items: Vec<SpecNode>) -> Self {
        Self {
            label: Some(label.into()),
            items: Some(items),
            ..Self::default()
        }
    }

    /// Leaf entry pointing at `slug`.
    #[must_use]
    pub fn leaf(label: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            slug: Some(slug.into()),
            ..Self::default()
        }
    }

    /// Set the collapsed flag.
    #[must_use]
    pub fn collapsed(mut self, collapsed: bool) -> Self {
        self.collapsed = Some(collapsed);
        self
    }
}

/// Entry in the built sidebar tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum NavigationNode {
    /// Labelled group of child entries.
    Section {
        /// Display label.
        label: String,
        /// Whether the section starts collapsed.
        collapsed: bool,
        /// Children in declared order.
        children: Vec<NavigationNode>,
    },
    /// Link to a single page.
    Leaf {
        /// Display label.
        label: String,
        /// Slug of the linked page. Not resolved until validation.
        target_slug: String,
    },
}

impl NavigationNode {
    /// Display label of this node.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Section { label, .. } | Self::Leaf { label, .. } => label,
        }
    }

    /// Children of a section; empty for leaves.
    #[must_use]
    pub fn children(&self) -> &[NavigationNode] {
        match self {
            Self::Section { children, .. } => children,
            Self::Leaf { .. } => &[],
        }
    }

    /// Target slug of a leaf; `None` for sections.
    #[must_use]
    pub fn target_slug(&self) -> Option<&str> {
        match self {
            Self::Section { .. } => None,
            Self::Leaf { target_slug, .. } => Some(target_slug),
        }
    }
}

/// What is wrong with a malformed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MalformedKind {
    /// Section (or the root) has no items.
    #[error("section has no items")]
    EmptySection,
    /// Entry has no label or a blank one.
    #[error("entry has no label")]
    MissingLabel,
    /// Entry has neither `slug` nor `items`.
    #[error("entry needs either `slug` or `items`")]
    MissingTarget,
    /// Entry has both `slug` and `items`.
    #[error("entry cannot have both `slug` and `items`")]
    AmbiguousNode,
    /// Leaf sets `collapsed`.
    #[error("`collapsed` is only valid on sections")]
    CollapsedLeaf,
}

/// Authoring mistake in a [`GroupingSpecification`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Malformed navigation at {location}: {kind}")]
pub struct MalformedSpecificationError {
    /// Index path of the offending entry (e.g., `items[1].items[0]`, or `root`).
    pub location: String,
    /// What is wrong.
    pub kind: MalformedKind,
}

/// Error loading a navigation file.
#[derive(Debug, thiserror::Error)]
pub enum SpecLoadError {
    /// YAML syntax error or unknown field.
    #[error("Invalid navigation file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Build a navigation tree from its declarative specification.
///
/// The returned root is a [`NavigationNode::Section`] labelled with the
/// specification's label (empty if unset) and never collapsed. Child order
/// matches declaration order at every level. Slugs are not resolved.
///
/// # Errors
///
/// Returns [`MalformedSpecificationError`] for the first entry (in pre-order)
/// with an invalid shape.
pub fn build(spec: &GroupingSpecification) -> Result<NavigationNode, MalformedSpecificationError> {
    if spec.items.is_empty() {
        return Err(MalformedSpecificationError {
            location: "root".to_owned(),
            kind: MalformedKind::EmptySection,
        });
    }

    let children = build_children(&spec.items, "")?;
    tracing::debug!(entries = children.len(), "Built navigation tree");

    Ok(NavigationNode::Section {
        label: spec.label.clone().unwrap_or_default(),
        collapsed: false,
        children,
    })
}

fn build_children(
    items: &[SpecNode],
    parent_location: &str,
) -> Result<Vec<NavigationNode>, MalformedSpecificationError> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let mut location = parent_location.to_owned();
            if !location.is_empty() {
                location.push('.');
            }
            let _ = write!(location, "items[{i}]");
            build_node(item, &location)
        })
        .collect()
}

fn build_node(node: &SpecNode, location: &str) -> Result<NavigationNode, MalformedSpecificationError> {
    let fail = |kind| {
        Err(MalformedSpecificationError {
            location: location.to_owned(),
            kind,
        })
    };

    let Some(label) = node.label.as_deref().filter(|l| !l.trim().is_empty()) else {
        return fail(MalformedKind::MissingLabel);
    };

    match (&node.slug, &node.items) {
        (Some(_), Some(_)) => fail(MalformedKind::AmbiguousNode),
        (None, None) => fail(MalformedKind::MissingTarget),
        (None, Some(items)) if items.is_empty() => fail(MalformedKind::EmptySection),
        (None, Some(items)) => Ok(NavigationNode::Section {
            label: label.to_owned(),
            collapsed: node.collapsed.unwrap_or(false),
            children: build_children(items, location)?,
        }),
        (Some(_), None) if node.collapsed.is_some() => fail(MalformedKind::CollapsedLeaf),
        (Some(slug), None) => Ok(NavigationNode::Leaf {
            label: label.to_owned(),
            target_slug: slug.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn labels(nodes: &[NavigationNode]) -> Vec<&str> {
        nodes.iter().map(NavigationNode::label).collect()
    }

    #[test]
    fn test_build_single_leaf() {
        let spec = GroupingSpecification::new(vec![SpecNode::leaf("Home", "")]);

        let tree = build(&spec).unwrap();

        assert_eq!(
            tree,
            NavigationNode::Section {
                label: String::new(),
                collapsed: false,
                children: vec![NavigationNode::Leaf {
                    label: "Home".to_owned(),
                    target_slug: String::new(),
                }],
            }
        );
    }

    #[test]
    fn test_build_preserves_declared_order() {
        let spec = GroupingSpecification::new(vec![
            SpecNode::section(
                "Commands",
                vec![
                    SpecNode::leaf("Review", "commands/review"),
                    SpecNode::leaf("Feature", "commands/feature"),
                    SpecNode::leaf("Debug", "commands/debug"),
                ],
            ),
            SpecNode::section(
                "Agents",
                vec![
                    SpecNode::leaf("Planner", "agents/planner"),
                    SpecNode::leaf("Architect", "agents/architect"),
                ],
            ),
        ]);

        let tree = build(&spec).unwrap();

        assert_eq!(labels(tree.children()), vec!["Commands", "Agents"]);
        assert_eq!(
            labels(tree.children()[0].children()),
            vec!["Review", "Feature", "Debug"]
        );
        assert_eq!(
            labels(tree.children()[1].children()),
            vec!["Planner", "Architect"]
        );
        assert_eq!(
            tree.children()[1].children()[1].target_slug(),
            Some("agents/architect")
        );
    }

    #[test]
    fn test_build_collapsed_flag() {
        let spec = GroupingSpecification::new(vec![
            SpecNode::section("Open", vec![SpecNode::leaf("A", "a")]),
            SpecNode::section("Closed", vec![SpecNode::leaf("B", "b")]).collapsed(true),
        ]);

        let tree = build(&spec).unwrap();

        assert!(matches!(
            &tree.children()[0],
            NavigationNode::Section { collapsed: false, .. }
        ));
        assert!(matches!(
            &tree.children()[1],
            NavigationNode::Section { collapsed: true, .. }
        ));
    }

    #[test]
    fn test_build_uses_root_label() {
        let spec = GroupingSpecification {
            label: Some("Docs".to_owned()),
            items: vec![SpecNode::leaf("A", "a")],
        };

        let tree = build(&spec).unwrap();

        assert_eq!(tree.label(), "Docs");
    }

    #[test]
    fn test_empty_root_is_malformed() {
        let err = build(&GroupingSpecification::default()).unwrap_err();

        assert_eq!(err.location, "root");
        assert_eq!(err.kind, MalformedKind::EmptySection);
    }

    #[test]
    fn test_empty_section_is_malformed() {
        let spec = GroupingSpecification::new(vec![SpecNode::section("Empty", Vec::new())]);

        let err = build(&spec).unwrap_err();

        assert_eq!(err.location, "items[0]");
        assert_eq!(err.kind, MalformedKind::EmptySection);
    }

    #[test]
    fn test_nested_error_reports_location() {
        let spec = GroupingSpecification::new(vec![
            SpecNode::leaf("A", "a"),
            SpecNode::section(
                "Group",
                vec![
                    SpecNode::leaf("B", "b"),
                    SpecNode {
                        slug: Some("c".to_owned()),
                        ..SpecNode::default()
                    },
                ],
            ),
        ]);

        let err = build(&spec).unwrap_err();

        assert_eq!(err.location, "items[1].items[1]");
        assert_eq!(err.kind, MalformedKind::MissingLabel);
        assert_eq!(
            err.to_string(),
            "Malformed navigation at items[1].items[1]: entry has no label"
        );
    }

    #[test]
    fn test_blank_label_is_missing() {
        let spec = GroupingSpecification::new(vec![SpecNode::leaf("   ", "a")]);

        assert_eq!(build(&spec).unwrap_err().kind, MalformedKind::MissingLabel);
    }

    #[test]
    fn test_entry_without_slug_or_items() {
        let spec = GroupingSpecification::new(vec![SpecNode {
            label: Some("Nothing".to_owned()),
            ..SpecNode::default()
        }]);

        assert_eq!(build(&spec).unwrap_err().kind, MalformedKind::MissingTarget);
    }

    #[test]
    fn test_entry_with_slug_and_items() {
        let mut node = SpecNode::section("Both", vec![SpecNode::leaf("A", "a")]);
        node.slug = Some("both".to_owned());
        let spec = GroupingSpecification::new(vec![node]);

        assert_eq!(build(&spec).unwrap_err().kind, MalformedKind::AmbiguousNode);
    }

    #[test]
    fn test_collapsed_leaf_is_malformed() {
        let spec = GroupingSpecification::new(vec![SpecNode::leaf("A", "a").collapsed(true)]);

        assert_eq!(build(&spec).unwrap_err().kind, MalformedKind::CollapsedLeaf);
    }

    #[test]
    fn test_build_does_not_mutate_input() {
        let spec = GroupingSpecification::new(vec![SpecNode::section(
            "S",
            vec![SpecNode::leaf("A", "a")],
        )]);
        let before = spec.clone();

        build(&spec).unwrap();

        assert_eq!(spec, before);
    }

    #[test]
    fn test_from_yaml_str() {
        let yaml = r"
label: Docs
items:
  - label: Getting Started
    items:
      - label: Installation
        slug: getting-started/installation
  - label: Commands
    collapsed: true
    items:
      - { label: Feature, slug: commands/feature }
      - { label: Review, slug: commands/review }
";

        let spec = GroupingSpecification::from_yaml_str(yaml).unwrap();
        let tree = build(&spec).unwrap();

        assert_eq!(tree.label(), "Docs");
        assert_eq!(labels(tree.children()), vec!["Getting Started", "Commands"]);
        assert_eq!(
            tree.children()[1],
            NavigationNode::Section {
                label: "Commands".to_owned(),
                collapsed: true,
                children: vec![
                    NavigationNode::Leaf {
                        label: "Feature".to_owned(),
                        target_slug: "commands/feature".to_owned(),
                    },
                    NavigationNode::Leaf {
                        label: "Review".to_owned(),
                        target_slug: "commands/review".to_owned(),
                    },
                ],
            }
        );
    }

    #[test]
    fn test_from_yaml_str_rejects_unknown_field() {
        let yaml = "items:\n  - label: A\n    itmes: []\n";

        let err = GroupingSpecification::from_yaml_str(yaml).unwrap_err();

        assert!(err.to_string().contains("itmes"));
    }

    #[test]
    fn test_node_serializes_with_kind_tag() {
        let node = NavigationNode::Leaf {
            label: "A".to_owned(),
            target_slug: "a".to_owned(),
        };

        let json = serde_json::to_value(&node).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"kind": "leaf", "label": "A", "target_slug": "a"})
        );
    }
}
