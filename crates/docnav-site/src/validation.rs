//! Cross-reference checks between the navigation tree and the registry.
//!
//! Two passes, both read-only:
//! 1. Dangling links: pre-order walk of the tree, every leaf whose slug is
//!    not registered.
//! 2. Orphan pages: every registered slug that no leaf points at.
//!
//! All problems are collected so a single run reports everything.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::navigation::NavigationNode;
use crate::registry::PageRegistry;

/// How serious a diagnostic is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks publishing.
    Error,
    /// Reported but does not block publishing.
    Warning,
}

/// Whether orphan pages block publishing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrphanPolicy {
    /// Orphans are warnings.
    #[default]
    Warn,
    /// Orphans are errors.
    Deny,
}

/// Structural problem found by [`validate`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationError {
    /// Leaf links to a slug that is not registered.
    #[error("Dangling link to '{slug}' at {}", PathDisplay(.path))]
    DanglingLink {
        /// Missing slug.
        slug: String,
        /// Labels from the top-level entry down to the leaf.
        path: Vec<String>,
    },
    /// Registered page that no leaf links to.
    #[error("Orphan page '{slug}' is not linked from the navigation")]
    OrphanPage {
        /// Unreferenced slug.
        slug: String,
    },
}

impl ValidationError {
    /// Default severity: dangling links are errors, orphans are warnings.
    #[must_use]
    pub fn severity(&self) -> Severity {
        match self {
            Self::DanglingLink { .. } => Severity::Error,
            Self::OrphanPage { .. } => Severity::Warning,
        }
    }

    /// Severity after applying the orphan policy.
    #[must_use]
    pub fn severity_with(&self, policy: OrphanPolicy) -> Severity {
        match (self, policy) {
            (Self::OrphanPage { .. }, OrphanPolicy::Deny) => Severity::Error,
            _ => self.severity(),
        }
    }

    /// The slug the diagnostic is about.
    #[must_use]
    pub fn slug(&self) -> &str {
        match self {
            Self::DanglingLink { slug, .. } | Self::OrphanPage { slug } => slug,
        }
    }
}

struct PathDisplay<'a>(&'a [String]);

impl fmt::Display for PathDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" > "))
    }
}

/// Check a navigation tree against a registry.
///
/// Dangling links are reported in pre-order, left-to-right; orphans follow,
/// sorted by slug. The root node's own label is not part of any path.
///
/// # Errors
///
/// Returns every [`ValidationError`] found if there is at least one.
pub fn validate(tree: &NavigationNode, registry: &PageRegistry) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut reached = HashSet::new();
    let mut path = Vec::new();

    for child in tree.children() {
        check_links(child, registry, &mut path, &mut reached, &mut errors);
    }
    // A bare leaf as root still counts.
    if let NavigationNode::Leaf { .. } = tree {
        check_links(tree, registry, &mut path, &mut reached, &mut errors);
    }

    let mut orphans: Vec<&str> = registry
        .slugs()
        .filter(|slug| !reached.contains(*slug))
        .collect();
    orphans.sort_unstable();
    errors.extend(orphans.into_iter().map(|slug| ValidationError::OrphanPage {
        slug: slug.to_owned(),
    }));

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Pre-order dangling-link pass, recording every slug reached.
fn check_links<'t>(
    node: &'t NavigationNode,
    registry: &PageRegistry,
    path: &mut Vec<String>,
    reached: &mut HashSet<&'t str>,
    errors: &mut Vec<ValidationError>,
) {
    path.push(node.label().to_owned());

    match node {
        NavigationNode::Leaf { target_slug, .. } => {
            reached.insert(target_slug.as_str());
            if !registry.contains(target_slug) {
                errors.push(ValidationError::DanglingLink {
                    slug: target_slug.clone(),
                    path: path.clone(),
                });
            }
        }
        NavigationNode::Section { children, .. } => {
            for child in children {
                check_links(child, registry, path, reached, errors);
            }
        }
    }

    path.pop();
}

/// Diagnostics split by severity under an [`OrphanPolicy`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Diagnostics that block publishing.
    pub errors: Vec<ValidationError>,
    /// Diagnostics that are only reported.
    pub warnings: Vec<ValidationError>,
}

impl ValidationReport {
    /// Split diagnostics, preserving their order within each list.
    #[must_use]
    pub fn from_errors(diagnostics: Vec<ValidationError>, policy: OrphanPolicy) -> Self {
        let (errors, warnings) = diagnostics
            .into_iter()
            .partition(|d| d.severity_with(policy) == Severity::Error);
        Self { errors, warnings }
    }

    /// Run [`validate`] and split its output.
    #[must_use]
    pub fn check(tree: &NavigationNode, registry: &PageRegistry, policy: OrphanPolicy) -> Self {
        match validate(tree, registry) {
            Ok(()) => Self::default(),
            Err(diagnostics) => Self::from_errors(diagnostics, policy),
        }
    }

    /// True if anything blocks publishing.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        !self.errors.is_empty()
    }

    /// True if there is nothing to report at all.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}
