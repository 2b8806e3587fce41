//! Validated site: registry plus navigation tree.
//!
//! [`Site`] is what a renderer consumes. It can only be obtained through
//! [`Site::build`], so every leaf in its tree resolves to a registered page.

use serde::Serialize;

use crate::navigation::{GroupingSpecification, MalformedSpecificationError, NavigationNode, build};
use crate::registry::{Page, PageRegistry};
use crate::validation::{OrphanPolicy, ValidationError, ValidationReport};

/// Error building a [`Site`].
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// The navigation specification has an invalid shape.
    #[error(transparent)]
    Malformed(#[from] MalformedSpecificationError),
    /// Validation found blocking problems. The report holds every diagnostic.
    #[error("Navigation has {} blocking problem(s)", .0.errors.len())]
    Invalid(ValidationReport),
}

/// Sidebar entry prepared for rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Display label.
    pub label: String,
    /// Linked page (leaves only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Linked page description (leaves only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Initial collapsed state (sections only).
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub collapsed: bool,
    /// Child entries.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavItem>,
}

/// Full sidebar for the renderer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Navigation {
    /// Root label, if the layout set one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Top-level entries.
    pub items: Vec<NavItem>,
}

/// Registry and navigation tree that passed validation.
///
/// Immutable after construction; safe to share between threads.
#[derive(Debug)]
pub struct Site {
    registry: PageRegistry,
    tree: NavigationNode,
}

impl Site {
    /// Build the tree, validate it against the registry and assemble the site.
    ///
    /// On success returns the site together with the non-blocking warnings
    /// (orphan pages under [`OrphanPolicy::Warn`]).
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Malformed`] if the navigation layout has an invalid
    /// shape, or [`SiteError::Invalid`] with the full report if validation
    /// found blocking problems.
    pub fn build(
        registry: PageRegistry,
        spec: &GroupingSpecification,
        policy: OrphanPolicy,
    ) -> Result<(Self, Vec<ValidationError>), SiteError> {
        let tree = build(spec)?;
        let report = ValidationReport::check(&tree, &registry, policy);

        for warning in &report.warnings {
            tracing::warn!(slug = %warning.slug(), "{warning}");
        }

        if report.is_fatal() {
            return Err(SiteError::Invalid(report));
        }

        tracing::info!(
            pages = registry.len(),
            warnings = report.warnings.len(),
            "Site validated"
        );

        Ok((Self { registry, tree }, report.warnings))
    }

    /// Page by slug.
    #[must_use]
    pub fn page(&self, slug: &str) -> Option<&Page> {
        self.registry.lookup(slug)
    }

    /// All registered pages.
    #[must_use]
    pub fn registry(&self) -> &PageRegistry {
        &self.registry
    }

    /// Root of the navigation tree.
    #[must_use]
    pub fn tree(&self) -> &NavigationNode {
        &self.tree
    }

    /// Sidebar with page descriptions filled in.
    #[must_use]
    pub fn navigation(&self) -> Navigation {
        let label = Some(self.tree.label()).filter(|l| !l.is_empty());

        Navigation {
            label: label.map(str::to_owned),
            items: self
                .tree
                .children()
                .iter()
                .map(|node| self.nav_item(node))
                .collect(),
        }
    }

    fn nav_item(&self, node: &NavigationNode) -> NavItem {
        match node {
            NavigationNode::Section {
                label,
                collapsed,
                children,
            } => NavItem {
                label: label.clone(),
                slug: None,
                description: None,
                collapsed: *collapsed,
                children: children.iter().map(|c| self.nav_item(c)).collect(),
            },
            NavigationNode::Leaf { label, target_slug } => NavItem {
                label: label.clone(),
                slug: Some(target_slug.clone()),
                description: self
                    .registry
                    .lookup(target_slug)
                    .and_then(|page| page.description.clone()),
                collapsed: false,
                children: Vec::new(),
            },
        }
    }

    /// Labels of the sections enclosing the first leaf that links `slug`.
    ///
    /// Returns an empty list if the page is linked at top level or not linked.
    #[must_use]
    pub fn breadcrumbs(&self, slug: &str) -> Vec<&str> {
        let mut trail = Vec::new();
        for child in self.tree.children() {
            if find_trail(child, slug, &mut trail) {
                return trail;
            }
        }
        Vec::new()
    }
}

/// Depth-first search for `slug`, leaving the enclosing section labels in `trail`.
fn find_trail<'t>(node: &'t NavigationNode, slug: &str, trail: &mut Vec<&'t str>) -> bool {
    match node {
        NavigationNode::Leaf { target_slug, .. } => target_slug == slug,
        NavigationNode::Section {
            label, children, ..
        } => {
            trail.push(label);
            if children.iter().any(|c| find_trail(c, slug, trail)) {
                return true;
            }
            trail.pop();
            false
        }
    }
}
