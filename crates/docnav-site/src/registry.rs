//! Content registry mapping slugs to pages.
//!
//! The registry is the single owner of every [`Page`] on the site. It is
//! filled once at build time and read-only afterwards; navigation leaves
//! refer to pages by slug only.
//!
//! # Slug Convention
//!
//! Slugs are URL paths without leading or trailing slash:
//! - `""` - site root (`index.md`)
//! - `"commands"` - top-level page
//! - `"commands/feature"` - nested page

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single documentation topic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Unique URL-path-shaped identifier (e.g., "getting-started/installation").
    pub slug: String,
    /// Display title.
    pub title: String,
    /// Optional summary shown next to the link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Page {
    /// Create a page without a description.
    #[must_use]
    pub fn new(slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            description: None,
        }
    }

    /// Attach a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Error returned when a page cannot be registered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// A page with the same slug is already registered.
    #[error("Duplicate slug: '{slug}' is already registered")]
    DuplicateSlug {
        /// The conflicting slug.
        slug: String,
    },
    /// The slug is not URL-path-shaped.
    #[error("Invalid slug '{slug}': {reason}")]
    InvalidSlug {
        /// The rejected slug.
        slug: String,
        /// What is wrong with it.
        reason: &'static str,
    },
}

/// Mapping from slug to [`Page`].
///
/// Insertion order carries no meaning. Lookups are O(1).
#[derive(Debug, Default)]
pub struct PageRegistry {
    pages: HashMap<String, Page>,
}

impl PageRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a sequence of pages.
    ///
    /// Stops at the first page that cannot be registered.
    pub fn from_pages(pages: impl IntoIterator<Item = Page>) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for page in pages {
            registry.register(page)?;
        }
        Ok(registry)
    }

    /// Register a page.
    ///
    /// Rejection is atomic: on error the registry is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateSlug`] if the slug is already present,
    /// or [`RegistryError::InvalidSlug`] if the slug is malformed.
    pub fn register(&mut self, page: Page) -> Result<(), RegistryError> {
        check_slug(&page.slug)?;

        if self.pages.contains_key(&page.slug) {
            return Err(RegistryError::DuplicateSlug { slug: page.slug });
        }

        tracing::debug!(slug = %page.slug, title = %page.title, "Registered page");
        self.pages.insert(page.slug.clone(), page);
        Ok(())
    }

    /// Look up a page by slug.
    #[must_use]
    pub fn lookup(&self, slug: &str) -> Option<&Page> {
        self.pages.get(slug)
    }

    /// Check whether a slug is registered.
    #[must_use]
    pub fn contains(&self, slug: &str) -> bool {
        self.pages.contains_key(slug)
    }

    /// Iterate over all registered slugs in arbitrary order.
    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.pages.keys().map(String::as_str)
    }

    /// Number of registered pages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// True if no pages are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

/// Reject slugs that cannot be used as URL paths.
fn check_slug(slug: &str) -> Result<(), RegistryError> {
    let reason = if slug.starts_with('/') || slug.ends_with('/') {
        Some("must not start or end with '/'")
    } else if slug.contains("//") {
        Some("must not contain empty path segments")
    } else if slug.chars().any(char::is_whitespace) {
        Some("must not contain whitespace")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(RegistryError::InvalidSlug {
            slug: slug.to_owned(),
            reason,
        }),
        None => Ok(()),
    }
}
