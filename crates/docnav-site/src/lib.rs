//! Page registry, navigation tree and consistency checks for docnav.
//!
//! This crate provides:
//! - [`PageRegistry`]: slug to [`Page`] mapping with duplicate detection
//! - [`build`]: [`GroupingSpecification`] to [`NavigationNode`] tree
//! - [`validate`]: dangling-link and orphan-page detection
//! - [`Site`]: validated registry and tree, ready for rendering
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use docnav_site::{GroupingSpecification, OrphanPolicy, Page, PageRegistry, Site, SpecNode};
//!
//! let registry = PageRegistry::from_pages([
//!     Page::new("commands/feature", "Feature"),
//!     Page::new("commands/review", "Review"),
//! ])?;
//! let spec = GroupingSpecification::new(vec![SpecNode::section(
//!     "Commands",
//!     vec![
//!         SpecNode::leaf("Feature", "commands/feature"),
//!         SpecNode::leaf("Review", "commands/review"),
//!     ],
//! )]);
//!
//! let (site, warnings) = Site::build(registry, &spec, OrphanPolicy::Warn)?;
//! assert!(warnings.is_empty());
//! assert_eq!(site.breadcrumbs("commands/review"), vec!["Commands"]);
//! # Ok(())
//! # }
//! ```

mod navigation;
mod registry;
mod site;
mod validation;

pub use navigation::{
    GroupingSpecification, MalformedKind, MalformedSpecificationError, NavigationNode,
    SpecLoadError, SpecNode, build,
};
pub use registry::{Page, PageRegistry, RegistryError};
pub use site::{NavItem, Navigation, Site, SiteError};
pub use validation::{OrphanPolicy, Severity, ValidationError, ValidationReport, validate};
