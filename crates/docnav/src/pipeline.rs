//! Scan, register, build and validate.

use std::path::Path;

use docnav_site::{
    GroupingSpecification, OrphanPolicy, Page, PageRegistry, Site, ValidationError,
};
use docnav_storage::{Document, Storage};

use crate::error::CliError;

/// Site that passed validation, plus its non-blocking warnings.
pub(crate) struct Loaded {
    pub site: Site,
    pub warnings: Vec<ValidationError>,
}

/// Read the navigation file and run [`load`].
pub(crate) fn load_from_paths(
    storage: &dyn Storage,
    navigation: &Path,
    policy: OrphanPolicy,
) -> Result<Loaded, CliError> {
    let content = std::fs::read_to_string(navigation).map_err(|source| CliError::Navigation {
        path: navigation.to_path_buf(),
        source,
    })?;
    load(storage, &content, policy)
}

/// Run the whole pipeline on already-read navigation YAML.
///
/// Every duplicate slug is reported, not just the first.
pub(crate) fn load(
    storage: &dyn Storage,
    navigation_yaml: &str,
    policy: OrphanPolicy,
) -> Result<Loaded, CliError> {
    let documents = storage.scan()?;
    let registry = register_all(documents)?;
    let spec = GroupingSpecification::from_yaml_str(navigation_yaml)?;
    let (site, warnings) = Site::build(registry, &spec, policy)?;
    Ok(Loaded { site, warnings })
}

fn register_all(documents: Vec<Document>) -> Result<PageRegistry, CliError> {
    let mut registry = PageRegistry::new();
    let mut errors = Vec::new();

    for doc in documents {
        let page = Page {
            slug: doc.slug,
            title: doc.title,
            description: doc.description,
        };
        if let Err(e) = registry.register(page) {
            tracing::debug!(source = ?doc.source, "{e}");
            errors.push(e);
        }
    }

    if errors.is_empty() {
        Ok(registry)
    } else {
        Err(CliError::Registry(errors))
    }
}
