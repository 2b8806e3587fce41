//! Content loading for docnav.
//!
//! This crate provides a [`Storage`] trait that turns a content source into
//! page records for the navigation core, so that the core never touches the
//! filesystem itself.
//!
//! # Architecture
//!
//! The crate provides:
//! - [`Storage`] trait with a single `scan()` method
//! - [`FsStorage`] for Markdown directories with YAML front matter
//! - [`MockStorage`] for testing (behind `mock` feature flag)
//!
//! # Example
//!
//! ```no_run
//! use std::path::PathBuf;
//! use docnav_storage::{FsStorage, Storage};
//!
//! let storage = FsStorage::new(PathBuf::from("docs"));
//! for doc in storage.scan()? {
//!     println!("{}: {}", doc.slug, doc.title);
//! }
//! # Ok::<(), docnav_storage::StorageError>(())
//! ```

mod front_matter;
mod fs;
#[cfg(feature = "mock")]
mod mock;
mod storage;

pub use fs::FsStorage;
#[cfg(feature = "mock")]
pub use mock::MockStorage;
pub use storage::{Document, Storage, StorageError, StorageErrorKind};
