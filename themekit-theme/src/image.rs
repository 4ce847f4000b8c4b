//! Image lookup for theme values.
//!
//! A theme only stores image names. Turning a name into something drawable is
//! the job of an [ImageProvider]; [ImageCatalog] is a simple name to path map.

use std::collections::HashMap;
use std::fmt::Debug;
use std::path::{Path, PathBuf};

/// A resolved image asset.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRef {
    /// The name the theme used.
    pub name: String,
    /// Where the asset lives.
    pub path: PathBuf,
}

/// Image loading collaborator.
pub trait ImageProvider: Debug + Send + Sync {
    /// Look up the image registered as `name`.
    fn image(&self, name: &str) -> Option<ImageRef>;
}

/// The default [ImageProvider].
#[derive(Debug, Clone, Default)]
pub struct ImageCatalog {
    images: HashMap<String, PathBuf>,
}

impl ImageCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an image, returning the catalog for chaining.
    pub fn with_image(mut self, name: impl Into<String>, path: impl AsRef<Path>) -> Self {
        self.register(name, path);
        self
    }

    /// Register an image.
    pub fn register(&mut self, name: impl Into<String>, path: impl AsRef<Path>) {
        self.images.insert(name.into(), path.as_ref().to_path_buf());
    }
}

impl ImageProvider for ImageCatalog {
    fn image(&self, name: &str) -> Option<ImageRef> {
        self.images.get(name).map(|path| ImageRef {
            name: name.to_string(),
            path: path.clone(),
        })
    }
}
