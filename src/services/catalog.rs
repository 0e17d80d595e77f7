// repo-ready Source Catalog
// Loads the template/hook/label source configuration from a JSON file at the
// platform-specific config path. The catalog is read once per run and never
// written back.

use std::fs;
use std::path::{Path, PathBuf};

use crate::platform;
use crate::types::config::TemplateSources;
use crate::types::errors::ConfigError;

const CATALOG_FILE: &str = "template-sources.json";

/// Trait defining the source catalog interface.
pub trait SourceCatalogTrait {
    fn load(&mut self) -> Result<&TemplateSources, ConfigError>;
    fn sources(&self) -> &TemplateSources;
    fn catalog_path(&self) -> &Path;
    /// Directory that relative `source_path` entries resolve against.
    fn base_dir(&self) -> PathBuf;
}

/// Source catalog backed by `template-sources.json`.
pub struct SourceCatalog {
    catalog_path: PathBuf,
    sources: TemplateSources,
}

impl SourceCatalog {
    /// Creates a catalog at the platform config path, or at `path_override`.
    pub fn new(path_override: Option<PathBuf>) -> Self {
        let catalog_path =
            path_override.unwrap_or_else(|| platform::get_config_dir().join(CATALOG_FILE));

        Self {
            catalog_path,
            sources: TemplateSources::default(),
        }
    }
}

impl SourceCatalogTrait for SourceCatalog {
    /// Loads the catalog from disk.
    ///
    /// A missing file and a malformed file are both configuration errors:
    /// the tool has nothing to offer without a catalog.
    fn load(&mut self) -> Result<&TemplateSources, ConfigError> {
        let content = fs::read_to_string(&self.catalog_path).map_err(|e| {
            ConfigError::IoError(format!(
                "Failed to read {}: {}",
                self.catalog_path.display(),
                e
            ))
        })?;

        self.sources = serde_json::from_str(&content).map_err(|e| {
            ConfigError::ParseError(format!(
                "Failed to parse {}: {}",
                self.catalog_path.display(),
                e
            ))
        })?;

        Ok(&self.sources)
    }

    fn sources(&self) -> &TemplateSources {
        &self.sources
    }

    fn catalog_path(&self) -> &Path {
        &self.catalog_path
    }

    fn base_dir(&self) -> PathBuf {
        self.catalog_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
