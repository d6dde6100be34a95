use crate::error::{GvcError, Result};
use std::path::{Path, PathBuf};

/// Conventional location of the version catalog inside a Gradle project.
const DEFAULT_CATALOG: &str = "gradle/libs.versions.toml";

/// ProjectScannerAgent validates the project directory and locates the catalog
pub struct ProjectScannerAgent {
    project_path: PathBuf,
    catalog_override: Option<PathBuf>,
}

impl ProjectScannerAgent {
    pub fn new<P: AsRef<Path>>(project_path: P) -> Self {
        Self {
            project_path: project_path.as_ref().to_path_buf(),
            catalog_override: None,
        }
    }

    /// Use an explicit catalog file instead of `gradle/libs.versions.toml`
    pub fn with_catalog(mut self, catalog: Option<PathBuf>) -> Self {
        self.catalog_override = catalog;
        self
    }

    /// Validates the project directory.
    ///
    /// A missing catalog is not an error: it reads as empty later on.
    pub fn validate(&self) -> Result<ProjectInfo> {
        if !self.project_path.is_dir() {
            return Err(GvcError::ProjectValidation(format!(
                "Project path '{}' is not a directory",
                self.project_path.display()
            )));
        }

        let toml_path = match &self.catalog_override {
            Some(catalog) => catalog.clone(),
            None => self.project_path.join(DEFAULT_CATALOG),
        };

        if toml_path.is_dir() {
            return Err(GvcError::ProjectValidation(format!(
                "Catalog path '{}' is a directory",
                toml_path.display()
            )));
        }

        let has_catalog = toml_path.is_file();
        tracing::debug!(
            catalog = %toml_path.display(),
            exists = has_catalog,
            "located version catalog"
        );

        Ok(ProjectInfo {
            toml_path,
            has_catalog,
        })
    }
}

#[derive(Debug, Clone)]
pub struct ProjectInfo {
    pub toml_path: PathBuf,
    pub has_catalog: bool,
}
