use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Reads and writes the catalog file at the edge of the pipeline
pub struct CatalogFile {
    path: PathBuf,
}

impl CatalogFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current content; an absent or unreadable file reads as empty.
    pub fn read(&self) -> String {
        match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(
                    catalog = %self.path.display(),
                    error = %e,
                    "catalog not readable, treating as empty"
                );
                String::new()
            }
        }
    }

    /// Writes `content` unless it equals `previous`. Returns whether it wrote.
    pub fn write_if_changed(&self, previous: &str, content: &str) -> Result<bool> {
        if previous == content {
            tracing::debug!(catalog = %self.path.display(), "catalog unchanged, skipping write");
            return Ok(false);
        }

        fs::write(&self.path, content)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempdir().unwrap();
        let file = CatalogFile::new(dir.path().join("libs.versions.toml"));
        assert_eq!(file.read(), "");
    }

    #[test]
    fn writes_only_changed_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("libs.versions.toml");
        fs::write(&path, "[versions]\n").unwrap();
        let file = CatalogFile::new(&path);

        let content = file.read();
        assert!(!file.write_if_changed(&content, "[versions]\n").unwrap());
        assert!(
            file.write_if_changed(&content, "[versions]\na = \"1\"\n")
                .unwrap()
        );
        assert_eq!(fs::read_to_string(&path).unwrap(), "[versions]\na = \"1\"\n");
    }
}
