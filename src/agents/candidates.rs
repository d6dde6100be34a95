use crate::catalog::{Coordinate, DependencyWithVersionCandidates, UpdateCandidates};
use crate::error::{GvcError, Result};
use crate::maven::Version;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// One record of a candidate file.
///
/// ```toml
/// [[dependency]]
/// group = "com.squareup.okhttp3"
/// name = "okhttp"
/// versions = ["4.12.0", "5.0.0-alpha.12"]
///
/// [[dependency]]
/// plugin = "org.jetbrains.kotlin.jvm"
/// versions = ["1.9.22"]
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum CandidateEntry {
    Library {
        group: String,
        name: String,
        versions: Vec<String>,
    },
    Plugin {
        plugin: String,
        versions: Vec<String>,
    },
}

#[derive(Debug, Deserialize)]
struct CandidateFile {
    #[serde(default)]
    dependency: Vec<CandidateEntry>,
}

/// Loads the externally computed update candidates
pub struct CandidateLoader {
    stable_only: bool,
}

impl CandidateLoader {
    pub fn new(stable_only: bool) -> Self {
        Self { stable_only }
    }

    /// Reads a `.toml` file (`[[dependency]]` tables) or a JSON array.
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<UpdateCandidates> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            GvcError::CandidateParsing(format!(
                "Failed to read candidates '{}': {}",
                path.display(),
                e
            ))
        })?;

        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        if is_toml {
            self.parse_toml(&content)
        } else {
            self.parse_json(&content)
        }
    }

    pub fn parse_toml(&self, content: &str) -> Result<UpdateCandidates> {
        let file: CandidateFile = toml::from_str(content)?;
        self.convert(file.dependency)
    }

    pub fn parse_json(&self, content: &str) -> Result<UpdateCandidates> {
        let entries: Vec<CandidateEntry> = serde_json::from_str(content)?;
        self.convert(entries)
    }

    fn convert(&self, entries: Vec<CandidateEntry>) -> Result<UpdateCandidates> {
        let mut candidates = Vec::with_capacity(entries.len());

        for entry in entries {
            let (coordinate, versions) = match entry {
                CandidateEntry::Library {
                    group,
                    name,
                    versions,
                } => {
                    if group.trim().is_empty() || name.trim().is_empty() {
                        return Err(GvcError::CandidateParsing(format!(
                            "Candidate '{}:{}' needs both a group and a name",
                            group, name
                        )));
                    }
                    (Coordinate::new(group.trim(), name.trim()), versions)
                }
                CandidateEntry::Plugin { plugin, versions } => {
                    if plugin.trim().is_empty() {
                        return Err(GvcError::CandidateParsing(
                            "Plugin candidate has an empty id".to_string(),
                        ));
                    }
                    (Coordinate::plugin(plugin.trim()), versions)
                }
            };

            let (versions, multi_line): (Vec<String>, Vec<String>) = versions
                .into_iter()
                .partition(|v| !v.contains(['\n', '\r']));
            for version in &multi_line {
                tracing::warn!(
                    coordinate = %coordinate,
                    version = %version.escape_debug(),
                    "dropping candidate version containing a line break"
                );
            }

            let total = versions.len();
            let versions: Vec<String> = versions
                .into_iter()
                .filter(|v| !self.stable_only || Version::parse(v).is_stable())
                .collect();

            if versions.len() < total {
                tracing::debug!(
                    coordinate = %coordinate,
                    dropped = total - versions.len(),
                    "filtered unstable candidates"
                );
            }

            if versions.is_empty() {
                continue;
            }

            candidates.push(DependencyWithVersionCandidates::new(coordinate, versions));
        }

        Ok(UpdateCandidates::new(candidates))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const JSON: &str = r#"[
        { "group": "com.squareup.okhttp3", "name": "okhttp", "versions": ["4.12.0", "5.0.0-alpha.12"] },
        { "plugin": "org.jetbrains.kotlin.jvm", "versions": ["2.0.0-RC1"] }
    ]"#;

    const TOML: &str = r#"
[[dependency]]
group = "com.squareup.okhttp3"
name = "okhttp"
versions = ["4.12.0", "5.0.0-alpha.12"]

[[dependency]]
plugin = "org.jetbrains.kotlin.jvm"
versions = ["1.9.22"]
"#;

    #[test]
    fn parses_json_entries_in_order() {
        let candidates = CandidateLoader::new(false).parse_json(JSON).unwrap();
        let entries: Vec<_> = candidates.iter().collect();

        assert_eq!(entries.len(), 2);
        assert_eq!(
            entries[0].coordinate,
            Coordinate::new("com.squareup.okhttp3", "okhttp")
        );
        assert_eq!(entries[0].versions, vec!["4.12.0", "5.0.0-alpha.12"]);
        assert_eq!(
            entries[1].coordinate,
            Coordinate::plugin("org.jetbrains.kotlin.jvm")
        );
    }

    #[test]
    fn stable_only_filters_versions_and_drops_empty_entries() {
        let candidates = CandidateLoader::new(true).parse_json(JSON).unwrap();
        let entries: Vec<_> = candidates.iter().collect();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].versions, vec!["4.12.0"]);
    }

    #[test]
    fn parses_toml_file_by_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("candidates.toml");
        fs::write(&path, TOML).unwrap();

        let candidates = CandidateLoader::new(false).load(&path).unwrap();
        assert_eq!(candidates.len(), 2);
        assert!(
            candidates
                .find(&Coordinate::plugin("org.jetbrains.kotlin.jvm"))
                .is_some()
        );
    }

    #[test]
    fn drops_versions_with_line_breaks() {
        let json = r#"[
            { "group": "g", "name": "n", "versions": ["2.0\"\nx = \"3.0", "2.1"] },
            { "group": "g", "name": "m", "versions": ["1.0\r"] }
        ]"#;
        let candidates = CandidateLoader::new(false).parse_json(json).unwrap();
        let entries: Vec<_> = candidates.iter().collect();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].coordinate, Coordinate::new("g", "n"));
        assert_eq!(entries[0].versions, vec!["2.1"]);
    }

    #[test]
    fn rejects_empty_coordinates() {
        let err = CandidateLoader::new(false)
            .parse_json(r#"[{ "group": "", "name": "x", "versions": ["1"] }]"#)
            .unwrap_err();
        assert!(matches!(err, GvcError::CandidateParsing(_)));
    }

    #[test]
    fn reports_malformed_input() {
        let loader = CandidateLoader::new(false);
        assert!(matches!(
            loader.parse_json("{ not json").unwrap_err(),
            GvcError::Json(_)
        ));
        assert!(matches!(
            loader.parse_toml("dependency = 3").unwrap_err(),
            GvcError::Toml(_)
        ));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        let err = CandidateLoader::new(false)
            .load(dir.path().join("nope.json"))
            .unwrap_err();
        assert!(matches!(err, GvcError::CandidateParsing(_)));
    }
}
