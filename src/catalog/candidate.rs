use std::fmt;

/// Suffix of the marker artifact Gradle publishes for every plugin id.
const PLUGIN_MARKER_SUFFIX: &str = ".gradle.plugin";

/// A dependency coordinate: `(group, name)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub group: String,
    pub name: String,
}

impl Coordinate {
    pub fn new(group: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
        }
    }

    /// Coordinate of the plugin marker artifact, `id:id.gradle.plugin`.
    pub fn plugin(plugin_id: impl Into<String>) -> Self {
        let id = plugin_id.into();
        let name = format!("{id}{PLUGIN_MARKER_SUFFIX}");
        Self { group: id, name }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group, self.name)
    }
}

/// A coordinate plus the candidate versions the caller selected for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyWithVersionCandidates {
    pub coordinate: Coordinate,
    pub versions: Vec<String>,
}

impl DependencyWithVersionCandidates {
    pub fn new(coordinate: Coordinate, versions: Vec<String>) -> Self {
        Self {
            coordinate,
            versions,
        }
    }
}

/// Ordered list of update candidates, looked up by exact coordinate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateCandidates(Vec<DependencyWithVersionCandidates>);

impl UpdateCandidates {
    pub fn new(candidates: Vec<DependencyWithVersionCandidates>) -> Self {
        Self(candidates)
    }

    /// First entry whose group and name both equal the coordinate.
    pub fn find(&self, coordinate: &Coordinate) -> Option<&DependencyWithVersionCandidates> {
        self.0.iter().find(|candidate| candidate.coordinate == *coordinate)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DependencyWithVersionCandidates> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<DependencyWithVersionCandidates> for UpdateCandidates {
    fn from_iter<I: IntoIterator<Item = DependencyWithVersionCandidates>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plugin_coordinate_uses_marker_artifact() {
        let coordinate = Coordinate::plugin("org.jetbrains.kotlin.jvm");
        assert_eq!(coordinate.group, "org.jetbrains.kotlin.jvm");
        assert_eq!(coordinate.name, "org.jetbrains.kotlin.jvm.gradle.plugin");
    }

    #[test]
    fn find_requires_both_fields_to_match() {
        let candidates: UpdateCandidates = vec![
            DependencyWithVersionCandidates::new(
                Coordinate::new("com.example", "other"),
                vec!["9.0".into()],
            ),
            DependencyWithVersionCandidates::new(
                Coordinate::new("com.example", "lib"),
                vec!["1.1.0".into()],
            ),
        ]
        .into_iter()
        .collect();

        let found = candidates
            .find(&Coordinate::new("com.example", "lib"))
            .unwrap();
        assert_eq!(found.versions, vec!["1.1.0".to_string()]);
        assert!(candidates.find(&Coordinate::new("com.other", "lib")).is_none());
    }

    #[test]
    fn find_returns_first_duplicate() {
        let candidates = UpdateCandidates::new(vec![
            DependencyWithVersionCandidates::new(Coordinate::new("g", "n"), vec!["1".into()]),
            DependencyWithVersionCandidates::new(Coordinate::new("g", "n"), vec!["2".into()]),
        ]);
        assert_eq!(
            candidates.find(&Coordinate::new("g", "n")).unwrap().versions,
            vec!["1".to_string()]
        );
    }
}
