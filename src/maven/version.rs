/// Version string as published to a Maven repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    pub original: String,
    pub parsed: VersionType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionType {
    Semantic(semver::Version),
    Snapshot,
    Other,
}

impl Version {
    pub fn parse(version: &str) -> Self {
        let parsed = if let Ok(v) = semver::Version::parse(version) {
            VersionType::Semantic(v)
        } else if version.ends_with("-SNAPSHOT") {
            VersionType::Snapshot
        } else {
            VersionType::Other
        };

        Version {
            original: version.to_string(),
            parsed,
        }
    }

    pub fn is_stable(&self) -> bool {
        let lower = self.original.to_lowercase();

        // Check for common unstable markers
        let unstable_markers = [
            "alpha", "beta", "rc", "snapshot", "dev", "m1", "m2", "m3", "eap", "preview",
            "canary",
        ];

        if unstable_markers.iter().any(|marker| lower.contains(marker)) {
            return false;
        }

        match &self.parsed {
            VersionType::Semantic(v) => v.pre.is_empty(),
            VersionType::Snapshot => false,
            VersionType::Other => true,
        }
    }
}
