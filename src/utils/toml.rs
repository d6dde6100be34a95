use toml_edit::{InlineTable, Value};

/// Version declared by a catalog entry: either a literal or a `version.ref` key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclaredVersion {
    Literal(String),
    Reference(String),
}

/// Rich version constraints, in the order they are preferred for annotation.
const RICH_VERSION_KEYS: [&str; 3] = ["strictly", "require", "prefer"];

/// Helpers for inspecting single-line Gradle version catalog values.
pub struct TomlUtils;

impl TomlUtils {
    /// Parses a `group:name[:version]` module notation.
    pub fn parse_coordinate(raw: &str) -> Option<(String, String, Option<String>)> {
        let parts: Vec<&str> = raw.split(':').map(str::trim).collect();
        let (group, name, version) = match parts.as_slice() {
            [group, name] => (*group, *name, None),
            [group, name, version] => (*group, *name, Some(*version)),
            _ => return None,
        };

        if group.is_empty() || name.is_empty() || version.is_some_and(str::is_empty) {
            return None;
        }

        Some((
            group.to_string(),
            name.to_string(),
            version.map(str::to_string),
        ))
    }

    /// Parses a `plugin.id:version` notation.
    pub fn parse_plugin_notation(raw: &str) -> Option<(String, String)> {
        let (id, version) = raw.split_once(':')?;
        let (id, version) = (id.trim(), version.trim());
        if id.is_empty() || version.is_empty() || version.contains(':') {
            return None;
        }
        Some((id.to_string(), version.to_string()))
    }

    /// Extracts `(group, name)` from `module = "g:n"` or `group`/`name` pairs.
    pub fn extract_group_name(table: &InlineTable) -> Option<(String, String)> {
        if let Some(module) = table.get("module").and_then(|v| v.as_str()) {
            return Self::parse_coordinate(module).map(|(g, n, _)| (g, n));
        }

        match (
            table.get("group").and_then(|v| v.as_str()),
            table.get("name").and_then(|v| v.as_str()),
        ) {
            (Some(group), Some(name)) if !group.is_empty() && !name.is_empty() => {
                Some((group.to_string(), name.to_string()))
            }
            _ => None,
        }
    }

    /// Extracts the plugin id of `{ id = "..." }`.
    pub fn extract_plugin_id(table: &InlineTable) -> Option<String> {
        table
            .get("id")
            .and_then(|v| v.as_str())
            .filter(|id| !id.is_empty())
            .map(str::to_string)
    }

    /// Extracts the `version` of an object declaration.
    ///
    /// Handles `version = "1.0"`, `version.ref = "key"`, `version = { ref = "key" }`
    /// and rich versions such as `version = { strictly = "1.0" }`.
    pub fn extract_version(table: &InlineTable) -> Option<DeclaredVersion> {
        match table.get("version")? {
            Value::String(literal) => Some(DeclaredVersion::Literal(literal.value().clone())),
            Value::InlineTable(version) => {
                if let Some(key) = version.get("ref").and_then(|v| v.as_str()) {
                    return Some(DeclaredVersion::Reference(key.to_string()));
                }
                Self::extract_rich_version(version).map(DeclaredVersion::Literal)
            }
            _ => None,
        }
    }

    /// Extracts the literal of a `[versions]` value, scalar or rich.
    pub fn extract_version_value(value: &Value) -> Option<String> {
        match value {
            Value::String(literal) => Some(literal.value().clone()),
            Value::InlineTable(table) => Self::extract_rich_version(table),
            _ => None,
        }
    }

    fn extract_rich_version(table: &InlineTable) -> Option<String> {
        RICH_VERSION_KEYS
            .iter()
            .find_map(|key| table.get(key).and_then(|v| v.as_str()))
            .map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inline(raw: &str) -> InlineTable {
        match raw.parse::<Value>().unwrap() {
            Value::InlineTable(table) => table,
            other => panic!("expected inline table, got {other:?}"),
        }
    }

    #[test]
    fn parses_coordinate_with_version() {
        assert_eq!(
            TomlUtils::parse_coordinate("com.test:artifact:1.0.0"),
            Some((
                "com.test".to_string(),
                "artifact".to_string(),
                Some("1.0.0".to_string())
            ))
        );
    }

    #[test]
    fn rejects_malformed_coordinates() {
        assert_eq!(TomlUtils::parse_coordinate("com.test"), None);
        assert_eq!(TomlUtils::parse_coordinate("com.test::1.0"), None);
        assert_eq!(TomlUtils::parse_coordinate("a:b:c:d"), None);
        assert_eq!(TomlUtils::parse_coordinate("a:b:"), None);
    }

    #[test]
    fn parses_plugin_notation() {
        assert_eq!(
            TomlUtils::parse_plugin_notation("org.jetbrains.kotlin.jvm:1.9.0"),
            Some(("org.jetbrains.kotlin.jvm".to_string(), "1.9.0".to_string()))
        );
        assert_eq!(TomlUtils::parse_plugin_notation("org.jetbrains.kotlin.jvm"), None);
    }

    #[test]
    fn extracts_group_name_from_module() {
        let table = inline(r#"{ module = "com.test:artifact", version = "1.0" }"#);
        assert_eq!(
            TomlUtils::extract_group_name(&table),
            Some(("com.test".to_string(), "artifact".to_string()))
        );
    }

    #[test]
    fn extracts_dotted_version_ref() {
        let table = inline(r#"{ group = "com.test", name = "artifact", version.ref = "core" }"#);
        assert_eq!(
            TomlUtils::extract_version(&table),
            Some(DeclaredVersion::Reference("core".to_string()))
        );
    }

    #[test]
    fn extracts_nested_version_ref() {
        let table = inline(r#"{ module = "com.test:artifact", version = { ref = "core" } }"#);
        assert_eq!(
            TomlUtils::extract_version(&table),
            Some(DeclaredVersion::Reference("core".to_string()))
        );
    }

    #[test]
    fn extracts_rich_version() {
        let table = inline(r#"{ module = "com.test:artifact", version = { strictly = "[1.0, 2.0)", prefer = "1.5" } }"#);
        assert_eq!(
            TomlUtils::extract_version(&table),
            Some(DeclaredVersion::Literal("[1.0, 2.0)".to_string()))
        );
    }

    #[test]
    fn extracts_versions_section_value() {
        let scalar: Value = r#""1.9.0""#.parse().unwrap();
        assert_eq!(
            TomlUtils::extract_version_value(&scalar).as_deref(),
            Some("1.9.0")
        );

        let rich: Value = r#"{ require = "1.2" }"#.parse().unwrap();
        assert_eq!(TomlUtils::extract_version_value(&rich).as_deref(), Some("1.2"));

        let number: Value = "42".parse().unwrap();
        assert_eq!(TomlUtils::extract_version_value(&number), None);
    }
}
