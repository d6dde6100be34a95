use crate::catalog::candidate::Coordinate;
use crate::utils::toml::{DeclaredVersion, TomlUtils};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use toml_edit::Value;

/// Version placeholder meaning "resolved elsewhere".
const VERSION_PLACEHOLDER: &str = "_";

static HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*\[\[?\s*([^\[\]]+?)\s*\]\]?\s*(?:#.*)?$"#).expect("valid header regex")
});

static ANNOTATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^## *# available").expect("valid annotation regex"));

/// A named block of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Section {
    /// Lines before the first table header.
    Root,
    Versions,
    Libraries,
    Plugins,
    Bundles,
    Other(String),
}

impl Section {
    /// Recognises a table header line such as `[versions]`.
    pub fn from_header(text: &str) -> Option<Self> {
        let content = text.strip_suffix('\r').unwrap_or(text);
        let name = HEADER.captures(content)?.get(1)?.as_str();
        let name = name.trim_matches(|c: char| c == '"' || c == '\'');

        Some(match name {
            "versions" => Section::Versions,
            "libraries" => Section::Libraries,
            "plugins" => Section::Plugins,
            "bundles" => Section::Bundles,
            other => Section::Other(other.to_string()),
        })
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Root => f.write_str("(root)"),
            Section::Versions => f.write_str("versions"),
            Section::Libraries => f.write_str("libraries"),
            Section::Plugins => f.write_str("plugins"),
            Section::Bundles => f.write_str("bundles"),
            Section::Other(name) => f.write_str(name),
        }
    }
}

/// What a line declares, with the fields each shape carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Inert or unrecognised; reproduced verbatim.
    Ignore,
    /// A previously generated `available` annotation.
    Delete,
    /// `key = "1.0"` in `[versions]`.
    Version { key: String, version: String },
    /// Library or plugin whose version is the `_` placeholder.
    VersionRefOnly { key: String },
    LibraryVersionRef {
        key: String,
        coordinate: Coordinate,
        version_ref: String,
    },
    PluginVersionRef {
        key: String,
        coordinate: Coordinate,
        version_ref: String,
    },
    Library {
        key: String,
        coordinate: Coordinate,
        version: String,
    },
    Plugin {
        key: String,
        coordinate: Coordinate,
        version: String,
    },
}

/// One physical line of the catalog, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub section: Section,
    /// Original content, including a trailing `\r` if the file uses CRLF.
    pub text: String,
    /// Value text after `=`, without trailing comment.
    pub unparsed_value: String,
    pub kind: LineKind,
    value_offset: usize,
}

impl Line {
    /// Classifies one raw line. Never fails: unknown shapes become `Ignore`.
    pub fn parse(section: Section, text: impl Into<String>) -> Self {
        let text = text.into();
        let content = text.strip_suffix('\r').unwrap_or(&text);

        if ANNOTATION.is_match(content) {
            return Self::unkeyed(section, text, LineKind::Delete);
        }

        let Some(declaration) = split_declaration(content) else {
            return Self::unkeyed(section, text, LineKind::Ignore);
        };

        let kind = match section {
            Section::Versions => classify_version(&declaration),
            Section::Libraries => classify_library(&declaration),
            Section::Plugins => classify_plugin(&declaration),
            Section::Root | Section::Bundles | Section::Other(_) => None,
        }
        .unwrap_or(LineKind::Ignore);

        Self {
            section,
            unparsed_value: declaration.value,
            kind,
            value_offset: declaration.value_offset,
            text,
        }
    }

    fn unkeyed(section: Section, text: String, kind: LineKind) -> Self {
        Self {
            section,
            text,
            unparsed_value: String::new(),
            kind,
            value_offset: 0,
        }
    }

    pub fn key(&self) -> Option<&str> {
        match &self.kind {
            LineKind::Ignore | LineKind::Delete => None,
            LineKind::Version { key, .. }
            | LineKind::VersionRefOnly { key }
            | LineKind::LibraryVersionRef { key, .. }
            | LineKind::PluginVersionRef { key, .. }
            | LineKind::Library { key, .. }
            | LineKind::Plugin { key, .. } => Some(key.as_str()),
        }
    }

    pub fn coordinate(&self) -> Option<&Coordinate> {
        match &self.kind {
            LineKind::LibraryVersionRef { coordinate, .. }
            | LineKind::PluginVersionRef { coordinate, .. }
            | LineKind::Library { coordinate, .. }
            | LineKind::Plugin { coordinate, .. } => Some(coordinate),
            _ => None,
        }
    }

    pub fn version(&self) -> Option<&str> {
        match &self.kind {
            LineKind::Version { version, .. }
            | LineKind::Library { version, .. }
            | LineKind::Plugin { version, .. } => Some(version.as_str()),
            _ => None,
        }
    }

    pub fn version_ref(&self) -> Option<&str> {
        match &self.kind {
            LineKind::LibraryVersionRef { version_ref, .. }
            | LineKind::PluginVersionRef { version_ref, .. } => Some(version_ref.as_str()),
            _ => None,
        }
    }

    pub fn is_object(&self) -> bool {
        self.unparsed_value.ends_with('}')
    }

    /// Character column where the literal version starts, if the line has one.
    pub fn version_column(&self) -> Option<usize> {
        let version = self.version()?;
        let value = self.text.get(self.value_offset..)?;

        let byte_index = ['"', '\'']
            .iter()
            .find_map(|quote| {
                value
                    .find(&format!("{quote}{version}{quote}"))
                    .or_else(|| value.find(&format!(":{version}{quote}")))
            })
            .map(|index| self.value_offset + index + 1)
            .or_else(|| self.text.find(version))?;

        Some(self.text[..byte_index].chars().count())
    }
}

/// `key = value` split of a line, ignoring `=` and `#` inside strings.
#[derive(Debug)]
struct Declaration {
    key: String,
    value: String,
    value_offset: usize,
}

fn split_declaration(content: &str) -> Option<Declaration> {
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut equals = None;

    for (index, c) in content.char_indices() {
        match quote {
            Some(open) => {
                if escaped {
                    escaped = false;
                } else if c == '\\' && open == '"' {
                    escaped = true;
                } else if c == open {
                    quote = None;
                }
            }
            None => match c {
                '"' | '\'' => quote = Some(c),
                '#' => return None,
                '=' => {
                    equals = Some(index);
                    break;
                }
                _ => {}
            },
        }
    }

    let equals = equals?;
    let key = content[..equals]
        .trim()
        .trim_matches(|c: char| c == '"' || c == '\'');
    if key.is_empty() {
        return None;
    }

    let value_offset = equals + 1;
    let value = strip_comment(&content[value_offset..]).trim().to_string();

    Some(Declaration {
        key: key.to_string(),
        value,
        value_offset,
    })
}

fn strip_comment(value: &str) -> &str {
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for (index, c) in value.char_indices() {
        match quote {
            Some(open) => {
                if escaped {
                    escaped = false;
                } else if c == '\\' && open == '"' {
                    escaped = true;
                } else if c == open {
                    quote = None;
                }
            }
            None => match c {
                '"' | '\'' => quote = Some(c),
                '#' => return &value[..index],
                _ => {}
            },
        }
    }

    value
}

fn parse_value(declaration: &Declaration) -> Option<Value> {
    declaration.value.parse::<Value>().ok()
}

fn classify_version(declaration: &Declaration) -> Option<LineKind> {
    let value = parse_value(declaration)?;
    let version = TomlUtils::extract_version_value(&value)?;
    Some(LineKind::Version {
        key: declaration.key.clone(),
        version,
    })
}

fn classify_library(declaration: &Declaration) -> Option<LineKind> {
    let key = declaration.key.clone();

    match parse_value(declaration)? {
        Value::String(notation) => {
            let (group, name, version) = TomlUtils::parse_coordinate(notation.value())?;
            let version = version?;
            if version == VERSION_PLACEHOLDER {
                return Some(LineKind::VersionRefOnly { key });
            }
            Some(LineKind::Library {
                key,
                coordinate: Coordinate::new(group, name),
                version,
            })
        }
        Value::InlineTable(table) => {
            let (group, name) = TomlUtils::extract_group_name(&table)?;
            let coordinate = Coordinate::new(group, name);
            Some(match TomlUtils::extract_version(&table)? {
                DeclaredVersion::Reference(version_ref) => LineKind::LibraryVersionRef {
                    key,
                    coordinate,
                    version_ref,
                },
                DeclaredVersion::Literal(version) if version == VERSION_PLACEHOLDER => {
                    LineKind::VersionRefOnly { key }
                }
                DeclaredVersion::Literal(version) => LineKind::Library {
                    key,
                    coordinate,
                    version,
                },
            })
        }
        _ => None,
    }
}

fn classify_plugin(declaration: &Declaration) -> Option<LineKind> {
    let key = declaration.key.clone();

    match parse_value(declaration)? {
        Value::String(notation) => {
            let (id, version) = TomlUtils::parse_plugin_notation(notation.value())?;
            if version == VERSION_PLACEHOLDER {
                return Some(LineKind::VersionRefOnly { key });
            }
            Some(LineKind::Plugin {
                key,
                coordinate: Coordinate::plugin(id),
                version,
            })
        }
        Value::InlineTable(table) => {
            let coordinate = Coordinate::plugin(TomlUtils::extract_plugin_id(&table)?);
            Some(match TomlUtils::extract_version(&table)? {
                DeclaredVersion::Reference(version_ref) => LineKind::PluginVersionRef {
                    key,
                    coordinate,
                    version_ref,
                },
                DeclaredVersion::Literal(version) if version == VERSION_PLACEHOLDER => {
                    LineKind::VersionRefOnly { key }
                }
                DeclaredVersion::Literal(version) => LineKind::Plugin {
                    key,
                    coordinate,
                    version,
                },
            })
        }
        _ => None,
    }
}
