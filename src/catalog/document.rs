use crate::catalog::line::{Line, Section};
use std::fmt;

/// One section of the catalog and its lines, header included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionBlock {
    pub section: Section,
    pub lines: Vec<Line>,
}

/// A version catalog held as ordered sections of classified lines.
///
/// Serializing an unmodified document reproduces the input text exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogDocument {
    sections: Vec<SectionBlock>,
}

impl CatalogDocument {
    pub fn parse(content: &str) -> Self {
        let mut sections = vec![SectionBlock {
            section: Section::Root,
            lines: Vec::new(),
        }];

        for raw in content.split('\n') {
            if let Some(section) = Section::from_header(raw) {
                sections.push(SectionBlock {
                    lines: vec![Line::parse(section.clone(), raw)],
                    section,
                });
                continue;
            }

            if let Some(current) = sections.last_mut() {
                current
                    .lines
                    .push(Line::parse(current.section.clone(), raw));
            }
        }

        if sections.first().is_some_and(|root| root.lines.is_empty()) {
            sections.remove(0);
        }

        Self { sections }
    }

    /// Sections in source order. A repeated header yields a second block.
    pub fn sections(&self) -> &[SectionBlock] {
        &self.sections
    }

    /// Lines of the first block of `section`.
    pub fn get(&self, section: &Section) -> Option<&[Line]> {
        self.sections
            .iter()
            .find(|block| block.section == *section)
            .map(|block| block.lines.as_slice())
    }

    /// Replaces the lines of the first block of `section`.
    ///
    /// Returns `false` and leaves the document untouched when the section is absent.
    pub fn set(&mut self, section: &Section, lines: Vec<Line>) -> bool {
        match self
            .sections
            .iter_mut()
            .find(|block| block.section == *section)
        {
            Some(block) => {
                block.lines = lines;
                true
            }
            None => false,
        }
    }

    /// Replaces every block's lines with the result of `transform`.
    pub fn replace_sections<F>(&mut self, mut transform: F)
    where
        F: FnMut(&Section, Vec<Line>) -> Vec<Line>,
    {
        for block in &mut self.sections {
            let lines = std::mem::take(&mut block.lines);
            block.lines = transform(&block.section, lines);
        }
    }

    /// All lines, section by section.
    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.sections.iter().flat_map(|block| block.lines.iter())
    }
}

impl fmt::Display for CatalogDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, line) in self.lines().enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            f.write_str(&line.text)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::line::LineKind;
    use pretty_assertions::assert_eq;

    const CATALOG: &str = r#"# Project dependencies
[versions]
kotlin = "1.9.0"

[libraries]
ktor-core = { module = "io.ktor:ktor-core", version.ref = "ktor" }

[plugins]
kotlin = { id = "org.jetbrains.kotlin.jvm", version.ref = "kotlin" }
"#;

    #[test]
    fn round_trips_text_exactly() {
        let document = CatalogDocument::parse(CATALOG);
        assert_eq!(document.to_string(), CATALOG);
    }

    #[test]
    fn round_trips_crlf_and_missing_trailing_newline() {
        let content = "[versions]\r\nkotlin = \"1.9.0\"\r\n\r\n[libraries]";
        assert_eq!(CatalogDocument::parse(content).to_string(), content);
    }

    #[test]
    fn groups_lines_by_section() {
        let document = CatalogDocument::parse(CATALOG);
        let sections: Vec<&Section> = document.sections().iter().map(|b| &b.section).collect();
        assert_eq!(
            sections,
            vec![
                &Section::Root,
                &Section::Versions,
                &Section::Libraries,
                &Section::Plugins
            ]
        );

        let versions = document.get(&Section::Versions).unwrap();
        assert_eq!(versions[0].text, "[versions]");
        assert_eq!(versions[0].kind, LineKind::Ignore);
        assert_eq!(versions[1].key(), Some("kotlin"));
    }

    #[test]
    fn omits_empty_root_section() {
        let document = CatalogDocument::parse("[versions]\nkotlin = \"1.0\"");
        assert_eq!(document.sections().len(), 1);
        assert_eq!(document.sections()[0].section, Section::Versions);
    }

    #[test]
    fn set_replaces_existing_section_only() {
        let mut document = CatalogDocument::parse(CATALOG);
        let header = Line::parse(Section::Versions, "[versions]");

        assert!(document.set(&Section::Versions, vec![header]));
        assert!(!document.set(&Section::Bundles, Vec::new()));
        assert!(document.get(&Section::Bundles).is_none());
        assert!(!document.to_string().contains("kotlin = \"1.9.0\""));
    }

    #[test]
    fn keeps_repeated_sections_in_place() {
        let content = "[versions]\na = \"1\"\n[libraries]\n[versions]\nb = \"2\"";
        let document = CatalogDocument::parse(content);
        assert_eq!(document.sections().len(), 3);
        assert_eq!(document.to_string(), content);
    }
}
