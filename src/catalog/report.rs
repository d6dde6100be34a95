use crate::catalog::candidate::Coordinate;
use crate::catalog::line::Section;

/// A declaration that received `available` annotations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedEntry {
    pub section: Section,
    pub key: String,
    pub coordinate: Coordinate,
    pub versions: Vec<String>,
}

/// Tracks what an update or cleanup pass did to the catalog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationReport {
    /// Entries annotated, in document order
    pub annotated: Vec<AnnotatedEntry>,
    /// Annotation lines dropped from the input
    pub removed: usize,
}

impl AnnotationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_annotated(&mut self, entry: AnnotatedEntry) {
        self.annotated.push(entry);
    }

    pub fn add_removed(&mut self) {
        self.removed += 1;
    }

    /// Check if the pass neither added nor removed anything
    pub fn is_empty(&self) -> bool {
        self.annotated.is_empty() && self.removed == 0
    }

    /// Number of annotation lines written
    pub fn total_annotations(&self) -> usize {
        self.annotated.iter().map(|entry| entry.versions.len()).sum()
    }
}
