// Catalog module - comment-preserving annotation of Gradle version catalogs
//
// Pipeline: text -> Line (line.rs) -> CatalogDocument (document.rs)
//   -> UpdatePlanner (planner.rs, resolver.rs, render.rs) or cleanup
//   -> Display back to text.
pub mod candidate;
pub mod document;
pub mod line;
pub mod planner;
pub mod render;
pub mod report;
pub mod resolver;

pub use candidate::{Coordinate, DependencyWithVersionCandidates, UpdateCandidates};
pub use document::CatalogDocument;
pub use line::{Line, LineKind, Section};
pub use render::AnnotationStyle;
pub use report::AnnotationReport;

use planner::UpdatePlanner;

/// New catalog text plus what changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogOutcome {
    pub text: String,
    pub report: AnnotationReport,
}

/// Adds or strips `available` annotations in catalog text.
pub struct CatalogUpdater<'a> {
    content: &'a str,
    candidates: &'a UpdateCandidates,
    style: AnnotationStyle,
}

impl<'a> CatalogUpdater<'a> {
    pub fn new(content: &'a str, candidates: &'a UpdateCandidates) -> Self {
        Self {
            content,
            candidates,
            style: AnnotationStyle::default(),
        }
    }

    pub fn with_style(mut self, style: AnnotationStyle) -> Self {
        self.style = style;
        self
    }

    /// Regenerates annotations below every declaration with candidates.
    ///
    /// Returns `None` for blank content, meaning nothing should be written.
    pub fn update_new_versions(&self) -> Option<CatalogOutcome> {
        if self.is_blank() {
            return None;
        }

        let mut document = CatalogDocument::parse(self.content);
        let planner = UpdatePlanner::new(&document, self.candidates, self.style);
        let mut report = AnnotationReport::new();

        document.replace_sections(|_, lines| planner.plan(lines, &mut report));

        Some(CatalogOutcome {
            text: document.to_string(),
            report,
        })
    }

    /// Removes every annotation line, leaving the rest untouched.
    ///
    /// Returns `None` for blank content, meaning nothing should be written.
    pub fn cleanup_comments(&self) -> Option<CatalogOutcome> {
        if self.is_blank() {
            return None;
        }

        let mut document = CatalogDocument::parse(self.content);
        let mut report = AnnotationReport::new();

        document.replace_sections(|_, lines| planner::cleanup(lines, &mut report));

        Some(CatalogOutcome {
            text: document.to_string(),
            report,
        })
    }

    fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }
}
