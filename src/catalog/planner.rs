use crate::catalog::candidate::{DependencyWithVersionCandidates, UpdateCandidates};
use crate::catalog::document::CatalogDocument;
use crate::catalog::line::{Line, LineKind};
use crate::catalog::render::AnnotationStyle;
use crate::catalog::report::{AnnotatedEntry, AnnotationReport};
use crate::catalog::resolver::ReferenceIndex;

/// Decides, line by line, what the update pass emits.
pub struct UpdatePlanner<'a> {
    candidates: &'a UpdateCandidates,
    references: ReferenceIndex,
    style: AnnotationStyle,
}

impl<'a> UpdatePlanner<'a> {
    pub fn new(
        document: &CatalogDocument,
        candidates: &'a UpdateCandidates,
        style: AnnotationStyle,
    ) -> Self {
        Self {
            candidates,
            references: ReferenceIndex::build(document),
            style,
        }
    }

    /// Maps each line of a section to zero or more output lines.
    pub fn plan(&self, lines: Vec<Line>, report: &mut AnnotationReport) -> Vec<Line> {
        let mut planned = Vec::with_capacity(lines.len());

        for line in lines {
            let update = match &line.kind {
                LineKind::Ignore
                | LineKind::VersionRefOnly { .. }
                | LineKind::LibraryVersionRef { .. }
                | LineKind::PluginVersionRef { .. } => None,
                LineKind::Delete => {
                    report.add_removed();
                    continue;
                }
                LineKind::Version { .. } => self
                    .references
                    .find_referencing_entry(&line, self.candidates),
                LineKind::Library { coordinate, .. } | LineKind::Plugin { coordinate, .. } => {
                    self.candidates.find(coordinate)
                }
            };

            match update {
                Some(update) => self.annotate(line, update, &mut planned, report),
                None => planned.push(line),
            }
        }

        planned
    }

    fn annotate(
        &self,
        line: Line,
        update: &DependencyWithVersionCandidates,
        planned: &mut Vec<Line>,
        report: &mut AnnotationReport,
    ) {
        let (versions, annotations): (Vec<String>, Vec<Line>) = update
            .versions
            .iter()
            .filter_map(|version| {
                self.style
                    .render(&line, version)
                    .map(|annotation| (version.clone(), annotation))
            })
            .unzip();

        if !annotations.is_empty() {
            tracing::debug!(
                section = %line.section,
                key = line.key().unwrap_or_default(),
                coordinate = %update.coordinate,
                count = annotations.len(),
                "annotating declaration"
            );
            report.add_annotated(AnnotatedEntry {
                section: line.section.clone(),
                key: line.key().unwrap_or_default().to_string(),
                coordinate: update.coordinate.clone(),
                versions,
            });
        }

        planned.push(line);
        planned.extend(annotations);
    }
}

/// Drops every annotation line of a section.
pub fn cleanup(lines: Vec<Line>, report: &mut AnnotationReport) -> Vec<Line> {
    lines
        .into_iter()
        .filter(|line| {
            let keep = line.kind != LineKind::Delete;
            if !keep {
                report.add_removed();
            }
            keep
        })
        .collect()
}
