use crate::catalog::candidate::{Coordinate, DependencyWithVersionCandidates, UpdateCandidates};
use crate::catalog::document::CatalogDocument;
use crate::catalog::line::{Line, LineKind};
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Maps each `[versions]` key to the first library or plugin referencing it.
///
/// "First" means section order, then line order. Built once per run.
#[derive(Debug, Clone, Default)]
pub struct ReferenceIndex {
    references: HashMap<String, Coordinate>,
}

impl ReferenceIndex {
    pub fn build(document: &CatalogDocument) -> Self {
        let mut references = HashMap::new();

        for line in document.lines() {
            let (LineKind::LibraryVersionRef {
                coordinate,
                version_ref,
                ..
            }
            | LineKind::PluginVersionRef {
                coordinate,
                version_ref,
                ..
            }) = &line.kind
            else {
                continue;
            };

            match references.entry(version_ref.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(coordinate.clone());
                }
                Entry::Occupied(existing) => {
                    tracing::debug!(
                        version_ref = %version_ref,
                        first = %existing.get(),
                        ignored = %coordinate,
                        "version key referenced more than once, using first entry"
                    );
                }
            }
        }

        Self { references }
    }

    /// Coordinate of the entry referencing `version_key`, if any.
    pub fn referencing(&self, version_key: &str) -> Option<&Coordinate> {
        self.references.get(version_key)
    }

    /// Candidates of the entry that references the given `Version` line.
    pub fn find_referencing_entry<'c>(
        &self,
        version_line: &Line,
        candidates: &'c UpdateCandidates,
    ) -> Option<&'c DependencyWithVersionCandidates> {
        let LineKind::Version { key, .. } = &version_line.kind else {
            return None;
        };
        let coordinate = self.referencing(key)?;
        candidates.find(coordinate)
    }
}
