use crate::catalog::line::{Line, LineKind, Section};

/// Column offsets used to line the annotated value up under the declared one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnotationStyle {
    pub scalar_offset: usize,
    pub object_offset: usize,
}

impl Default for AnnotationStyle {
    fn default() -> Self {
        Self {
            scalar_offset: 14,
            object_offset: 17,
        }
    }
}

impl AnnotationStyle {
    /// Renders the `available` comment for `candidate` below `subject`.
    ///
    /// The produced line always re-classifies as [`LineKind::Delete`]. A
    /// candidate containing a line break cannot fit on one comment line and
    /// yields `None`.
    pub fn render(&self, subject: &Line, candidate: &str) -> Option<Line> {
        if candidate.contains(['\n', '\r']) {
            tracing::warn!(
                key = subject.key().unwrap_or_default(),
                candidate = %candidate.escape_debug(),
                "skipping candidate containing a line break"
            );
            return None;
        }

        let is_object = subject.is_object();

        let suffix = if is_object {
            format!(" = \"{candidate}\" }}")
        } else if subject.section == Section::Versions {
            format!(" = \"{candidate}\"")
        } else {
            format!(":{candidate}\"")
        };

        let offset = if is_object {
            self.object_offset
        } else {
            self.scalar_offset
        };
        let padding = subject
            .version_column()
            .map_or(0, |column| column.saturating_sub(offset));

        let line_ending = if subject.text.ends_with('\r') { "\r" } else { "" };
        let text = format!(
            "##{}# available{suffix}{line_ending}",
            " ".repeat(padding)
        );

        let annotation = Line::parse(subject.section.clone(), text);
        debug_assert_eq!(annotation.kind, LineKind::Delete);
        Some(annotation)
    }
}
