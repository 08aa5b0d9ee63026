//! Activity label table.
//!
//! Training logs carry the activity as free text. Only labels listed in an
//! [`ActivityLabels`] table are recognized; matching is exact and
//! case-sensitive. Everything else is [`ActivityKind::Unknown`].

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Walking,
    Running,
    Unknown,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityLabels {
    entries: Vec<(String, ActivityKind)>,
}

impl ActivityLabels {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, ActivityKind)>,
        S: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(label, kind)| (label.into(), kind))
                .collect(),
        }
    }

    /// Labels written by the training-log exporter.
    pub fn russian() -> Self {
        Self::new([("Бег", ActivityKind::Running), ("Ходьба", ActivityKind::Walking)])
    }

    pub fn english() -> Self {
        Self::new([
            ("Running", ActivityKind::Running),
            ("Walking", ActivityKind::Walking),
        ])
    }

    pub fn classify(&self, label: &str) -> ActivityKind {
        self.entries
            .iter()
            .find(|(known, _)| known == label)
            .map_or(ActivityKind::Unknown, |(_, kind)| *kind)
    }
}

impl Default for ActivityLabels {
    fn default() -> Self {
        Self::russian()
    }
}
