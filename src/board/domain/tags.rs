//! Ordered, duplicate-free tag labels attached to a task.

use serde::{Deserialize, Serialize};

/// Ordered set of free-text labels.
///
/// Labels are trimmed on insertion. Blank labels and labels already present
/// are ignored, so insertion order is preserved without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct TaskTags(Vec<String>);

impl TaskTags {
    /// Creates an empty tag set.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Inserts a label, returning `true` when it was added.
    pub fn insert(&mut self, label: &str) -> bool {
        let trimmed = label.trim();
        if trimmed.is_empty() || self.contains(trimmed) {
            return false;
        }
        self.0.push(trimmed.to_owned());
        true
    }

    /// Removes a label, returning `true` when it was present.
    pub fn remove(&mut self, label: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|existing| existing != label.trim());
        self.0.len() != before
    }

    /// Returns whether the label is present.
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.0.iter().any(|existing| existing == label)
    }

    /// Returns the labels in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Returns the number of labels.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether there are no labels.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for TaskTags {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut tags = Self::new();
        for label in iter {
            tags.insert(label.as_ref());
        }
        tags
    }
}

impl From<Vec<String>> for TaskTags {
    fn from(labels: Vec<String>) -> Self {
        labels.into_iter().collect()
    }
}

impl From<TaskTags> for Vec<String> {
    fn from(tags: TaskTags) -> Self {
        tags.0
    }
}
