//! Ordered, deduplicated set of selected interface identifiers.

use std::fmt;

/// Interface identifiers chosen by the operator, in selection order.
///
/// Append-only and deduplicated: inserting an identifier that is already
/// present leaves the set unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: Vec<String>,
}

impl SelectionSet {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self { ids: Vec::new() }
    }

    /// Appends `id` unless it is already selected.
    ///
    /// Returns `true` if the identifier was added.
    pub fn insert(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.contains(&id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Returns true if `id` is already selected.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|s| s == id)
    }

    /// Returns the number of selected identifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns true if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Returns the identifiers in selection order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.ids
    }

    /// Joins the identifiers with `,` for the companion script.
    ///
    /// Returns an empty string when nothing is selected.
    #[must_use]
    pub fn to_csv(&self) -> String {
        self.ids.join(",")
    }
}

impl fmt::Display for SelectionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.ids.join(", "))
    }
}

impl<S: Into<String>> FromIterator<S> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for id in iter {
            set.insert(id);
        }
        set
    }
}

impl IntoIterator for SelectionSet {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.into_iter()
    }
}
