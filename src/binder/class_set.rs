//! Active class sets.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// The presentation tags an element currently carries.
///
/// Ordered so that equal sets render and serialize identically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassSet(BTreeSet<String>);

impl ClassSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from class names.
    ///
    /// ```
    /// use panelkit::binder::ClassSet;
    ///
    /// let classes = ClassSet::of(["show", "success"]);
    /// assert!(classes.contains("show"));
    /// assert_eq!(classes.len(), 2);
    /// ```
    pub fn of<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(classes.into_iter().map(Into::into).collect())
    }

    pub fn contains(&self, class: &str) -> bool {
        self.0.contains(class)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl fmt::Display for ClassSet {
    /// Space separated, like a `class` attribute.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<&str> = self.iter().collect();
        f.write_str(&joined.join(" "))
    }
}
