/*
 * meta.rs
 * Copyright (c) 2025 Posit, PBC
 */

use serde::{Deserialize, Serialize};

/// The classification tags of an element.
///
/// Classes are membership-tested labels (e.g. `"api"`, `"warning"`,
/// `"error"`), distinct from the element's type name. Storage preserves
/// insertion order so serialized output is stable, but consumers only ever
/// test membership.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Classes(Vec<String>);

impl Classes {
    pub fn new() -> Self {
        Classes(Vec::new())
    }

    /// Test whether a class is present.
    pub fn contains(&self, class: &str) -> bool {
        self.0.iter().any(|c| c == class)
    }

    /// Add a class. Duplicates are kept; membership tests are unaffected.
    pub fn push(&mut self, class: impl Into<String>) {
        self.0.push(class.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<Vec<String>> for Classes {
    fn from(classes: Vec<String>) -> Self {
        Classes(classes)
    }
}

impl FromIterator<String> for Classes {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Classes(iter.into_iter().collect())
    }
}

/// Element metadata: identity and classification.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Meta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Classes::is_empty", default)]
    pub classes: Classes,
}

impl Meta {
    pub fn new() -> Self {
        Meta::default()
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.title.is_none() && self.classes.is_empty()
    }
}
