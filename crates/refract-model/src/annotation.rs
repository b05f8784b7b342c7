/*
 * annotation.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::attributes::Attributes;
use crate::element::{Element, source_map_value_of};
use crate::meta::Meta;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single diagnostic produced while parsing.
///
/// Annotations are text leaves carried inside a parse result alongside the
/// parsed content. Severity is a classification tag (`"warning"` /
/// `"error"`) assigned by the producer; this type only filters on it. The
/// machine-readable diagnostic code lives in the attribute map under
/// `"code"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub meta: Meta,
    pub attributes: Attributes,
    /// The human-readable message.
    pub content: String,
}

impl Annotation {
    pub fn new(message: impl Into<String>) -> Self {
        Annotation {
            meta: Meta::new(),
            attributes: Attributes::new(),
            content: message.into(),
        }
    }

    /// Create an annotation classified `"warning"` with a diagnostic code.
    pub fn warning(message: impl Into<String>, code: impl Into<Element>) -> Self {
        let mut annotation = Annotation::new(message);
        annotation.meta.classes.push("warning");
        annotation.set_code(code);
        annotation
    }

    /// Create an annotation classified `"error"` with a diagnostic code.
    pub fn error(message: impl Into<String>, code: impl Into<Element>) -> Self {
        let mut annotation = Annotation::new(message);
        annotation.meta.classes.push("error");
        annotation.set_code(code);
        annotation
    }

    pub fn message(&self) -> &str {
        &self.content
    }

    /// The diagnostic code, if one was set.
    pub fn code(&self) -> Option<&Element> {
        self.attributes.get("code")
    }

    pub fn set_code(&mut self, code: impl Into<Element>) {
        self.attributes.set("code", code);
    }

    pub fn is_warning(&self) -> bool {
        self.meta.classes.contains("warning")
    }

    pub fn is_error(&self) -> bool {
        self.meta.classes.contains("error")
    }

    /// The flattened source-map position attached to this annotation, if any.
    pub fn source_map_value(&self) -> Option<Value> {
        source_map_value_of(&self.attributes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_constructors_assign_class_and_code() {
        let warning = Annotation::warning("deprecated field", 6u64);
        assert!(warning.is_warning());
        assert!(!warning.is_error());
        assert_eq!(warning.message(), "deprecated field");
        assert_eq!(warning.code(), Some(&Element::number(6.0)));

        let error = Annotation::error("missing field", 3u64);
        assert!(error.is_error());
        assert!(!error.is_warning());
    }

    #[test]
    fn test_code_accepts_string_identifiers() {
        let mut annotation = Annotation::new("odd input");
        assert!(annotation.code().is_none());

        annotation.set_code("W-17");
        assert_eq!(annotation.code(), Some(&Element::string("W-17")));
        assert_eq!(annotation.code().map(Element::to_value), Some(json!("W-17")));
    }

    #[test]
    fn test_set_code_replaces() {
        let mut annotation = Annotation::error("bad", 1u64);
        annotation.set_code(2u64);
        assert_eq!(annotation.code(), Some(&Element::number(2.0)));
    }

    #[test]
    fn test_both_classes_permitted() {
        // Severity tagging is the producer's contract; nothing here enforces
        // mutual exclusivity.
        let mut annotation = Annotation::warning("ambivalent", 9u64);
        annotation.meta.classes.push("error");
        assert!(annotation.is_warning());
        assert!(annotation.is_error());
    }
}
