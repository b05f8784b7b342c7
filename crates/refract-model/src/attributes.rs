/*
 * attributes.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::element::Element;
use hashlink::LinkedHashMap;
use serde::{Deserialize, Serialize};

/// The key/value attribute map of an element.
///
/// Values are themselves elements, so attributes can carry structured data
/// (e.g. an attached source map). LinkedHashMap preserves insertion order,
/// which keeps serialized output stable across round trips.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Attributes(LinkedHashMap<String, Element>);

impl Attributes {
    pub fn new() -> Self {
        Attributes(LinkedHashMap::new())
    }

    pub fn get(&self, key: &str) -> Option<&Element> {
        self.0.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Element> {
        self.0.get_mut(key)
    }

    /// Set an attribute, returning the previous value if the key was taken.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Element>) -> Option<Element> {
        self.0.insert(key.into(), value.into())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Element)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut attributes = Attributes::new();
        assert!(attributes.get("code").is_none());

        attributes.set("code", Element::number(3.0));
        assert_eq!(attributes.get("code"), Some(&Element::number(3.0)));
    }

    #[test]
    fn test_set_returns_previous() {
        let mut attributes = Attributes::new();
        assert!(attributes.set("code", Element::number(3.0)).is_none());

        let previous = attributes.set("code", Element::number(4.0));
        assert_eq!(previous, Some(Element::number(3.0)));
        assert_eq!(attributes.get("code"), Some(&Element::number(4.0)));
    }

    #[test]
    fn test_iteration_preserves_insertion_order() {
        let mut attributes = Attributes::new();
        attributes.set("b", Element::string("second"));
        attributes.set("a", Element::string("first"));

        let keys: Vec<&str> = attributes.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["b", "a"]);
    }
}
