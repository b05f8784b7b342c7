/*
 * source_map.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::attributes::Attributes;
use crate::element::Element;
use crate::meta::Meta;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Nested source location ranges for an element.
///
/// An array element whose children are themselves arrays of numeric
/// position elements, typically `[offset, length]` pairs into the original
/// document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SourceMap {
    pub meta: Meta,
    pub attributes: Attributes,
    pub content: Vec<Element>,
}

impl SourceMap {
    pub fn new() -> Self {
        SourceMap::default()
    }

    /// Build a source map from `(offset, length)` pairs.
    pub fn from_ranges(ranges: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let content = ranges
            .into_iter()
            .map(|(offset, length)| {
                Element::array(vec![
                    Element::number(offset as f64),
                    Element::number(length as f64),
                ])
            })
            .collect();
        SourceMap {
            meta: Meta::new(),
            attributes: Attributes::new(),
            content,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Flatten to a nested numeric array.
    ///
    /// Each child array of position elements becomes an array of plain
    /// numbers, and the outer array an array of such arrays. The result is
    /// always exactly two levels deep — the shape a legacy serialization of
    /// source maps expects — rather than whatever depth generic flattening
    /// would produce.
    pub fn to_value(&self) -> Value {
        Value::Array(
            self.content
                .iter()
                .map(|entry| {
                    Value::Array(entry.children().iter().map(Element::to_value).collect())
                })
                .collect(),
        )
    }
}

impl FromIterator<Element> for SourceMap {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        SourceMap {
            meta: Meta::new(),
            attributes: Attributes::new(),
            content: iter.into_iter().collect(),
        }
    }
}
