/*
 * parse_result.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::annotation::Annotation;
use crate::attributes::Attributes;
use crate::element::Element;
use crate::meta::Meta;
use serde::{Deserialize, Serialize};

/// The result of parsing an API-description document.
///
/// An ordered container mixing the parsed content elements (typically one
/// element classified `"api"`) with zero or more [`Annotation`] diagnostics,
/// in the order the parser emitted them. Child order is significant and is
/// preserved by every operation here.
///
/// Diagnostics are data: parsing problems surface through [`errors`] and
/// [`warnings`], not through raised failures. The transform operations
/// ([`map_element`], [`flat_map_element`]) rewrite content while passing
/// annotations through untouched, so a pipeline of content transforms can be
/// composed without corrupting diagnostics.
///
/// [`errors`]: ParseResult::errors
/// [`warnings`]: ParseResult::warnings
/// [`map_element`]: ParseResult::map_element
/// [`flat_map_element`]: ParseResult::flat_map_element
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ParseResult {
    pub meta: Meta,
    pub attributes: Attributes,
    pub content: Vec<Element>,
}

impl ParseResult {
    pub fn new() -> Self {
        ParseResult::default()
    }

    pub fn from_elements(content: Vec<Element>) -> Self {
        ParseResult {
            meta: Meta::new(),
            attributes: Attributes::new(),
            content,
        }
    }

    pub fn push(&mut self, element: impl Into<Element>) {
        self.content.push(element.into());
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.content.iter()
    }

    /// The first child classified `"api"`, if any.
    ///
    /// At most one such child is expected, but uniqueness is not enforced;
    /// with more than one, the first wins.
    pub fn api(&self) -> Option<&Element> {
        self.content.iter().find(|element| element.has_class("api"))
    }

    /// All annotation children, in document order.
    pub fn annotations(&self) -> impl Iterator<Item = &Annotation> {
        self.content.iter().filter_map(Element::as_annotation)
    }

    /// Annotations additionally classified `"warning"`, in document order.
    pub fn warnings(&self) -> impl Iterator<Item = &Annotation> {
        self.annotations().filter(|annotation| annotation.is_warning())
    }

    /// Annotations additionally classified `"error"`, in document order.
    pub fn errors(&self) -> impl Iterator<Item = &Annotation> {
        self.annotations().filter(|annotation| annotation.is_error())
    }

    /// True when at least one annotation is classified `"error"`.
    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    /// Rewrite non-annotation children with `transform`.
    ///
    /// Returns a new parse result with the same number of children in the
    /// same order. Annotations pass through unchanged; `transform` is never
    /// invoked on them.
    pub fn map_element<F>(&self, mut transform: F) -> ParseResult
    where
        F: FnMut(&Element) -> Element,
    {
        self.content
            .iter()
            .map(|element| {
                if element.is_annotation() {
                    element.clone()
                } else {
                    transform(element)
                }
            })
            .collect()
    }

    /// Fallible form of [`map_element`](ParseResult::map_element).
    ///
    /// The first failure aborts the whole operation and propagates verbatim;
    /// no partial result is produced and the receiver is untouched.
    pub fn try_map_element<F, E>(&self, mut transform: F) -> Result<ParseResult, E>
    where
        F: FnMut(&Element) -> Result<Element, E>,
    {
        self.content
            .iter()
            .map(|element| {
                if element.is_annotation() {
                    Ok(element.clone())
                } else {
                    transform(element)
                }
            })
            .collect()
    }

    /// Rewrite non-annotation children with `transform`, flattening the
    /// results.
    ///
    /// Each annotation is appended unchanged (strictly one-to-one); each
    /// other child expands to the full sequence `transform` returns, in
    /// order — possibly several elements, possibly none. Output order
    /// follows the relative order of the children that produced it.
    pub fn flat_map_element<F>(&self, mut transform: F) -> ParseResult
    where
        F: FnMut(&Element) -> Vec<Element>,
    {
        let mut result = ParseResult::new();
        for element in &self.content {
            if element.is_annotation() {
                result.push(element.clone());
            } else {
                result.content.extend(transform(element));
            }
        }
        result
    }

    /// Fallible form of [`flat_map_element`](ParseResult::flat_map_element).
    ///
    /// The first failure aborts the whole operation and propagates verbatim;
    /// no partial result is produced.
    pub fn try_flat_map_element<F, E>(&self, mut transform: F) -> Result<ParseResult, E>
    where
        F: FnMut(&Element) -> Result<Vec<Element>, E>,
    {
        let mut result = ParseResult::new();
        for element in &self.content {
            if element.is_annotation() {
                result.push(element.clone());
            } else {
                result.content.extend(transform(element)?);
            }
        }
        Ok(result)
    }
}

impl FromIterator<Element> for ParseResult {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        ParseResult::from_elements(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ParseResult {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.content.iter()
    }
}
