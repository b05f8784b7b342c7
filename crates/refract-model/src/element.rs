/*
 * element.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::annotation::Annotation;
use crate::attributes::Attributes;
use crate::meta::{Classes, Meta};
use crate::parse_result::ParseResult;
use crate::source_map::SourceMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Payload of a generic element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Content {
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
    Elements(Vec<Element>),
}

impl Content {
    pub fn is_null(&self) -> bool {
        matches!(self, Content::Null)
    }
}

/// An element with no specialized behavior.
///
/// Carries an arbitrary type name and one of the generic payloads. Parsed
/// content (categories, resources, plain strings and numbers) is represented
/// with generic elements; only the parse-result vocabulary gets dedicated
/// variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenericElement {
    pub name: String,
    pub meta: Meta,
    pub attributes: Attributes,
    pub content: Content,
}

impl GenericElement {
    pub fn new(name: impl Into<String>, content: Content) -> Self {
        GenericElement {
            name: name.into(),
            meta: Meta::new(),
            attributes: Attributes::new(),
            content,
        }
    }

    /// Add a classification tag.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.meta.classes.push(class);
        self
    }

    /// Set an attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Element>) -> Self {
        self.attributes.set(key, value);
        self
    }
}

/// A node in the parse-result tree.
///
/// The parse-result vocabulary is a closed set: the three specialized
/// element kinds plus a generic element for all other type names.
/// Specialized behavior (diagnostic filtering, the source-map value shape)
/// dispatches on the variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Element {
    ParseResult(ParseResult),
    Annotation(Annotation),
    SourceMap(SourceMap),
    Generic(GenericElement),
}

impl Element {
    pub fn null() -> Self {
        Element::Generic(GenericElement::new("null", Content::Null))
    }

    pub fn boolean(value: bool) -> Self {
        Element::Generic(GenericElement::new("boolean", Content::Boolean(value)))
    }

    pub fn number(value: f64) -> Self {
        Element::Generic(GenericElement::new("number", Content::Number(value)))
    }

    pub fn string(value: impl Into<String>) -> Self {
        Element::Generic(GenericElement::new("string", Content::String(value.into())))
    }

    pub fn array(children: Vec<Element>) -> Self {
        Element::Generic(GenericElement::new("array", Content::Elements(children)))
    }

    /// The element's type name (e.g. `"parseResult"`, `"string"`).
    pub fn name(&self) -> &str {
        match self {
            Element::ParseResult(_) => "parseResult",
            Element::Annotation(_) => "annotation",
            Element::SourceMap(_) => "sourceMap",
            Element::Generic(generic) => &generic.name,
        }
    }

    pub fn meta(&self) -> &Meta {
        match self {
            Element::ParseResult(parse_result) => &parse_result.meta,
            Element::Annotation(annotation) => &annotation.meta,
            Element::SourceMap(source_map) => &source_map.meta,
            Element::Generic(generic) => &generic.meta,
        }
    }

    pub fn meta_mut(&mut self) -> &mut Meta {
        match self {
            Element::ParseResult(parse_result) => &mut parse_result.meta,
            Element::Annotation(annotation) => &mut annotation.meta,
            Element::SourceMap(source_map) => &mut source_map.meta,
            Element::Generic(generic) => &mut generic.meta,
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            Element::ParseResult(parse_result) => &parse_result.attributes,
            Element::Annotation(annotation) => &annotation.attributes,
            Element::SourceMap(source_map) => &source_map.attributes,
            Element::Generic(generic) => &generic.attributes,
        }
    }

    pub fn attributes_mut(&mut self) -> &mut Attributes {
        match self {
            Element::ParseResult(parse_result) => &mut parse_result.attributes,
            Element::Annotation(annotation) => &mut annotation.attributes,
            Element::SourceMap(source_map) => &mut source_map.attributes,
            Element::Generic(generic) => &mut generic.attributes,
        }
    }

    /// Ordered child elements. Empty for text and scalar leaves.
    pub fn children(&self) -> &[Element] {
        match self {
            Element::ParseResult(parse_result) => &parse_result.content,
            Element::SourceMap(source_map) => &source_map.content,
            Element::Generic(GenericElement {
                content: Content::Elements(children),
                ..
            }) => children,
            _ => &[],
        }
    }

    pub fn classes(&self) -> &Classes {
        &self.meta().classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().contains(class)
    }

    pub fn is_annotation(&self) -> bool {
        matches!(self, Element::Annotation(_))
    }

    pub fn as_annotation(&self) -> Option<&Annotation> {
        match self {
            Element::Annotation(annotation) => Some(annotation),
            _ => None,
        }
    }

    pub fn as_parse_result(&self) -> Option<&ParseResult> {
        match self {
            Element::ParseResult(parse_result) => Some(parse_result),
            _ => None,
        }
    }

    pub fn as_source_map(&self) -> Option<&SourceMap> {
        match self {
            Element::SourceMap(source_map) => Some(source_map),
            _ => None,
        }
    }

    /// Recursively flatten this element to a plain JSON value.
    ///
    /// Source maps keep their two-level array shape (see
    /// [`SourceMap::to_value`]); everything else flattens structurally.
    pub fn to_value(&self) -> Value {
        match self {
            Element::ParseResult(parse_result) => {
                Value::Array(parse_result.content.iter().map(Element::to_value).collect())
            }
            Element::Annotation(annotation) => Value::String(annotation.content.clone()),
            Element::SourceMap(source_map) => source_map.to_value(),
            Element::Generic(generic) => match &generic.content {
                Content::Null => Value::Null,
                Content::Boolean(value) => Value::Bool(*value),
                Content::Number(value) => number_to_value(*value),
                Content::String(value) => Value::String(value.clone()),
                Content::Elements(children) => {
                    Value::Array(children.iter().map(Element::to_value).collect())
                }
            },
        }
    }

    /// The flattened source-map position attached to this element.
    ///
    /// Looks up the `"sourceMap"` attribute and returns the flattened value
    /// of its first child entry (the first position array). `None` when the
    /// attribute is absent or has no entries; never fails.
    pub fn source_map_value(&self) -> Option<Value> {
        source_map_value_of(self.attributes())
    }

    /// Attach a source map under the `"sourceMap"` attribute, in the shape
    /// [`Element::source_map_value`] reads back.
    pub fn attach_source_map(&mut self, source_map: SourceMap) {
        self.attributes_mut().set("sourceMap", source_map);
    }
}

/// Shared lookup behind [`Element::source_map_value`] and
/// [`Annotation::source_map_value`].
pub(crate) fn source_map_value_of(attributes: &Attributes) -> Option<Value> {
    attributes
        .get("sourceMap")
        .and_then(|source_map| source_map.children().first())
        .map(Element::to_value)
}

pub(crate) fn number_to_value(value: f64) -> Value {
    // Non-finite numbers have no JSON form
    serde_json::Number::from_f64(value)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

impl From<GenericElement> for Element {
    fn from(generic: GenericElement) -> Self {
        Element::Generic(generic)
    }
}

impl From<Annotation> for Element {
    fn from(annotation: Annotation) -> Self {
        Element::Annotation(annotation)
    }
}

impl From<ParseResult> for Element {
    fn from(parse_result: ParseResult) -> Self {
        Element::ParseResult(parse_result)
    }
}

impl From<SourceMap> for Element {
    fn from(source_map: SourceMap) -> Self {
        Element::SourceMap(source_map)
    }
}

impl From<&str> for Element {
    fn from(value: &str) -> Self {
        Element::string(value)
    }
}

impl From<String> for Element {
    fn from(value: String) -> Self {
        Element::string(value)
    }
}

impl From<bool> for Element {
    fn from(value: bool) -> Self {
        Element::boolean(value)
    }
}

impl From<f64> for Element {
    fn from(value: f64) -> Self {
        Element::number(value)
    }
}

impl From<i64> for Element {
    fn from(value: i64) -> Self {
        Element::number(value as f64)
    }
}

impl From<u64> for Element {
    fn from(value: u64) -> Self {
        Element::number(value as f64)
    }
}

impl From<Vec<Element>> for Element {
    fn from(children: Vec<Element>) -> Self {
        Element::array(children)
    }
}
