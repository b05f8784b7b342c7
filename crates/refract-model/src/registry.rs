/*
 * registry.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::annotation::Annotation;
use crate::attributes::Attributes;
use crate::element::{Content, Element, GenericElement};
use crate::meta::Meta;
use crate::parse_result::ParseResult;
use crate::source_map::SourceMap;
use hashlink::LinkedHashMap;
use once_cell::sync::Lazy;

/// Builds a specialized element from its generic parts.
pub type Constructor = fn(Meta, Attributes, Content) -> Element;

/// Maps element names to constructors.
///
/// Generic tree construction (e.g. deserialization) consults the registry so
/// that registered names produce the specialized element kinds instead of
/// generic nodes. Registration is first-write-wins: a later `register` for a
/// taken name is a no-op rather than an overwrite, so re-registration never
/// clobbers a constructor installed earlier.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    constructors: LinkedHashMap<String, Constructor>,
}

impl Registry {
    pub fn new() -> Self {
        Registry::default()
    }

    /// A registry with the parse-result vocabulary registered:
    /// `parseResult`, `annotation`, `sourceMap`.
    pub fn with_defaults() -> Self {
        let mut registry = Registry::new();
        registry.register("parseResult", construct_parse_result);
        registry.register("annotation", construct_annotation);
        registry.register("sourceMap", construct_source_map);
        registry
    }

    /// Register a constructor for an element name.
    ///
    /// Returns `true` when the constructor was installed, `false` when the
    /// name was already taken (the existing constructor is kept).
    pub fn register(&mut self, name: impl Into<String>, constructor: Constructor) -> bool {
        let name = name.into();
        if self.constructors.contains_key(&name) {
            return false;
        }
        self.constructors.insert(name, constructor);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.constructors.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.constructors.keys().map(String::as_str)
    }

    /// Build an element for `name` from generic parts.
    ///
    /// Unregistered names produce a generic element carrying the name
    /// unchanged.
    pub fn construct(
        &self,
        name: &str,
        meta: Meta,
        attributes: Attributes,
        content: Content,
    ) -> Element {
        match self.constructors.get(name) {
            Some(constructor) => constructor(meta, attributes, content),
            None => Element::Generic(GenericElement {
                name: name.to_string(),
                meta,
                attributes,
                content,
            }),
        }
    }
}

/// The process-wide registry with the default vocabulary, built once on
/// first use and immutable afterwards. Callers needing additional
/// constructors build their own [`Registry`].
pub fn default_registry() -> &'static Registry {
    static DEFAULTS: Lazy<Registry> = Lazy::new(Registry::with_defaults);
    &DEFAULTS
}

fn construct_parse_result(meta: Meta, attributes: Attributes, content: Content) -> Element {
    match content {
        Content::Elements(children) => Element::ParseResult(ParseResult {
            meta,
            attributes,
            content: children,
        }),
        Content::Null => Element::ParseResult(ParseResult {
            meta,
            attributes,
            content: Vec::new(),
        }),
        // Scalar content has no parse-result reading; keep it as data
        other => Element::Generic(GenericElement {
            name: "parseResult".to_string(),
            meta,
            attributes,
            content: other,
        }),
    }
}

fn construct_annotation(meta: Meta, attributes: Attributes, content: Content) -> Element {
    match content {
        Content::String(message) => Element::Annotation(Annotation {
            meta,
            attributes,
            content: message,
        }),
        Content::Null => Element::Annotation(Annotation {
            meta,
            attributes,
            content: String::new(),
        }),
        other => Element::Generic(GenericElement {
            name: "annotation".to_string(),
            meta,
            attributes,
            content: other,
        }),
    }
}

fn construct_source_map(meta: Meta, attributes: Attributes, content: Content) -> Element {
    match content {
        Content::Elements(entries) => Element::SourceMap(SourceMap {
            meta,
            attributes,
            content: entries,
        }),
        Content::Null => Element::SourceMap(SourceMap {
            meta,
            attributes,
            content: Vec::new(),
        }),
        other => Element::Generic(GenericElement {
            name: "sourceMap".to_string(),
            meta,
            attributes,
            content: other,
        }),
    }
}
