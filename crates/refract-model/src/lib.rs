/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Element tree types for refract parse results.
 *
 * This crate provides the data model for the result of parsing an
 * API-description document: a tree of elements in which parsed content is
 * interleaved with diagnostic annotations. It has minimal dependencies
 * (serde, serde_json, hashlink) and can be used by any crate that needs to
 * produce, inspect, or rewrite parse results.
 *
 * The element tree is a closed set of tagged variants behind a common
 * accessor surface: the specialized parse-result vocabulary (ParseResult,
 * Annotation, SourceMap) plus a generic element for everything else.
 * Diagnostics are data, not raised failures: consumers inspect
 * `ParseResult::errors` / `warnings` after parsing.
 */

pub mod annotation;
pub mod attributes;
pub mod element;
pub mod meta;
pub mod parse_result;
pub mod registry;
pub mod source_map;

// Re-export commonly used types at the crate root
pub use annotation::Annotation;
pub use attributes::Attributes;
pub use element::{Content, Element, GenericElement};
pub use meta::{Classes, Meta};
pub use parse_result::ParseResult;
pub use registry::{Constructor, Registry, default_registry};
pub use source_map::SourceMap;
