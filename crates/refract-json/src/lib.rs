//! # refract-json
//!
//! The canonical JSON wire form for refract element trees.
//!
//! Elements serialize to objects of the shape
//! `{"element": name, "meta": {...}, "attributes": {...}, "content": ...}`,
//! with empty `meta` and `attributes` sections omitted. Reading goes through
//! a [`refract_model::Registry`] so that registered element names come back
//! as their specialized kinds (a `parseResult` object deserializes to
//! [`refract_model::ParseResult`], not to a generic node).
//!
//! ## Example
//!
//! ```rust
//! use refract_json::parse_result_from_str;
//! use refract_model::default_registry;
//!
//! let input = r#"{
//!     "element": "parseResult",
//!     "content": [
//!         {
//!             "element": "annotation",
//!             "meta": {"classes": ["error"]},
//!             "attributes": {"code": {"element": "number", "content": 3.0}},
//!             "content": "missing field"
//!         }
//!     ]
//! }"#;
//!
//! let result = parse_result_from_str(input, default_registry()).unwrap();
//! assert!(result.has_errors());
//! ```

mod error;
mod reader;
mod writer;

pub use error::{ReadError, Result};
pub use reader::{
    element_from_json, element_from_str, parse_result_from_json, parse_result_from_str,
};
pub use writer::{element_to_json, to_json_string, write};
