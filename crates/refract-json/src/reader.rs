/*
 * reader.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::error::{ReadError, Result};
use refract_model::{Attributes, Classes, Content, Element, Meta, ParseResult, Registry};
use serde_json::Value;

/// Read an element tree from its JSON wire form.
///
/// Element names registered in `registry` come back as their specialized
/// kinds; everything else becomes a generic element.
pub fn element_from_json(value: &Value, registry: &Registry) -> Result<Element> {
    let object = value.as_object().ok_or(ReadError::InvalidType {
        field: "element node".to_string(),
        expected: "object",
    })?;

    let name = object
        .get("element")
        .ok_or(ReadError::MissingField("element"))?
        .as_str()
        .ok_or_else(|| ReadError::InvalidType {
            field: "element".to_string(),
            expected: "string",
        })?;

    let meta = match object.get("meta") {
        Some(meta) => meta_from_json(meta)?,
        None => Meta::new(),
    };

    let attributes = match object.get("attributes") {
        Some(attributes) => attributes_from_json(attributes, registry)?,
        None => Attributes::new(),
    };

    let content = content_from_json(object.get("content"), registry)?;

    if !registry.contains(name) {
        tracing::debug!(
            "no registered constructor for element `{}`; constructing a generic node",
            name
        );
    }

    Ok(registry.construct(name, meta, attributes, content))
}

/// Read an element tree from a JSON string.
pub fn element_from_str(input: &str, registry: &Registry) -> Result<Element> {
    let value: Value = serde_json::from_str(input)?;
    element_from_json(&value, registry)
}

/// Read a document whose root must be a `parseResult` element.
pub fn parse_result_from_json(value: &Value, registry: &Registry) -> Result<ParseResult> {
    match element_from_json(value, registry)? {
        Element::ParseResult(parse_result) => Ok(parse_result),
        other => Err(ReadError::UnexpectedRoot(other.name().to_string())),
    }
}

/// Read a `parseResult` document from a JSON string.
pub fn parse_result_from_str(input: &str, registry: &Registry) -> Result<ParseResult> {
    let value: Value = serde_json::from_str(input)?;
    parse_result_from_json(&value, registry)
}

fn meta_from_json(value: &Value) -> Result<Meta> {
    let object = value.as_object().ok_or_else(|| ReadError::InvalidType {
        field: "meta".to_string(),
        expected: "object",
    })?;

    let mut meta = Meta::new();

    if let Some(id) = object.get("id") {
        meta.id = Some(
            id.as_str()
                .ok_or_else(|| ReadError::InvalidType {
                    field: "meta.id".to_string(),
                    expected: "string",
                })?
                .to_string(),
        );
    }

    if let Some(title) = object.get("title") {
        meta.title = Some(
            title
                .as_str()
                .ok_or_else(|| ReadError::InvalidType {
                    field: "meta.title".to_string(),
                    expected: "string",
                })?
                .to_string(),
        );
    }

    if let Some(classes) = object.get("classes") {
        let entries = classes.as_array().ok_or_else(|| ReadError::InvalidType {
            field: "meta.classes".to_string(),
            expected: "array of strings",
        })?;
        meta.classes = entries
            .iter()
            .map(|class| {
                class
                    .as_str()
                    .map(str::to_string)
                    .ok_or_else(|| ReadError::InvalidType {
                        field: "meta.classes".to_string(),
                        expected: "array of strings",
                    })
            })
            .collect::<Result<Classes>>()?;
    }

    Ok(meta)
}

fn attributes_from_json(value: &Value, registry: &Registry) -> Result<Attributes> {
    let object = value.as_object().ok_or_else(|| ReadError::InvalidType {
        field: "attributes".to_string(),
        expected: "object",
    })?;

    let mut attributes = Attributes::new();
    for (key, value) in object {
        attributes.set(key.clone(), element_from_json(value, registry)?);
    }
    Ok(attributes)
}

fn content_from_json(value: Option<&Value>, registry: &Registry) -> Result<Content> {
    match value {
        None | Some(Value::Null) => Ok(Content::Null),
        Some(Value::Bool(value)) => Ok(Content::Boolean(*value)),
        Some(Value::Number(number)) => {
            let value = number.as_f64().ok_or_else(|| ReadError::InvalidType {
                field: "content".to_string(),
                expected: "finite number",
            })?;
            Ok(Content::Number(value))
        }
        Some(Value::String(value)) => Ok(Content::String(value.clone())),
        Some(Value::Array(items)) => {
            let children = items
                .iter()
                .map(|item| element_from_json(item, registry))
                .collect::<Result<Vec<Element>>>()?;
            Ok(Content::Elements(children))
        }
        Some(Value::Object(_)) => Err(ReadError::InvalidType {
            field: "content".to_string(),
            expected: "null, boolean, number, string, or array of elements",
        }),
    }
}
