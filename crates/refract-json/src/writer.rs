/*
 * writer.rs
 * Copyright (c) 2025 Posit, PBC
 */

use refract_model::{Attributes, Content, Element, Meta};
use serde_json::{Map, Value};

/// Serialize an element tree to its JSON wire form.
pub fn element_to_json(element: &Element) -> Value {
    let mut object = Map::new();
    object.insert("element".to_string(), Value::String(element.name().to_string()));

    let meta = meta_to_json(element.meta());
    if !meta.is_empty() {
        object.insert("meta".to_string(), Value::Object(meta));
    }

    if !element.attributes().is_empty() {
        object.insert(
            "attributes".to_string(),
            Value::Object(attributes_to_json(element.attributes())),
        );
    }

    if let Some(content) = content_to_json(element) {
        object.insert("content".to_string(), content);
    }

    Value::Object(object)
}

/// Serialize an element tree to a compact JSON string.
pub fn to_json_string(element: &Element) -> String {
    element_to_json(element).to_string()
}

/// Write an element tree as compact JSON followed by a newline.
pub fn write<T: std::io::Write>(element: &Element, out: &mut T) -> std::io::Result<()> {
    serde_json::to_writer(&mut *out, &element_to_json(element))
        .map_err(std::io::Error::other)?;
    out.write_all(b"\n")
}

fn meta_to_json(meta: &Meta) -> Map<String, Value> {
    let mut object = Map::new();
    if let Some(id) = &meta.id {
        object.insert("id".to_string(), Value::String(id.clone()));
    }
    if let Some(title) = &meta.title {
        object.insert("title".to_string(), Value::String(title.clone()));
    }
    if !meta.classes.is_empty() {
        // Classes serialize as a plain string array (the compact legacy
        // shape), not as an array of string elements.
        object.insert(
            "classes".to_string(),
            Value::Array(
                meta.classes
                    .iter()
                    .map(|class| Value::String(class.to_string()))
                    .collect(),
            ),
        );
    }
    object
}

fn attributes_to_json(attributes: &Attributes) -> Map<String, Value> {
    attributes
        .iter()
        .map(|(key, value)| (key.to_string(), element_to_json(value)))
        .collect()
}

fn content_to_json(element: &Element) -> Option<Value> {
    match element {
        // Array-type elements always carry their content, even when empty
        Element::ParseResult(_) | Element::SourceMap(_) => Some(Value::Array(
            element.children().iter().map(element_to_json).collect(),
        )),
        Element::Annotation(annotation) => Some(Value::String(annotation.content.clone())),
        Element::Generic(generic) => match &generic.content {
            Content::Null => None,
            Content::Boolean(value) => Some(Value::Bool(*value)),
            Content::Number(value) => Some(Value::from(*value)),
            Content::String(value) => Some(Value::String(value.clone())),
            Content::Elements(children) => {
                Some(Value::Array(children.iter().map(element_to_json).collect()))
            }
        },
    }
}
