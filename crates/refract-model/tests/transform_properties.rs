/*
 * transform_properties.rs
 *
 * Property tests for the parse-result transform invariants: content
 * rewriting never disturbs diagnostics.
 *
 * Copyright (c) 2025 Posit, PBC
 */

use proptest::prelude::*;
use refract_model::{Annotation, Element, ParseResult};

fn arb_annotation() -> impl Strategy<Value = Annotation> {
    (
        "[a-z ]{0,12}",
        prop::option::of(prop_oneof![Just("warning"), Just("error")]),
        0u64..100,
    )
        .prop_map(|(message, class, code)| {
            let mut annotation = Annotation::new(message);
            if let Some(class) = class {
                annotation.meta.classes.push(class);
            }
            annotation.set_code(code);
            annotation
        })
}

fn arb_content_element() -> impl Strategy<Value = Element> {
    let leaf = prop_oneof![
        Just(Element::null()),
        any::<bool>().prop_map(Element::boolean),
        (-1000i64..1000).prop_map(|n| Element::number(n as f64)),
        "[a-z]{0,8}".prop_map(Element::string),
    ];
    leaf.prop_recursive(3, 16, 4, |inner| {
        prop::collection::vec(inner, 0..4).prop_map(Element::array)
    })
}

fn arb_parse_result() -> impl Strategy<Value = ParseResult> {
    prop::collection::vec(
        prop_oneof![
            2 => arb_content_element(),
            1 => arb_annotation().prop_map(Element::from),
        ],
        0..8,
    )
    .prop_map(ParseResult::from_elements)
}

proptest! {
    #[test]
    fn map_element_preserves_length_and_annotations(result in arb_parse_result()) {
        let mapped = result.map_element(|element| Element::array(vec![element.clone()]));

        prop_assert_eq!(mapped.len(), result.len());
        for (original, transformed) in result.iter().zip(mapped.iter()) {
            if original.is_annotation() {
                prop_assert_eq!(original, transformed);
            } else {
                prop_assert_eq!(transformed, &Element::array(vec![original.clone()]));
            }
        }
    }

    #[test]
    fn map_element_transform_sees_only_content(result in arb_parse_result()) {
        let mut calls = 0usize;
        result.map_element(|element| {
            calls += 1;
            element.clone()
        });

        let annotation_count = result.annotations().count();
        prop_assert_eq!(calls, result.len() - annotation_count);
    }

    #[test]
    fn flat_map_element_preserves_annotation_sequence(result in arb_parse_result()) {
        let doubled =
            result.flat_map_element(|element| vec![element.clone(), element.clone()]);

        let original: Vec<&Annotation> = result.annotations().collect();
        let kept: Vec<&Annotation> = doubled.annotations().collect();
        prop_assert_eq!(original, kept);

        let annotation_count = result.annotations().count();
        prop_assert_eq!(
            doubled.len(),
            annotation_count + 2 * (result.len() - annotation_count)
        );
    }

    #[test]
    fn flat_map_element_empty_expansion_keeps_only_annotations(result in arb_parse_result()) {
        let pruned = result.flat_map_element(|_| vec![]);

        prop_assert_eq!(pruned.len(), result.annotations().count());
        prop_assert!(pruned.iter().all(Element::is_annotation));

        let original: Vec<&str> = result.annotations().map(Annotation::message).collect();
        let kept: Vec<&str> = pruned.annotations().map(Annotation::message).collect();
        prop_assert_eq!(original, kept);
    }

    #[test]
    fn try_map_element_fails_without_partial_result(result in arb_parse_result()) {
        let before = result.clone();
        let outcome: Result<ParseResult, &str> = result.try_map_element(|_| Err("no"));

        if result.annotations().count() == result.len() {
            // Nothing for the transform to touch; the rebuild succeeds
            prop_assert!(outcome.is_ok());
        } else {
            prop_assert_eq!(outcome, Err("no"));
        }
        prop_assert_eq!(before, result);
    }
}
