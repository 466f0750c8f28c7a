//! Property tests for response normalization and extraction
//!
//! The service's response shape is only loosely guaranteed, so the
//! invariants are pinned against arbitrary JSON: normalization is total,
//! the intent mapping is never empty and always carries the "None"
//! fallback, and the extractors never panic on any entity mapping.

use flight_nlu::nlu::extract::{extract_destination, extract_origin, extract_travel_date};
use flight_nlu::nlu::result::{normalize, RecognitionResult};

use proptest::prelude::*;
use serde_json::{json, Value};
use std::collections::HashMap;

/// Arbitrary JSON values, a few levels deep
fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        any::<f64>().prop_map(|f| json!(f)),
        "[a-zA-Z0-9 ]{0,12}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::hash_map("[a-zA-Z$]{0,10}", inner, 0..6)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

proptest! {
    #[test]
    fn normalize_is_total(text in ".{0,40}", raw in arb_json()) {
        let result = normalize(&text, &raw);
        prop_assert_eq!(result.text, text);
        prop_assert!(!result.intents.is_empty());
        prop_assert!(result.intents.contains_key("None"));
    }

    #[test]
    fn none_fallback_always_scores_low(raw in arb_json()) {
        let result = normalize("utterance", &raw);
        prop_assert_eq!(result.intents["None"].score, 0.01);
    }

    #[test]
    fn none_top_intent_collapses_to_single_entry(score in 0.0f64..=1.0) {
        // The overwrite quirk holds for every reported score.
        let raw = json!({
            "result": { "prediction": {
                "topIntent": "None",
                "intents": { "None": { "confidenceScore": score } }
            } }
        });
        let result = normalize("utterance", &raw);
        prop_assert_eq!(result.intents.len(), 1);
        prop_assert_eq!(result.intents["None"].score, 0.01);
    }

    #[test]
    fn named_top_intent_keeps_its_score(
        name in "[A-Za-z]{1,16}",
        score in 0.0f64..=1.0,
    ) {
        prop_assume!(name != "None");
        let raw = json!({
            "result": { "prediction": {
                "topIntent": name.clone(),
                "intents": { (name.clone()): { "confidenceScore": score } }
            } }
        });
        let result = normalize("utterance", &raw);
        prop_assert_eq!(result.intents.len(), 2);
        prop_assert_eq!(result.intents[&name].score, score);
        prop_assert_eq!(result.intents["None"].score, 0.01);
    }

    #[test]
    fn extractors_are_total(entities in arb_json()) {
        let result = RecognitionResult {
            text: String::new(),
            intents: HashMap::new(),
            entities: entities.as_object().cloned().unwrap_or_default(),
        };
        // Absence or malformation at any level must short-circuit, never
        // panic; a populated slot always implies its city is set.
        let origin = extract_origin(&result);
        prop_assert!(origin.from.is_some() || origin.airport.is_none());
        let destination = extract_destination(&result);
        prop_assert!(destination.to.is_some() || destination.airport.is_none());
        let _ = extract_travel_date(&result);
    }
}
