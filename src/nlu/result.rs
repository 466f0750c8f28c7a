//! Canonical recognition result and response normalization
//!
//! The remote service returns a deeply nested, optionally-absent JSON
//! tree. `normalize` reduces it to the flat `RecognitionResult` shape the
//! rest of the application consumes. Every traversal step tolerates
//! absence; there is no path through normalization that fails.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Score attached to a recognized intent, in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntentScore {
    pub score: f64,
}

/// A successfully normalized recognition
///
/// Invariants: `intents` is never empty and always holds a `"None"`
/// entry; `entities` may be empty but is never absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognitionResult {
    /// The original utterance, unmodified
    pub text: String,
    /// Intent name -> score. Always contains `"None"`.
    pub intents: HashMap<String, IntentScore>,
    /// Raw entity mapping as returned by the service
    pub entities: Map<String, Value>,
}

impl RecognitionResult {
    /// The highest-scoring intent name
    pub fn top_intent(&self) -> &str {
        self.intents
            .iter()
            .max_by(|a, b| {
                a.1.score
                    .partial_cmp(&b.1.score)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|(name, _)| name.as_str())
            .unwrap_or("None")
    }

    /// Score of a named intent, if present
    pub fn score_of(&self, intent: &str) -> Option<f64> {
        self.intents.get(intent).map(|i| i.score)
    }
}

/// Payload of the failure path: intent `"None"`, no entities
///
/// Kept as its own type rather than a zeroed `RecognitionResult` so a
/// caller can never mistake a contained failure for a genuine no-match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DegradedResult {
    pub intent: String,
    pub entities: Map<String, Value>,
}

impl Default for DegradedResult {
    fn default() -> Self {
        Self {
            intent: "None".to_string(),
            entities: Map::new(),
        }
    }
}

/// Outcome of a recognize call
///
/// `Understood` carries a normalized result; `Degraded` is the contained
/// failure path (network error, non-JSON body, malformed response). The
/// recognizer never returns anything else and never fails.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Recognition {
    Understood(RecognitionResult),
    Degraded(DegradedResult),
}

impl Recognition {
    /// The normalized result, if the query succeeded
    pub fn understood(&self) -> Option<&RecognitionResult> {
        match self {
            Recognition::Understood(result) => Some(result),
            Recognition::Degraded(_) => None,
        }
    }
}

/// Fallback score when the service omits the top intent's confidence
const DEFAULT_SCORE: f64 = 0.99;
/// Score of the always-present "None" fallback entry
const NONE_SCORE: f64 = 0.01;

/// Reduce a raw analyze response to the canonical result shape
///
/// # Arguments
/// * `text` - The utterance that produced `raw`, copied through verbatim
/// * `raw` - The parsed JSON response body
///
/// Traversal is null-tolerant at every level: a missing or wrongly-typed
/// field yields its documented default (`"None"`, empty map, 0.99), never
/// an error.
pub fn normalize(text: &str, raw: &Value) -> RecognitionResult {
    let prediction = raw.get("result").and_then(|r| r.get("prediction"));

    let top_intent = prediction
        .and_then(|p| p.get("topIntent"))
        .and_then(Value::as_str)
        .unwrap_or("None");

    let entities = prediction
        .and_then(|p| p.get("entities"))
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default();

    let score = prediction
        .and_then(|p| p.get("intents"))
        .and_then(|i| i.get(top_intent))
        .and_then(|i| i.get("confidenceScore"))
        .and_then(Value::as_f64)
        .unwrap_or(DEFAULT_SCORE);

    let mut intents = HashMap::new();
    intents.insert(top_intent.to_string(), IntentScore { score });
    // When topIntent is itself "None" this overwrites the real score with
    // 0.01. Longstanding behavior; callers depend on it. Do not "fix".
    intents.insert("None".to_string(), IntentScore { score: NONE_SCORE });

    RecognitionResult {
        text: text.to_string(),
        intents,
        entities,
    }
}
