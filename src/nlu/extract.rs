//! Slot extraction from the recognized entity mapping
//!
//! The service reports each entity category twice: a typed occurrence
//! list under the category name, and a `$instance` metadata record giving
//! the literal text span that backed occurrence 0. City names come from
//! the metadata channel; airport codes come from the nested `Airport`
//! sub-entity of occurrence 0. Any level may be missing, so every
//! accessor short-circuits to `None` instead of failing.

use crate::nlu::result::RecognitionResult;
use serde_json::{Map, Value};

/// Origin slot: city text span plus optional airport qualifier
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OriginSlot {
    pub from: Option<String>,
    pub airport: Option<String>,
}

/// Destination slot, mirroring [`OriginSlot`]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DestinationSlot {
    pub to: Option<String>,
    pub airport: Option<String>,
}

/// Matched text span for `category` from the `$instance` metadata channel
fn instance_text(entities: &Map<String, Value>, category: &str) -> Option<String> {
    entities
        .get("$instance")?
        .get(category)?
        .get(0)?
        .get("text")?
        .as_str()
        .map(String::from)
}

/// First value of the `Airport` sub-entity under occurrence 0 of `category`
fn airport_code(entities: &Map<String, Value>, category: &str) -> Option<String> {
    entities
        .get(category)?
        .get(0)?
        .get("Airport")?
        .get(0)?
        .get(0)?
        .as_str()
        .map(String::from)
}

/// Extract the origin city and airport from a recognition
///
/// The airport is only consulted once a city span resolved: an airport
/// qualifier is meaningless without a city, even when the raw mapping
/// happens to carry one.
pub fn extract_origin(result: &RecognitionResult) -> OriginSlot {
    let from = instance_text(&result.entities, "From");
    let airport = match from {
        Some(_) => airport_code(&result.entities, "From"),
        None => None,
    };
    OriginSlot { from, airport }
}

/// Extract the destination city and airport, mirrored on `To`
pub fn extract_destination(result: &RecognitionResult) -> DestinationSlot {
    let to = instance_text(&result.entities, "To");
    let airport = match to {
        Some(_) => airport_code(&result.entities, "To"),
        None => None,
    };
    DestinationSlot { to, airport }
}

/// Extract the travel date from the `datetime` entity
///
/// The value is a TIMEX expression. Only the calendar date matters here,
/// so the first TIMEX is split on the ISO `T` divider and the time part
/// dropped. TIMEX allows under-specified dates (e.g. a missing year); no
/// well-formedness check is applied.
pub fn extract_travel_date(result: &RecognitionResult) -> Option<String> {
    let timex = result
        .entities
        .get("datetime")?
        .get(0)?
        .get("timex")?
        .get(0)?
        .as_str()?;

    timex.split('T').next().map(String::from)
}
