//! NLU adapter pipeline
//!
//! Utterance -> CluRecognizer -> Recognition -> slot extractors:
//! the recognizer queries the remote service and normalizes its response;
//! the extractors pull typed slots out of the entity mapping.

pub mod extract;
pub mod recognizer;
pub mod result;
pub mod transport;

pub use extract::{extract_destination, extract_origin, extract_travel_date};
pub use extract::{DestinationSlot, OriginSlot};
pub use recognizer::CluRecognizer;
pub use result::{DegradedResult, IntentScore, Recognition, RecognitionResult};
pub use transport::{AnalyzeTransport, HttpTransport};
