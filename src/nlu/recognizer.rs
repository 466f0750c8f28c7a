//! CLU query execution
//!
//! `CluRecognizer` sends an utterance to the conversation-analysis
//! endpoint and normalizes whatever comes back. The contract is total:
//! `recognize` always returns a `Recognition`, collapsing every transport
//! and parse failure into the degraded variant. Each call is independent;
//! concurrent recognitions do not interfere.

use crate::core::config::QueryConfig;
use crate::core::error::Result;
use crate::nlu::result::{normalize, DegradedResult, Recognition};
use crate::nlu::transport::{AnalyzeTransport, HttpTransport};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

// Fixed analysis parameters. The service treats every call as a fresh
// single-turn conversation against this project/deployment pair.
const PROJECT_NAME: &str = "botLanguage";
const DEPLOYMENT_NAME: &str = "mydeployment";
const STRING_INDEX_TYPE: &str = "TextElement_V8";

/// Query executor for a CLU analyze endpoint
pub struct CluRecognizer {
    config: QueryConfig,
    transport: Arc<dyn AnalyzeTransport>,
}

impl CluRecognizer {
    /// Create a recognizer backed by the default reqwest transport
    pub fn new(config: QueryConfig) -> Self {
        Self::with_transport(config, Arc::new(HttpTransport::new()))
    }

    /// Create a recognizer with an injected transport
    ///
    /// Tests use this to substitute a deterministic capability for the
    /// network call.
    pub fn with_transport(config: QueryConfig, transport: Arc<dyn AnalyzeTransport>) -> Self {
        Self { config, transport }
    }

    /// Recognize intent and entities in an utterance
    ///
    /// Never fails. A successful round trip yields
    /// `Recognition::Understood`; any failure along the way — request
    /// construction, transport, non-2xx status, JSON parse — yields
    /// `Recognition::Degraded` with intent `"None"` and no entities. At
    /// the consuming layer a degraded result reads like a genuine
    /// no-match; that is the accepted tradeoff.
    pub async fn recognize(&self, text: &str) -> Recognition {
        match self.query(text).await {
            Ok(raw) => Recognition::Understood(normalize(text, &raw)),
            Err(e) => {
                tracing::warn!("CLU query failed, returning degraded result: {}", e);
                Recognition::Degraded(DegradedResult::default())
            }
        }
    }

    async fn query(&self, text: &str) -> Result<Value> {
        let body = serde_json::to_value(analyze_request(text, &self.config.language))?;
        self.transport
            .post_json(&self.config.endpoint_url, &self.config.api_key, body)
            .await
    }
}

/// Build the analyze request body for one utterance
///
/// The conversation/participant id only needs to exist, not to be stable:
/// a fresh one per call keeps calls fully independent at the service side.
fn analyze_request(text: &str, language: &str) -> AnalyzeRequest {
    let turn_id = Uuid::new_v4().to_string();
    AnalyzeRequest {
        kind: "Conversation",
        analysis_input: AnalysisInput {
            conversation_item: ConversationItem {
                id: turn_id.clone(),
                text: text.to_string(),
                modality: "text",
                language: language.to_string(),
                participant_id: turn_id,
            },
        },
        parameters: Parameters {
            project_name: PROJECT_NAME,
            verbose: true,
            deployment_name: DEPLOYMENT_NAME,
            string_index_type: STRING_INDEX_TYPE,
        },
    }
}

// Wire request format (conversation-analysis API)
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeRequest {
    kind: &'static str,
    analysis_input: AnalysisInput,
    parameters: Parameters,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalysisInput {
    conversation_item: ConversationItem,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ConversationItem {
    id: String,
    text: String,
    modality: &'static str,
    language: String,
    participant_id: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Parameters {
    project_name: &'static str,
    verbose: bool,
    deployment_name: &'static str,
    string_index_type: &'static str,
}
