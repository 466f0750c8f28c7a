//! Query configuration for the CLU endpoint
//!
//! All values arrive already resolved — whoever constructs the config is
//! responsible for loading and validating credentials. The config is
//! immutable after construction and owned by the recognizer.

use std::fmt;

/// Configuration for a CLU analyze endpoint
///
/// Created once, read-only thereafter. Cloning is cheap enough for the
/// handful of recognizers an application creates.
#[derive(Clone)]
pub struct QueryConfig {
    /// Full URL of the conversation-analysis endpoint
    pub endpoint_url: String,
    /// BCP-47 language tag sent with each utterance
    pub language: String,
    /// Subscription key, sent as the `Ocp-Apim-Subscription-Key` header
    pub api_key: String,
}

impl QueryConfig {
    /// Create a config with the default language ("en")
    pub fn new(endpoint_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            endpoint_url: endpoint_url.into(),
            language: "en".to_string(),
            api_key: api_key.into(),
        }
    }

    /// Override the utterance language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}

// The key is a secret; keep it out of Debug output and logs.
impl fmt::Debug for QueryConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryConfig")
            .field("endpoint_url", &self.endpoint_url)
            .field("language", &self.language)
            .field("api_key", &"<redacted>")
            .finish()
    }
}
