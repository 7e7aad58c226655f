use std::time::Duration;

use search_nlp_core::ProviderError;
use search_nlp_core::error::require;

pub const DEFAULT_COHERE_BASE_URL: &str = "https://api.cohere.ai";
pub const DEFAULT_COHERE_EMBED_MODEL: &str = "embed-english-v3.0";
pub const DEFAULT_COHERE_RERANK_MODEL: &str = "rerank-english-v3.0";

pub const EMBED_PATH: &str = "/encoder/bi-encoder-embed";
pub const RERANK_PATH: &str = "/encoder/cross-encoder-scores";
pub const INTENT_PATH: &str = "/custom/intent-model";

/// How the Cohere backend answers intent prediction. Fixed per deployment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CohereIntentMode {
    /// Always returns `[0.0]`; no request is sent.
    #[default]
    Neutral,
    /// Forwards the query to an auxiliary intent server.
    Delegate { endpoint: String },
}

#[derive(Debug, Clone)]
pub struct CohereConfig {
    pub api_key: String,
    pub base_url: String,
    pub embed_model: String,
    pub rerank_model: String,
    pub intent: CohereIntentMode,
    /// Per-request deadline; `None` lets a call run until the server answers.
    pub timeout: Option<Duration>,
}

impl CohereConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_COHERE_BASE_URL.to_string(),
            embed_model: DEFAULT_COHERE_EMBED_MODEL.to_string(),
            rerank_model: DEFAULT_COHERE_RERANK_MODEL.to_string(),
            intent: CohereIntentMode::Neutral,
            timeout: None,
        }
    }

    pub fn validate(&self) -> Result<(), ProviderError> {
        require("cohere api_key", &self.api_key)?;
        require("cohere base_url", &self.base_url)?;
        require("cohere embed_model", &self.embed_model)?;
        require("cohere rerank_model", &self.rerank_model)?;
        if let CohereIntentMode::Delegate { endpoint } = &self.intent {
            require("cohere intent endpoint", endpoint)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct LocalModelServerConfig {
    pub embed_endpoint: String,
    pub rerank_endpoint: String,
    pub intent_endpoint: String,
    pub model_name: String,
    pub query_prefix: Option<String>,
    pub passage_prefix: Option<String>,
    pub normalize: bool,
    pub max_seq_length: usize,
    /// Per-request deadline; `None` lets a call run until the server answers.
    pub timeout: Option<Duration>,
}

impl LocalModelServerConfig {
    /// Endpoints are derived from the server root, e.g. `http://localhost:9000`.
    pub fn new(server_url: &str, model_name: impl Into<String>) -> Self {
        let root = server_url.trim_end_matches('/');
        Self {
            embed_endpoint: format!("{root}{EMBED_PATH}"),
            rerank_endpoint: format!("{root}{RERANK_PATH}"),
            intent_endpoint: format!("{root}{INTENT_PATH}"),
            model_name: model_name.into(),
            query_prefix: None,
            passage_prefix: None,
            normalize: true,
            max_seq_length: 512,
            timeout: None,
        }
    }

    pub fn validate(&self) -> Result<(), ProviderError> {
        require("model server embed_endpoint", &self.embed_endpoint)?;
        require("model server rerank_endpoint", &self.rerank_endpoint)?;
        require("model server intent_endpoint", &self.intent_endpoint)?;
        require("model server model_name", &self.model_name)?;
        if self.max_seq_length == 0 {
            return Err(ProviderError::Configuration(
                "model server max_seq_length must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub enum ProviderConfig {
    Cohere(CohereConfig),
    LocalModelServer(LocalModelServerConfig),
}
