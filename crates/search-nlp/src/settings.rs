//! Process-level configuration, resolved once from environment variables.
//!
//! This is the only module that reads ambient process state. Everything below
//! it receives an explicit [`ProviderConfig`].

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use search_nlp_core::{NlpProvider, ProviderError};
use search_nlp_providers::{
    CohereConfig, CohereIntentMode, LocalModelServerConfig, ProviderConfig, build_nlp_provider,
};
use tracing::info;

const DEFAULT_MODEL_SERVER_HOST: &str = "localhost";
const DEFAULT_MODEL_SERVER_PORT: u16 = 9000;
const DEFAULT_DOCUMENT_ENCODER_MODEL: &str = "intfloat/e5-base-v2";
const DEFAULT_QUERY_PREFIX: &str = "query: ";
const DEFAULT_PASSAGE_PREFIX: &str = "passage: ";
const DEFAULT_CONTEXT_SIZE: usize = 512;

#[derive(Debug, Clone)]
pub struct NlpSettings {
    pub provider: ProviderConfig,
}

impl NlpSettings {
    pub fn from_env() -> Result<Self, ProviderError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ProviderError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Blank values count as unset.
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let timeout = parse_var::<u64>(&lookup, "NLP_REQUEST_TIMEOUT_SECS")?.map(Duration::from_secs);

        let kind = var("NLP_PROVIDER").unwrap_or_else(|| "local".to_string());
        let provider = match kind.to_ascii_lowercase().as_str() {
            "cohere" => {
                let mut cfg = CohereConfig::new(var("COHERE_API_KEY").unwrap_or_default());
                if let Some(url) = var("COHERE_BASE_URL") {
                    cfg.base_url = url;
                }
                if let Some(model) = var("COHERE_EMBED_MODEL") {
                    cfg.embed_model = model;
                }
                if let Some(model) = var("COHERE_RERANK_MODEL") {
                    cfg.rerank_model = model;
                }
                if let Some(endpoint) = var("COHERE_INTENT_ENDPOINT") {
                    cfg.intent = CohereIntentMode::Delegate { endpoint };
                }
                if let Some(t) = timeout {
                    cfg.timeout = Some(t);
                }
                ProviderConfig::Cohere(cfg)
            }
            "local" | "local-model-server" => {
                let host =
                    var("MODEL_SERVER_HOST").unwrap_or_else(|| DEFAULT_MODEL_SERVER_HOST.to_string());
                let port = parse_var::<u16>(&lookup, "MODEL_SERVER_PORT")?
                    .unwrap_or(DEFAULT_MODEL_SERVER_PORT);
                let model = var("DOCUMENT_ENCODER_MODEL")
                    .unwrap_or_else(|| DEFAULT_DOCUMENT_ENCODER_MODEL.to_string());

                let mut cfg = LocalModelServerConfig::new(&format!("http://{host}:{port}"), model);
                // Prefixes keep surrounding whitespace; an empty value disables prefixing.
                cfg.query_prefix = Some(
                    lookup("ASYM_QUERY_PREFIX").unwrap_or_else(|| DEFAULT_QUERY_PREFIX.to_string()),
                );
                cfg.passage_prefix = Some(
                    lookup("ASYM_PASSAGE_PREFIX")
                        .unwrap_or_else(|| DEFAULT_PASSAGE_PREFIX.to_string()),
                );
                cfg.normalize = parse_bool(&lookup, "NORMALIZE_EMBEDDINGS")?.unwrap_or(true);
                cfg.max_seq_length = parse_var::<usize>(&lookup, "DOC_EMBEDDING_CONTEXT_SIZE")?
                    .unwrap_or(DEFAULT_CONTEXT_SIZE);
                if let Some(t) = timeout {
                    cfg.timeout = Some(t);
                }
                ProviderConfig::LocalModelServer(cfg)
            }
            other => {
                return Err(ProviderError::Configuration(format!(
                    "NLP_PROVIDER must be cohere or local, got {other:?}"
                )));
            }
        };

        Ok(Self { provider })
    }

    pub fn build(self) -> Result<Arc<dyn NlpProvider>, ProviderError> {
        let provider = build_nlp_provider(self.provider)?;
        info!(provider = provider.name(), "nlp provider ready");
        Ok(provider)
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Option<T>, ProviderError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    raw.trim()
        .parse::<T>()
        .map(Some)
        .map_err(|e| ProviderError::Configuration(format!("{key}={raw:?}: {e}")))
}

fn parse_bool(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Option<bool>, ProviderError> {
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(Some(true)),
        "0" | "false" | "no" => Ok(Some(false)),
        _ => Err(ProviderError::Configuration(format!(
            "{key}={raw:?}: expected a boolean"
        ))),
    }
}
