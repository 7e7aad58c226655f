use reqwest::Client;
use search_nlp_core::http::{build_client, send_json};
use search_nlp_core::{EmbedTextType, IntentRequest, IntentResponse, NlpProvider, ProviderError};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::{CohereConfig, CohereIntentMode};

/// Cohere hosted API backend.
///
/// Rerank scores are returned in the order Cohere lists its results. The
/// per-result `index` is not used to restore the caller's passage order, so
/// callers must not assume `scores[i]` belongs to `passages[i]`.
#[derive(Clone)]
pub struct CohereProvider {
    config: CohereConfig,
    client: Client,
}

impl CohereProvider {
    pub fn new(config: CohereConfig) -> Result<Self, ProviderError> {
        config.validate()?;
        let client = build_client(config.timeout)?;
        Ok(Self { config, client })
    }

    pub fn intent_mode(&self) -> &CohereIntentMode {
        &self.config.intent
    }

    fn input_type(text_type: EmbedTextType) -> &'static str {
        match text_type {
            EmbedTextType::Passage => "search_document",
            EmbedTextType::Query => "search_query",
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait::async_trait]
impl NlpProvider for CohereProvider {
    fn name(&self) -> &'static str {
        "cohere"
    }

    async fn embed(
        &self,
        texts: &[String],
        text_type: EmbedTextType,
    ) -> Result<Vec<Vec<f32>>, ProviderError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        debug!(
            provider = self.name(),
            model = %self.config.embed_model,
            count = texts.len(),
            %text_type,
            "embedding texts"
        );

        let payload = CohereEmbedRequest {
            texts,
            input_type: Self::input_type(text_type),
            model: &self.config.embed_model,
        };
        let request = self
            .client
            .post(self.endpoint("/v1/embed"))
            .bearer_auth(&self.config.api_key)
            .json(&payload);

        let parsed: CohereEmbedResponse = send_json(self.name(), request).await?;
        Ok(parsed.embeddings)
    }

    async fn rerank(
        &self,
        query: &str,
        passages: &[String],
    ) -> Result<Vec<Vec<f32>>, ProviderError> {
        if passages.is_empty() {
            return Ok(Vec::new());
        }
        debug!(
            provider = self.name(),
            model = %self.config.rerank_model,
            count = passages.len(),
            "reranking passages"
        );

        let payload = CohereRerankRequest {
            query,
            passages,
            model: &self.config.rerank_model,
        };
        let request = self
            .client
            .post(self.endpoint("/v1/rerank"))
            .bearer_auth(&self.config.api_key)
            .json(&payload);

        let parsed: CohereRerankResponse = send_json(self.name(), request).await?;
        if parsed.results.len() != passages.len() {
            warn!(
                provider = self.name(),
                expected = passages.len(),
                got = parsed.results.len(),
                "rerank result count differs from passage count"
            );
        }

        Ok(parsed
            .results
            .into_iter()
            .map(|it| vec![it.relevance_score])
            .collect())
    }

    async fn predict_intent(&self, query: &str) -> Result<Vec<f32>, ProviderError> {
        match &self.config.intent {
            CohereIntentMode::Neutral => Ok(vec![0.0]),
            CohereIntentMode::Delegate { endpoint } => {
                debug!(provider = self.name(), %endpoint, "delegating intent prediction");
                let request = self.client.post(endpoint).json(&IntentRequest {
                    query: query.to_string(),
                });
                let parsed: IntentResponse = send_json(self.name(), request).await?;
                Ok(parsed.class_probs)
            }
        }
    }
}

#[derive(Debug, Serialize)]
struct CohereEmbedRequest<'a> {
    texts: &'a [String],
    input_type: &'static str,
    model: &'a str,
}

#[derive(Debug, Deserialize)]
struct CohereEmbedResponse {
    embeddings: Vec<Vec<f32>>,
}

#[derive(Debug, Serialize)]
struct CohereRerankRequest<'a> {
    query: &'a str,
    passages: &'a [String],
    model: &'a str,
}

#[derive(Debug, Deserialize)]
struct CohereRerankResponse {
    results: Vec<CohereRerankItem>,
}

// `index` and any other per-result fields are ignored.
#[derive(Debug, Deserialize)]
struct CohereRerankItem {
    relevance_score: f32,
}
