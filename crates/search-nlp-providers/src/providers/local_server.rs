use reqwest::Client;
use search_nlp_core::http::{build_client, send_json};
use search_nlp_core::{
    EmbedRequest, EmbedResponse, EmbedTextType, IntentRequest, IntentResponse, NlpProvider,
    ProviderError, RerankRequest, RerankResponse,
};
use tracing::debug;

use crate::config::LocalModelServerConfig;

/// Self-hosted model server backend.
#[derive(Clone)]
pub struct LocalModelServerProvider {
    config: LocalModelServerConfig,
    client: Client,
}

impl LocalModelServerProvider {
    pub fn new(config: LocalModelServerConfig) -> Result<Self, ProviderError> {
        config.validate()?;
        let client = build_client(config.timeout)?;
        Ok(Self { config, client })
    }

    fn prefix_for(&self, text_type: EmbedTextType) -> Option<&str> {
        let prefix = match text_type {
            EmbedTextType::Query => self.config.query_prefix.as_deref(),
            EmbedTextType::Passage => self.config.passage_prefix.as_deref(),
        };
        prefix.filter(|p| !p.is_empty())
    }

    fn prepare_texts(&self, texts: &[String], text_type: EmbedTextType) -> Vec<String> {
        match self.prefix_for(text_type) {
            Some(prefix) => texts.iter().map(|t| format!("{prefix}{t}")).collect(),
            None => texts.to_vec(),
        }
    }
}

#[async_trait::async_trait]
impl NlpProvider for LocalModelServerProvider {
    fn name(&self) -> &'static str {
        "local-model-server"
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
            model = %self.config.model_name,
            count = texts.len(),
            %text_type,
            "embedding texts"
        );

        let payload = EmbedRequest {
            texts: self.prepare_texts(texts, text_type),
            model_name: self.config.model_name.clone(),
            max_context_length: self.config.max_seq_length,
            normalize_embeddings: self.config.normalize,
        };
        let request = self.client.post(&self.config.embed_endpoint).json(&payload);

        let parsed: EmbedResponse = send_json(self.name(), request).await?;
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
        debug!(provider = self.name(), count = passages.len(), "reranking passages");

        let payload = RerankRequest {
            query: query.to_string(),
            documents: passages.to_vec(),
        };
        let request = self
            .client
            .post(&self.config.rerank_endpoint)
            .json(&payload);

        let parsed: RerankResponse = send_json(self.name(), request).await?;
        Ok(parsed.scores)
    }

    async fn predict_intent(&self, query: &str) -> Result<Vec<f32>, ProviderError> {
        debug!(provider = self.name(), "predicting intent");
        let request = self
            .client
            .post(&self.config.intent_endpoint)
            .json(&IntentRequest {
                query: query.to_string(),
            });

        let parsed: IntentResponse = send_json(self.name(), request).await?;
        Ok(parsed.class_probs)
    }
}
