use async_trait::async_trait;

use crate::error::ProviderError;
use crate::types::EmbedTextType;

/// Embedding, cross-encoder rerank and intent classification behind one backend.
///
/// Implementors are immutable after construction, so a single instance can be
/// shared across tasks. Every call is one independent round trip; nothing is
/// retried, cached or batched here.
#[async_trait]
pub trait NlpProvider: Send + Sync {
    fn name(&self) -> &'static str;

    /// Embeds `texts` in order. An empty slice yields an empty result with no
    /// request sent.
    async fn embed(
        &self,
        texts: &[String],
        text_type: EmbedTextType,
    ) -> Result<Vec<Vec<f32>>, ProviderError>;

    /// Scores each passage against `query`, one score vector per passage.
    ///
    /// Results come back in the order the backend returned them. Backends that
    /// may permute results do not guarantee alignment with `passages`.
    async fn rerank(&self, query: &str, passages: &[String])
    -> Result<Vec<Vec<f32>>, ProviderError>;

    /// Probability distribution over the deployment's intent labels.
    async fn predict_intent(&self, query: &str) -> Result<Vec<f32>, ProviderError>;
}
