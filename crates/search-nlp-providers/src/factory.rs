use std::sync::Arc;

use search_nlp_core::{NlpProvider, ProviderError};

use crate::config::ProviderConfig;
use crate::providers::{CohereProvider, LocalModelServerProvider};

pub fn build_nlp_provider(cfg: ProviderConfig) -> Result<Arc<dyn NlpProvider>, ProviderError> {
    match cfg {
        ProviderConfig::Cohere(c) => Ok(Arc::new(CohereProvider::new(c)?)),
        ProviderConfig::LocalModelServer(c) => Ok(Arc::new(LocalModelServerProvider::new(c)?)),
    }
}
