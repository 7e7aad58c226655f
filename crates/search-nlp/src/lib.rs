pub mod settings;

pub use search_nlp_core::*;
pub use search_nlp_providers::{
    CohereConfig, CohereIntentMode, CohereProvider, LocalModelServerConfig,
    LocalModelServerProvider, ProviderConfig, build_nlp_provider,
};
pub use settings::NlpSettings;
