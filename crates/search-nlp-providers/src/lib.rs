pub mod config;
pub mod factory;
pub mod providers;

pub use config::*;
pub use factory::*;
pub use providers::{CohereProvider, LocalModelServerProvider};
pub use search_nlp_core::{EmbedTextType, NlpProvider, ProviderError};
