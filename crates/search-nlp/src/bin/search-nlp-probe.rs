use std::io::{self, Write};

use search_nlp::{EmbedTextType, NlpSettings, ProviderError};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: search-nlp-probe embed <query|passage> <text>... | rerank <query> <passage>... | intent <query>";

#[tokio::main]
async fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args).await {
        Ok(value) => {
            let mut out = io::stdout().lock();
            serde_json::to_writer(&mut out, &value)?;
            writeln!(out)
        }
        Err(err) => Err(io::Error::other(err.to_string())),
    }
}

async fn run(args: &[String]) -> Result<serde_json::Value, ProviderError> {
    let provider = NlpSettings::from_env()?.build()?;

    match args {
        [op, text_type, texts @ ..] if op == "embed" && !texts.is_empty() => {
            let text_type: EmbedTextType = text_type.parse()?;
            let vectors = provider.embed(texts, text_type).await?;
            Ok(serde_json::json!({ "embeddings": vectors }))
        }
        [op, query, passages @ ..] if op == "rerank" => {
            let scores = provider.rerank(query, passages).await?;
            Ok(serde_json::json!({ "scores": scores }))
        }
        [op, query] if op == "intent" => {
            let probs = provider.predict_intent(query).await?;
            Ok(serde_json::json!({ "class_probs": probs }))
        }
        _ => Err(ProviderError::InvalidArgument(USAGE.to_string())),
    }
}
