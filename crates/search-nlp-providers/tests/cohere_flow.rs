//! Wiremock tests for the Cohere backend wire mapping.

use search_nlp_providers::{
    CohereConfig, CohereIntentMode, CohereProvider, EmbedTextType, NlpProvider, ProviderError,
};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn provider(server: &MockServer) -> CohereProvider {
    let mut cfg = CohereConfig::new("test_key");
    cfg.base_url = server.uri();
    cfg.embed_model = "embed-test".to_string();
    cfg.rerank_model = "rerank-test".to_string();
    CohereProvider::new(cfg).expect("valid config")
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

#[tokio::test]
async fn embed_passages_returns_vectors_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/embed"))
        .and(header("Authorization", "Bearer test_key"))
        .and(body_json(serde_json::json!({
            "texts": ["a", "b"],
            "input_type": "search_document",
            "model": "embed-test",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "abc",
            "embeddings": [[0.1, 0.2], [0.3, 0.4]],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let out = provider(&server)
        .embed(&strings(&["a", "b"]), EmbedTextType::Passage)
        .await
        .expect("embed");
    assert_eq!(out, vec![vec![0.1, 0.2], vec![0.3, 0.4]]);
}

#[tokio::test]
async fn embed_query_uses_search_query_input_type() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/embed"))
        .and(body_json(serde_json::json!({
            "texts": ["what is rust"],
            "input_type": "search_query",
            "model": "embed-test",
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"embeddings": [[1.0]]})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let out = provider(&server)
        .embed(&strings(&["what is rust"]), EmbedTextType::Query)
        .await
        .expect("embed");
    assert_eq!(out.len(), 1);
}

#[tokio::test]
async fn empty_inputs_send_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let p = provider(&server);
    let embedded = p.embed(&[], EmbedTextType::Query).await.expect("embed");
    assert!(embedded.is_empty());
    let scores = p.rerank("q", &[]).await.expect("rerank");
    assert!(scores.is_empty());
}

#[tokio::test]
async fn rerank_keeps_backend_result_order() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/rerank"))
        .and(header("Authorization", "Bearer test_key"))
        .and(body_json(serde_json::json!({
            "query": "q",
            "passages": ["p1", "p2"],
            "model": "rerank-test",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [
                {"index": 1, "relevance_score": 0.7},
                {"index": 0, "relevance_score": 0.3},
            ],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let out = provider(&server)
        .rerank("q", &strings(&["p1", "p2"]))
        .await
        .expect("rerank");
    assert_eq!(out, vec![vec![0.7], vec![0.3]]);
}

#[tokio::test]
async fn server_error_surfaces_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/embed"))
        .respond_with(ResponseTemplate::new(500).set_body_string("server error"))
        .mount(&server)
        .await;

    let err = provider(&server)
        .embed(&strings(&["a"]), EmbedTextType::Passage)
        .await
        .expect_err("500 must fail");
    match err {
        ProviderError::BackendRequestFailed { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "server error");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn neutral_intent_mode_returns_zero_without_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let p = provider(&server);
    assert_eq!(p.intent_mode(), &CohereIntentMode::Neutral);
    let probs = p.predict_intent("anything").await.expect("intent");
    assert_eq!(probs, vec![0.0]);
}

#[tokio::test]
async fn delegate_intent_mode_forwards_query() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/custom/intent-model"))
        .and(body_json(serde_json::json!({"query": "how do I reset"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"class_probs": [0.1, 0.6, 0.3]})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut cfg = CohereConfig::new("test_key");
    cfg.base_url = server.uri();
    cfg.intent = CohereIntentMode::Delegate {
        endpoint: format!("{}/custom/intent-model", server.uri()),
    };
    let p = CohereProvider::new(cfg).expect("valid config");

    let probs = p.predict_intent("how do I reset").await.expect("intent");
    assert_eq!(probs, vec![0.1, 0.6, 0.3]);
}
