use pulse_core::{CoreError, InferenceConfig, InferenceError, Sentiment, VerdictDetails};
use sentiment_engine::{
    normalize_text, HeuristicClassifier, HuggingFaceClassifier, SentimentClassifier,
    SentimentPipeline,
};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MODEL_PATH: &str = "/models/cardiffnlp/test-sentiment";
const SAMPLE: &str = "I absolutely love this, it's amazing and wonderful";

fn config_for(server: &MockServer) -> InferenceConfig {
    InferenceConfig {
        api_url: format!("{}{}", server.uri(), MODEL_PATH),
        api_key: Some("test-key".to_string()),
        timeout_secs: 1,
    }
}

fn pipeline_for(server: &MockServer) -> SentimentPipeline {
    let classifier = HuggingFaceClassifier::new(&config_for(server)).unwrap();
    SentimentPipeline::new(Arc::new(classifier))
}

#[tokio::test]
async fn test_successful_classification() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .and(header("authorization", "Bearer test-key"))
        .and(body_json(json!({ "inputs": normalize_text(SAMPLE) })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([[
            {"label": "LABEL_2", "score": 0.97},
            {"label": "LABEL_1", "score": 0.02},
            {"label": "LABEL_0", "score": 0.01}
        ]])))
        .expect(1)
        .mount(&server)
        .await;

    let verdict = pipeline_for(&server).analyze(SAMPLE).await;

    assert_eq!(verdict.sentiment, Sentiment::Positive);
    assert_eq!(verdict.confidence, 0.97);
    match verdict.details {
        VerdictDetails::Predictions(predictions) => assert_eq!(predictions.len(), 3),
        other => panic!("unexpected details: {other:?}"),
    }
}

#[tokio::test]
async fn test_low_confidence_is_neutral() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"label": "LABEL_0", "score": 0.38},
            {"label": "LABEL_2", "score": 0.33},
            {"label": "LABEL_1", "score": 0.29}
        ])))
        .mount(&server)
        .await;

    let verdict = pipeline_for(&server).analyze(SAMPLE).await;
    assert_eq!(verdict.sentiment, Sentiment::Neutral);
    assert_eq!(verdict.confidence, 0.38);
}

#[tokio::test]
async fn test_failures_match_heuristic_output() {
    let expected = HeuristicClassifier::new().score(&normalize_text(SAMPLE));
    let failures = vec![
        ResponseTemplate::new(429),
        ResponseTemplate::new(403),
        ResponseTemplate::new(503).set_body_json(json!({"error": "Model is currently loading"})),
        ResponseTemplate::new(404),
        ResponseTemplate::new(500),
        ResponseTemplate::new(200).set_body_string("not json"),
        ResponseTemplate::new(200).set_body_json(json!({"label": "LABEL_2", "score": 0.9})),
        ResponseTemplate::new(200).set_body_json(json!([])),
        ResponseTemplate::new(200).set_body_json(json!([{"label": "LABEL_2"}])),
        ResponseTemplate::new(200)
            .set_delay(Duration::from_secs(3))
            .set_body_json(json!([{"label": "LABEL_2", "score": 0.9}])),
    ];

    for (index, template) in failures.into_iter().enumerate() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(MODEL_PATH))
            .respond_with(template)
            .mount(&server)
            .await;

        let verdict = pipeline_for(&server).analyze(SAMPLE).await;
        assert_eq!(verdict, expected, "failure case {}", index);
    }
}

#[tokio::test]
async fn test_status_errors_are_typed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let classifier = HuggingFaceClassifier::new(&config_for(&server)).unwrap();
    let result = classifier.classify("long enough text").await;

    assert!(matches!(
        result,
        Err(CoreError::Inference(InferenceError::ModelLoading { .. }))
    ));
}

#[tokio::test]
async fn test_timeout_is_typed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&server)
        .await;

    let classifier = HuggingFaceClassifier::new(&config_for(&server)).unwrap();
    let result = classifier.classify("long enough text").await;

    assert!(matches!(
        result,
        Err(CoreError::Inference(InferenceError::RequestTimeout { .. }))
    ));
}

#[tokio::test]
async fn test_short_text_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let verdict = pipeline_for(&server).analyze("   ?!  ok  ").await;

    assert_eq!(verdict.sentiment, Sentiment::Neutral);
    assert_eq!(verdict.confidence, 0.0);
    assert!(verdict.details.is_empty());
}

#[tokio::test]
async fn test_unreachable_service_falls_back() {
    let config = InferenceConfig {
        api_url: "http://127.0.0.1:9/models/unreachable".to_string(),
        api_key: Some("test-key".to_string()),
        timeout_secs: 1,
    };
    let pipeline = SentimentPipeline::new(Arc::new(HuggingFaceClassifier::new(&config).unwrap()));

    let verdict = pipeline.analyze("This is terrible and I hate it").await;
    assert_eq!(verdict.sentiment, Sentiment::Negative);
    assert!(matches!(verdict.details, VerdictDetails::Heuristic(_)));
}
