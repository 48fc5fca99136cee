use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;

use rapidcare_gateway::application::ports::{ClassificationRelay, RelayError};
use rapidcare_gateway::domain::SentenceBatch;
use rapidcare_gateway::infrastructure::upstream::{
    ClassificationMode, HttpClassificationRelay, PLACEHOLDER_LABEL, UpstreamClient,
};

use crate::helpers::mock_upstream::start_mock_server;

const CLASSIFY_PATH: &str = "/classify";

type Received = Arc<Mutex<Vec<Vec<String>>>>;

/// Records every JSON batch and answers with `status` and `body`.
async fn start_classifier(
    status: StatusCode,
    body: &'static str,
) -> (String, Received, tokio::sync::oneshot::Sender<()>) {
    let received: Received = Arc::new(Mutex::new(Vec::new()));

    let app = Router::new()
        .route(
            CLASSIFY_PATH,
            post(
                move |State(received): State<Received>, Json(batch): Json<Vec<String>>| async move {
                    received.lock().unwrap().push(batch);
                    (
                        status,
                        [(axum::http::header::CONTENT_TYPE, "application/json")],
                        body,
                    )
                        .into_response()
                },
            ),
        )
        .with_state(Arc::clone(&received));

    let (base_url, shutdown_tx) = start_mock_server(app).await;
    (format!("{}{}", base_url, CLASSIFY_PATH), received, shutdown_tx)
}

fn relay(endpoint: &str, mode: ClassificationMode) -> HttpClassificationRelay {
    let client = UpstreamClient::new(Duration::from_secs(5)).unwrap();
    HttpClassificationRelay::new(client, endpoint, mode)
}

fn batch_a_b() -> SentenceBatch {
    SentenceBatch::new(vec!["a".to_string(), "b".to_string()])
}

#[tokio::test]
async fn given_pass_through_mode_when_classifying_then_returns_upstream_labels() {
    let (endpoint, received, shutdown_tx) =
        start_classifier(StatusCode::OK, r#"["symptom", "history"]"#).await;

    let labels = relay(&endpoint, ClassificationMode::PassThrough)
        .classify(&batch_a_b())
        .await
        .unwrap();

    assert_eq!(labels, vec!["symptom", "history"]);
    assert_eq!(*received.lock().unwrap(), vec![vec!["a", "b"]]);
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_placeholder_mode_when_classifying_then_posts_once_and_returns_placeholder() {
    let (endpoint, received, shutdown_tx) =
        start_classifier(StatusCode::OK, r#"["symptom", "history"]"#).await;

    let labels = relay(&endpoint, ClassificationMode::Placeholder)
        .classify(&batch_a_b())
        .await
        .unwrap();

    assert_eq!(labels, vec![PLACEHOLDER_LABEL]);
    assert_eq!(labels, vec!["Classified Text"]);
    assert_eq!(*received.lock().unwrap(), vec![vec!["a", "b"]]);
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_non_array_body_when_passing_through_then_returns_invalid_response() {
    let (endpoint, _received, shutdown_tx) =
        start_classifier(StatusCode::OK, r#"{"name": "John Doe"}"#).await;

    let result = relay(&endpoint, ClassificationMode::PassThrough)
        .classify(&batch_a_b())
        .await;

    assert!(matches!(result, Err(RelayError::InvalidResponse(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_error_status_when_classifying_in_placeholder_mode_then_error_is_not_masked() {
    let (endpoint, _received, shutdown_tx) =
        start_classifier(StatusCode::SERVICE_UNAVAILABLE, r#"{"error": "down"}"#).await;

    let result = relay(&endpoint, ClassificationMode::Placeholder)
        .classify(&batch_a_b())
        .await;

    assert!(matches!(
        result,
        Err(RelayError::UnexpectedStatus { status: 503, .. })
    ));
    shutdown_tx.send(()).ok();
}

#[test]
fn given_default_mode_when_created_then_is_pass_through() {
    assert_eq!(ClassificationMode::default(), ClassificationMode::PassThrough);
}
