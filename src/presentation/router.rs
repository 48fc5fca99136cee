use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderValue, Method};
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::config::CorsSettings;
use crate::presentation::handlers::{
    classify_audio_handler, classify_sentences_handler, classify_text_handler, heartbeat_handler,
};
use crate::presentation::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.settings.cors);
    let body_limit = DefaultBodyLimit::max(state.settings.gateway.max_upload_bytes);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/api/heartbeat", get(heartbeat_handler))
        .route("/api/classifyText", post(classify_text_handler))
        .route("/api/classifyAudio", post(classify_audio_handler))
        .route("/api/classifySentences", post(classify_sentences_handler))
        .layer(body_limit)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}

/// Browser requests are accepted from the single configured client origin only.
fn cors_layer(settings: &CorsSettings) -> CorsLayer {
    let allow_origin = match HeaderValue::from_str(&settings.allowed_origin) {
        Ok(origin) => AllowOrigin::exact(origin),
        Err(e) => {
            tracing::error!(
                origin = %settings.allowed_origin,
                error = %e,
                "Invalid CORS origin, cross-origin requests will be rejected"
            );
            AllowOrigin::list(Vec::<HeaderValue>::new())
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}
