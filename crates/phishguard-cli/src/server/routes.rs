//! HTTP routes for the prediction service

use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Query, State},
    http::Method,
    response::Json,
    routing::get,
    Router,
};
use phishguard_core::bundle::BundleSummary;
use phishguard_core::inference::{predict, Label, PredictionResult};
use phishguard_core::FeatureVector;
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};

use super::error::{ApiError, Result};
use super::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub threshold: f64,
    pub bundle: BundleSummary,
}

/// Prediction request, as a JSON body or query string.
#[derive(Debug, Default, Deserialize)]
pub struct PredictRequest {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub threshold: Option<f64>,
}

/// Prediction response
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub url: String,
    pub probability: f64,
    pub label: Label,
    pub is_phishing: bool,
    /// `|probability - 0.5| * 2`
    pub confidence: f64,
    pub features: FeatureVector,
    pub status: &'static str,
}

impl From<PredictionResult> for PredictResponse {
    fn from(r: PredictionResult) -> Self {
        Self {
            is_phishing: r.is_phishing(),
            confidence: r.confidence(),
            url: r.url,
            probability: r.probability,
            label: r.label,
            features: r.features,
            status: "success",
        }
    }
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        message: "Model server is running",
        threshold: state.threshold,
        bundle: state.bundle.summary(),
    })
}

async fn predict_post(
    State(state): State<AppState>,
    body: std::result::Result<Json<PredictRequest>, JsonRejection>,
) -> Result<Json<PredictResponse>> {
    let Json(req) = body.map_err(|e| ApiError::InvalidRequest(e.body_text()))?;
    let url = req
        .url
        .filter(|u| !u.is_empty())
        .ok_or(ApiError::MissingUrl)?;
    classify(&state, &url, req.threshold)
}

async fn predict_get(
    State(state): State<AppState>,
    query: std::result::Result<Query<PredictRequest>, QueryRejection>,
) -> Result<Json<PredictResponse>> {
    let Query(req) = query.map_err(|e| ApiError::InvalidRequest(e.body_text()))?;
    let url = req
        .url
        .filter(|u| !u.is_empty())
        .ok_or(ApiError::MissingUrlParam)?;
    classify(&state, &url, req.threshold)
}

fn classify(state: &AppState, url: &str, threshold: Option<f64>) -> Result<Json<PredictResponse>> {
    let threshold = threshold.unwrap_or(state.threshold);
    if !(0.0..=1.0).contains(&threshold) {
        return Err(ApiError::InvalidThreshold(threshold));
    }
    tracing::info!("received prediction request for URL: {url}");
    let result = predict(&state.bundle, url, threshold, false)?;
    tracing::info!(
        "prediction result: {} (probability: {:.4})",
        result.label,
        result.probability
    );
    Ok(Json(result.into()))
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}

/// Create the router
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/predict", get(predict_get).post(predict_post))
        .fallback(not_found)
        .layer(cors)
        .with_state(state)
}
