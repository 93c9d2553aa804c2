//! HTTP request handlers for the drafting API.
//!
//! Routes map one-to-one onto drafting operations. Sessions are created by
//! `/process-document` and looked up by ticker afterwards.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router as AxumRouter,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tenk_domain::traits::DocumentLoader;
use tenk_drafter::DrafterError;
use tenk_extractor::FinancialDataExtractor;
use tenk_llm::LlmClient;
use tenk_loader::{local_filing_path, FilingDownloader, HtmlFilingLoader, LoaderError};
use tenk_store::StoreError;
use tower_http::cors::CorsLayer;
use tracing::{error, info, warn};

use crate::config::RouterConfig;
use crate::conversions::{data_set_from_json, data_set_to_json};
use crate::registry::{Session, SessionRegistry};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration
    pub config: Arc<RouterConfig>,
    /// Narrative generator shared by all sessions
    pub generator: Arc<LlmClient>,
    /// Active per-company sessions
    pub sessions: Arc<SessionRegistry>,
    /// Filing parser
    pub loader: Arc<HtmlFilingLoader>,
    /// Filing fetcher
    pub downloader: Arc<FilingDownloader>,
    /// Free-form financial data parser
    pub extractor: Arc<FinancialDataExtractor>,
}

/// Document processing request
#[derive(Debug, Deserialize)]
pub struct ProcessDocumentRequest {
    /// Company ticker
    pub company_ticker: String,
    /// Fiscal year being drafted
    pub fiscal_year: String,
    /// Where to download the prior-year filing from
    #[serde(default)]
    pub filing_url: Option<String>,
}

/// Document processing response
#[derive(Debug, Serialize, Deserialize)]
pub struct ProcessDocumentResponse {
    /// "success"
    pub status: String,
    /// Human readable summary
    pub message: String,
    /// Section names found in the filing
    pub sections_found: Vec<String>,
}

/// Section generation request
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    /// Company ticker
    pub company_ticker: String,
    /// Fiscal year being drafted
    pub fiscal_year: String,
}

/// Section generation response
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Drafted Item 1
    pub business_section: String,
    /// Figures the user should supply for the MD&A
    pub missing_data_questions: Vec<String>,
    /// "success"
    pub status: String,
}

/// MD&A generation request
#[derive(Debug, Deserialize)]
pub struct MdaRequest {
    /// Company ticker
    pub company_ticker: String,
    /// Fiscal year being drafted
    pub fiscal_year: String,
    /// Metric name to value
    #[serde(default)]
    pub financial_data: Map<String, Value>,
}

/// MD&A generation response
#[derive(Debug, Serialize, Deserialize)]
pub struct MdaResponse {
    /// Drafted Item 7
    pub mda_section: String,
    /// "success"
    pub status: String,
}

/// Financial data parsing request
#[derive(Debug, Deserialize)]
pub struct ParseFinancialDataRequest {
    /// Free-form text, markdown or HTML tables
    pub user_input: String,
    /// Preferred year column for multi-year tables
    #[serde(default)]
    pub fiscal_year: Option<String>,
}

/// Financial data parsing response
#[derive(Debug, Serialize, Deserialize)]
pub struct ParseFinancialDataResponse {
    /// Metric name to parsed value
    pub parsed_data: Map<String, Value>,
    /// "success"
    pub status: String,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Overall health status
    pub status: String,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Malformed request or missing session
    BadRequest(String),
    /// No filing available
    NotFound(String),
    /// Retrieval or generation failed
    Upstream(DrafterError),
    /// Internal server error
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Upstream(e) => {
                error!(error = %e, "Upstream service failed");
                (StatusCode::BAD_GATEWAY, e.to_string())
            }
            AppError::InternalError(msg) => {
                error!(error = %msg, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

impl From<DrafterError> for AppError {
    fn from(e: DrafterError) -> Self {
        AppError::Upstream(e)
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        AppError::InternalError(format!("Failed to index document: {e}"))
    }
}

impl From<LoaderError> for AppError {
    fn from(e: LoaderError) -> Self {
        match e {
            LoaderError::InvalidTicker(_) => AppError::BadRequest(e.to_string()),
            other => AppError::InternalError(format!("Failed to read document: {other}")),
        }
    }
}

fn session_for(state: &AppState, ticker: &str) -> Result<Arc<Session>, AppError> {
    state.sessions.get(ticker).ok_or_else(|| {
        AppError::BadRequest(
            "Document not processed. Please call /process-document first.".to_string(),
        )
    })
}

/// GET / - Service description
async fn root() -> Json<Value> {
    Json(json!({
        "message": "SEC 10-K Drafting Assistant API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "/process-document": "Download, parse and index a prior-year filing",
            "/generate": "Generate Business section and identify missing data",
            "/generate-mda": "Generate MD&A section with financial data",
            "/parse-financial-data": "Parse financial data from free-form text",
            "/health": "Health check"
        }
    }))
}

/// GET /health - Liveness check
async fn health_check() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "healthy".to_string(),
    })
}

/// POST /process-document - Parse and index a filing for a company
async fn process_document(
    State(state): State<AppState>,
    Json(request): Json<ProcessDocumentRequest>,
) -> Result<Json<ProcessDocumentResponse>, AppError> {
    let ticker = request.company_ticker.trim().to_uppercase();
    let local_path = local_filing_path(&state.config.loader.documents_dir, &ticker)?;

    let path = match request.filing_url.as_deref().map(str::trim) {
        Some(url) if !url.is_empty() => {
            state.downloader.download(&ticker, url).await.map_err(|e| {
                warn!(ticker = %ticker, error = %e, "Filing download failed");
                AppError::BadRequest(format!("Failed to download document: {e}"))
            })?
        }
        _ => {
            if !tokio::fs::try_exists(&local_path).await.unwrap_or(false) {
                return Err(AppError::NotFound(
                    "Document not found. Please provide a filing_url or download the document first."
                        .to_string(),
                ));
            }
            local_path
        }
    };

    let loader = Arc::clone(&state.loader);
    let generator = Arc::clone(&state.generator);
    let config = Arc::clone(&state.config);
    let session_ticker = ticker.clone();
    let fiscal_year = request.fiscal_year.clone();

    // Parsing and embedding are CPU-bound
    let session = tokio::task::spawn_blocking(move || -> Result<Session, AppError> {
        let sections = loader.load_sections(&path)?;
        Ok(Session::build(
            &session_ticker,
            &fiscal_year,
            &sections,
            generator,
            &config.index,
            &config.drafter,
        )?)
    })
    .await
    .map_err(|e| AppError::InternalError(format!("Indexing task failed: {e}")))??;

    let sections_found = session.sections_found.clone();
    state.sessions.insert(session);
    info!(ticker = %ticker, sections = sections_found.len(), "Document processed");

    Ok(Json(ProcessDocumentResponse {
        status: "success".to_string(),
        message: format!("Document processed and indexed for {ticker}"),
        sections_found,
    }))
}

/// POST /generate - Business section plus missing-data questions
async fn generate_sections(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let session = session_for(&state, &request.company_ticker)?;

    let business_section = session
        .drafter
        .generate_business_section(&session.ticker, &request.fiscal_year)
        .await?;
    let missing_data_questions = session
        .drafter
        .identify_missing_financial_data(&session.ticker, &request.fiscal_year)
        .await?;

    Ok(Json(GenerateResponse {
        business_section,
        missing_data_questions,
        status: "success".to_string(),
    }))
}

/// POST /generate-mda - MD&A section from supplied figures
async fn generate_mda(
    State(state): State<AppState>,
    Json(request): Json<MdaRequest>,
) -> Result<Json<MdaResponse>, AppError> {
    let session = session_for(&state, &request.company_ticker)?;
    let data = data_set_from_json(&request.financial_data);

    let mda_section = session
        .drafter
        .generate_mda_section(&session.ticker, &request.fiscal_year, &data)
        .await?;

    Ok(Json(MdaResponse {
        mda_section,
        status: "success".to_string(),
    }))
}

/// POST /parse-financial-data - One-shot extraction
async fn parse_financial_data(
    State(state): State<AppState>,
    Json(request): Json<ParseFinancialDataRequest>,
) -> Result<Json<ParseFinancialDataResponse>, AppError> {
    let extractor = Arc::clone(&state.extractor);
    let data = tokio::task::spawn_blocking(move || {
        extractor.extract(&request.user_input, request.fiscal_year.as_deref())
    })
    .await
    .map_err(|e| AppError::InternalError(format!("Parsing task failed: {e}")))?;

    Ok(Json(ParseFinancialDataResponse {
        parsed_data: data_set_to_json(&data),
        status: "success".to_string(),
    }))
}

/// Create the axum router with all routes
pub fn create_router(state: AppState) -> AxumRouter {
    AxumRouter::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/process-document", post(process_document))
        .route("/generate", post(generate_sections))
        .route("/generate-mda", post(generate_mda))
        .route("/parse-financial-data", post(parse_financial_data))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt; // for oneshot

    fn create_test_state() -> AppState {
        AppState::from_config(RouterConfig::default_test_config()).unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = create_router(create_test_state());

        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_generate_requires_session() {
        let app = create_router(create_test_state());

        let request = Request::builder()
            .method("POST")
            .uri("/generate")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"company_ticker": "NVDA", "fiscal_year": "2024"}"#))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_upstream_maps_to_bad_gateway() {
        let err = AppError::from(DrafterError::generation(std::io::Error::other("down")));
        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_invalid_ticker_is_bad_request() {
        let err = AppError::from(LoaderError::InvalidTicker("../x".to_string()));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
