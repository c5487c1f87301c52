//! HTTP surface: the catalog endpoint plus server-side plan generation.

use crate::adapters::LocalStorage;
use crate::core::catalog::FileCatalogSource;
use crate::core::planner::generate_plan;
use crate::core::trends::mock_trends;
use crate::core::{BusinessModel, CatalogSource, ConfigProvider, PlanReport, PlanRequest};
use crate::utils::error::{PlannerError, Result};
use crate::utils::validation::{parse_budget, validate_socket_addr, Validate};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use tokio::net::TcpListener;

#[derive(Clone)]
pub struct AppState {
    catalog: Arc<dyn CatalogSource>,
}

impl AppState {
    pub fn new(catalog: Arc<dyn CatalogSource>) -> Self {
        Self { catalog }
    }

    /// Catalog file read relative to the working directory.
    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        let source = FileCatalogSource::new(
            LocalStorage::default(),
            config.catalog_path(),
            config.strict_catalog(),
        );
        Self::new(Arc::new(source))
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/business-models", get(list_business_models))
        .route("/api/business-plans", post(create_business_plan))
        .with_state(state)
}

pub async fn serve<C: ConfigProvider>(config: &C) -> Result<()> {
    let addr = validate_socket_addr("server.bind", config.bind_address())?;
    let app = router(AppState::from_config(config));

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("🚀 Listening on http://{}", addr);
    tracing::info!("📚 Serving catalog from {}", config.catalog_path());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("👋 Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}

async fn health_handler() -> impl IntoResponse {
    "ok"
}

/// 每次請求都重新讀取目錄檔
async fn list_business_models(
    State(state): State<AppState>,
) -> std::result::Result<Json<Vec<BusinessModel>>, PlannerError> {
    let models = state.catalog.load().await?;
    tracing::info!("GET /api/business-models -> {} models", models.len());
    Ok(Json(models))
}

async fn create_business_plan(
    State(state): State<AppState>,
    Json(request): Json<PlanRequest>,
) -> std::result::Result<Json<PlanReport>, PlannerError> {
    request.validate()?;
    let budget = parse_budget(&request.budget)?;

    let models = state.catalog.load().await?;
    let plan = generate_plan(&models, budget, &request.skills, &request.description)?;
    tracing::info!("POST /api/business-plans -> {}", plan.business_model);

    Ok(Json(PlanReport {
        plan,
        market_trends: mock_trends(),
    }))
}

impl PlannerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            PlannerError::ValidationError { .. } => StatusCode::BAD_REQUEST,
            PlannerError::EmptyCatalogError => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for PlannerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("❌ {} (Category: {:?})", self, self.category());
        } else {
            tracing::warn!("⚠️ {}", self);
        }

        let body = match &self {
            PlannerError::ValidationError { field, message } => {
                json!({ "error": message, "field": field })
            }
            _ => json!({ "error": self.user_friendly_message() }),
        };

        (status, Json(body)).into_response()
    }
}
