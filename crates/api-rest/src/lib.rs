//! # API REST
//!
//! REST API implementation for Hale.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - Bearer-token authentication on the `/api` routes
//! - REST-specific concerns (JSON serialization, CORS)
//!
//! Uses `api-shared` for wire types and `hale-core` for the domain logic.

#![warn(rust_2018_idioms)]

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::{self, Next},
    response::{Json, Response},
    routing::{get, post},
    Router,
};
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_shared::model::{AssessmentAnswers, ChatReq, ChatRes, HealthRes, ResultRecord};
use api_shared::{auth, HealthService};
use hale_core::chatbot::ChatEngine;
use hale_core::scoring;
use hale_types::NonEmptyText;

/// REST configuration resolved at startup.
///
/// Request handlers never read the environment; everything they need is
/// captured here once.
#[derive(Clone, Debug)]
pub struct RestConfig {
    api_token: String,
}

impl RestConfig {
    pub fn new(api_token: String) -> Self {
        Self { api_token }
    }
}

/// Application state shared across REST API handlers.
///
/// `latest` holds the most recently scored record for the dashboard fetch;
/// it lives in process memory only, there is no persistence.
#[derive(Clone)]
pub struct AppState {
    cfg: Arc<RestConfig>,
    latest: Arc<RwLock<Option<ResultRecord>>>,
}

impl AppState {
    pub fn new(cfg: RestConfig) -> Self {
        Self {
            cfg: Arc::new(cfg),
            latest: Arc::new(RwLock::new(None)),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(health, submit_assessment, get_dashboard, chat),
    components(schemas(
        api_shared::model::AssessmentAnswers,
        api_shared::model::ResultRecord,
        api_shared::model::UserProfile,
        api_shared::model::HealthAssessment,
        api_shared::model::Recommendations,
        api_shared::model::DietPlan,
        api_shared::model::Checkup,
        api_shared::model::ChatReq,
        api_shared::model::ChatRes,
        api_shared::model::HealthRes,
    ))
)]
struct ApiDoc;

/// Builds the full REST router: open health check, bearer-guarded `/api`
/// routes, Swagger UI, and permissive CORS.
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/api/health-assessment", post(submit_assessment))
        .route("/api/dashboard", get(get_dashboard))
        .route("/api/chatbot", post(chat))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_bearer,
        ));

    Router::new()
        .route("/health", get(health))
        .merge(api)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Rejects `/api` requests whose `Authorization` header does not carry the
/// configured bearer token.
async fn require_bearer(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, (StatusCode, &'static str)> {
    let header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    match auth::validate_bearer(header, &state.cfg.api_token) {
        Ok(()) => Ok(next.run(req).await),
        Err(err) => {
            tracing::warn!("rejected request: {err}");
            Err((StatusCode::UNAUTHORIZED, "Invalid bearer token"))
        }
    }
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Returns the current health status of the Hale service. This endpoint is
/// used for monitoring and load balancer health checks and requires no
/// authentication.
///
/// # Returns
/// * `Json<HealthRes>` - Health status response containing service status
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    post,
    path = "/api/health-assessment",
    request_body = AssessmentAnswers,
    responses(
        (status = 200, description = "Scored assessment", body = ResultRecord),
        (status = 400, description = "Bad request"),
        (status = 401, description = "Unauthorized")
    )
)]
/// Score a submitted health assessment
///
/// Validates the answers against the form's required fields, runs the
/// scoring engine, and keeps the scored record in memory for the dashboard
/// fetch.
///
/// # Arguments
/// * `answers` - The full questionnaire record accumulated by the form
///
/// # Returns
/// * `Ok(Json<ResultRecord>)` - The scored record for immediate display
/// * `Err((StatusCode, &str))` - Bad request if validation fails
///
/// # Errors
/// Returns `400 Bad Request` if:
/// - a required field is missing, or a numeric field does not parse.
#[axum::debug_handler]
async fn submit_assessment(
    State(state): State<AppState>,
    Json(answers): Json<AssessmentAnswers>,
) -> Result<Json<ResultRecord>, (StatusCode, &'static str)> {
    if let Err(err) = scoring::validate_answers(&answers) {
        tracing::warn!("invalid assessment answers: {err}");
        return Err((StatusCode::BAD_REQUEST, "Invalid assessment answers"));
    }

    let record = scoring::score_assessment(&answers);
    *state.latest.write().await = Some(record.clone());

    Ok(Json(record))
}

#[utoipa::path(
    get,
    path = "/api/dashboard",
    responses(
        (status = 200, description = "Most recent scored record", body = ResultRecord),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "No assessment on record")
    )
)]
/// Fetch the dashboard record
///
/// Returns the most recently scored result record for this process
/// lifetime. The dashboard presenter calls this when it was mounted without
/// a pre-supplied record.
///
/// # Returns
/// * `Ok(Json<ResultRecord>)` - The stored record
/// * `Err((StatusCode, &str))` - Not found if no assessment has been scored
///
/// # Errors
/// Returns `404 Not Found` if:
/// - no assessment has been submitted since the server started.
#[axum::debug_handler]
async fn get_dashboard(
    State(state): State<AppState>,
) -> Result<Json<ResultRecord>, (StatusCode, &'static str)> {
    match state.latest.read().await.clone() {
        Some(record) => Ok(Json(record)),
        None => Err((StatusCode::NOT_FOUND, "No assessment on record")),
    }
}

#[utoipa::path(
    post,
    path = "/api/chatbot",
    request_body = ChatReq,
    responses(
        (status = 200, description = "Chatbot reply", body = ChatRes),
        (status = 400, description = "Bad request"),
        (status = 401, description = "Unauthorized")
    )
)]
/// Answer a chat message
///
/// Runs the keyword rule engine over the message and returns the canned
/// reply, or the fallback reply when nothing matches.
///
/// # Arguments
/// * `req` - Request body containing the user's message
///
/// # Returns
/// * `Ok(Json<ChatRes>)` - The matched or fallback reply
/// * `Err((StatusCode, &str))` - Bad request for blank messages
///
/// # Errors
/// Returns `400 Bad Request` if:
/// - the message is empty or whitespace-only.
#[axum::debug_handler]
async fn chat(
    State(_state): State<AppState>,
    Json(req): Json<ChatReq>,
) -> Result<Json<ChatRes>, (StatusCode, &'static str)> {
    let message = NonEmptyText::new(&req.message)
        .map_err(|_| (StatusCode::BAD_REQUEST, "Message cannot be empty"))?;

    Ok(Json(ChatRes {
        reply: ChatEngine::reply(message.as_str()).to_owned(),
    }))
}
