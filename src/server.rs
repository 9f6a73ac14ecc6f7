//! HTTP API mode
//!
//! JSON API over the shared tool layer for the web frontend. The rate
//! fetch is spawned once at startup; its completion is the only writer
//! to the currency state.

use crate::cli::{AvailabilityArgs, CareersArgs, ContactArgs, InquireArgs, QuoteArgs, RatesArgs, SearchArgs};
use crate::error::AppError;
use crate::pricing::load_rates;
use crate::state::SiteState;
use crate::tools;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::info;

/// Guard around network-bound operations, as a backstop over the
/// per-client timeouts
const OPERATION_TIMEOUT: Duration = Duration::from_secs(120);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self.error_code() {
            "invalid_input" => StatusCode::BAD_REQUEST,
            "not_found" => StatusCode::NOT_FOUND,
            "upstream_failed" | "parse_failed" | "storage_failed" | "mail_relay_failed" => {
                StatusCode::BAD_GATEWAY
            }
            "timeout" => StatusCode::GATEWAY_TIMEOUT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = json!({
            "error": self.error_code(),
            "message": self.message(),
        });
        (status, Json(body)).into_response()
    }
}

async fn guarded<T, F>(operation: F) -> Result<T, AppError>
where
    F: std::future::Future<Output = Result<T, AppError>>,
{
    match timeout(OPERATION_TIMEOUT, operation).await {
        Ok(result) => result,
        Err(_) => Err(AppError::Timeout(
            "Request exceeded 120 second timeout".to_string(),
        )),
    }
}

/// Run the API server until interrupted
pub async fn serve(state: Arc<SiteState>, addr: Option<String>) -> anyhow::Result<()> {
    // Startup rate acquisition: prices render as "..." until this
    // resolves, and the fallback table takes over on failure.
    let rates_state = state.clone();
    tokio::spawn(async move {
        let provider = rates_state.rate_provider();
        load_rates(&rates_state.currency, &provider).await;
    });

    let addr = addr.unwrap_or_else(|| state.config.listen_addr.clone());
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Kay Jay site API listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}

fn router(state: Arc<SiteState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/properties", get(properties_list))
        .route("/api/properties/{slug}", get(property_detail))
        .route("/api/properties/{slug}/availability", get(availability))
        .route("/api/search", get(search))
        .route("/api/quote", get(quote))
        .route("/api/inquiries", post(inquire))
        .route("/api/contact", post(contact))
        .route("/api/careers", post(careers))
        .route("/api/blog/posts", get(blog_posts))
        .route("/api/blog/posts/{slug}", get(blog_post))
        .route("/api/blog/categories", get(blog_categories))
        .route("/api/blog/categories/{slug}/posts", get(blog_category_posts))
        .route("/api/rates", get(rates))
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn properties_list() -> Json<Vec<tools::properties::PropertySummary>> {
    Json(tools::properties::execute_properties_list())
}

async fn property_detail(
    Path(slug): Path<String>,
) -> Result<Json<tools::properties::PropertyDetail>, AppError> {
    Ok(Json(tools::properties::execute_property(&slug)?))
}

fn one() -> u32 {
    1
}

#[derive(Debug, Deserialize)]
struct AvailabilityQuery {
    #[serde(default = "one")]
    adults: u32,
    #[serde(default)]
    children: u32,
    check_in: Option<String>,
    check_out: Option<String>,
}

async fn availability(
    Path(slug): Path<String>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<tools::availability::AvailabilityResponse>, AppError> {
    let args = AvailabilityArgs {
        hotel: slug,
        adults: query.adults,
        children: query.children,
        check_in: query.check_in,
        check_out: query.check_out,
    };
    Ok(Json(tools::availability::execute_availability(&args)?))
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    q: String,
    #[serde(default)]
    quick: bool,
    limit: Option<usize>,
}

async fn search(
    Query(query): Query<SearchQuery>,
) -> Result<Json<tools::search::SearchResponse>, AppError> {
    let args = SearchArgs {
        query: query.q,
        quick: query.quick,
        limit: query.limit,
    };
    Ok(Json(tools::search::execute_search(&args)?))
}

async fn quote(
    State(state): State<Arc<SiteState>>,
    Query(args): Query<QuoteArgs>,
) -> Result<Json<tools::quote::QuoteResponse>, AppError> {
    Ok(Json(tools::quote::execute_quote(&args, &state)?))
}

async fn inquire(
    State(state): State<Arc<SiteState>>,
    Json(args): Json<InquireArgs>,
) -> Result<Json<tools::inquire::InquiryResponse>, AppError> {
    let response = guarded(tools::inquire::execute_inquire(&args, &state)).await?;
    Ok(Json(response))
}

async fn contact(
    State(state): State<Arc<SiteState>>,
    Json(args): Json<ContactArgs>,
) -> Result<Json<tools::contact::ContactResponse>, AppError> {
    let response = guarded(tools::contact::execute_contact(&args, &state)).await?;
    Ok(Json(response))
}

async fn careers(
    State(state): State<Arc<SiteState>>,
    Json(args): Json<CareersArgs>,
) -> Result<Json<tools::careers::CareersResponse>, AppError> {
    let response = guarded(tools::careers::execute_careers(&args, &state)).await?;
    Ok(Json(response))
}

#[derive(Debug, Deserialize)]
struct BlogListQuery {
    #[serde(default = "default_blog_limit")]
    limit: usize,
}

fn default_blog_limit() -> usize {
    10
}

async fn blog_posts(
    State(state): State<Arc<SiteState>>,
    Query(query): Query<BlogListQuery>,
) -> Result<Json<Vec<tools::blog::PostSummary>>, AppError> {
    let posts = guarded(async { Ok(tools::blog::execute_blog_list(query.limit, &state).await) }).await?;
    Ok(Json(posts))
}

async fn blog_post(
    State(state): State<Arc<SiteState>>,
    Path(slug): Path<String>,
) -> Result<Json<tools::blog::PostDetail>, AppError> {
    let post = guarded(tools::blog::execute_blog_read(&slug, &state)).await?;
    Ok(Json(post))
}

async fn blog_categories(
    State(state): State<Arc<SiteState>>,
) -> Result<Json<Vec<tools::blog::CategorySummary>>, AppError> {
    let categories =
        guarded(async { Ok(tools::blog::execute_blog_categories(&state).await) }).await?;
    Ok(Json(categories))
}

async fn blog_category_posts(
    State(state): State<Arc<SiteState>>,
    Path(slug): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let (category, posts) = guarded(tools::blog::execute_blog_category(&slug, &state)).await?;
    Ok(Json(json!({ "category": category, "posts": posts })))
}

async fn rates(State(state): State<Arc<SiteState>>) -> Json<tools::rates::RatesResponse> {
    let args = RatesArgs { wait: false };
    Json(tools::rates::execute_rates(&args, &state).await)
}
