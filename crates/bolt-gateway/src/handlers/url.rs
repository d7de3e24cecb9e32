use crate::error::{ErrorBody, Result};
use crate::model::{ListUrlsResponse, ShortenRequest, UrlResponse};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};
use bolt_core::RegistryError;
use tracing::debug;

const INVALID_URL: &str = "invalid url";
const NOT_FOUND: &str = "No short URL found for the given input";
const WRONG_FORMAT: &str = "Wrong format";

/// `POST /api/shorturl`
///
/// Rejections are reported as a 200 with an error body; only storage
/// failures become a 5xx.
pub async fn shorten_url_handler(
    State(state): State<AppState>,
    Form(request): Form<ShortenRequest>,
) -> Result<Response> {
    match state.registry().shorten(&request.url).await {
        Ok(record) => Ok(Json(UrlResponse::from(record)).into_response()),
        Err(RegistryError::InvalidUrl(reason)) => {
            debug!(url = %request.url, %reason, "rejected url");
            Ok(Json(ErrorBody::new(INVALID_URL)).into_response())
        }
        Err(err) => Err(err.into()),
    }
}

/// `GET /api/shorturl/{code}`
///
/// Redirects to the stored URL; the lookup itself has no side effects.
pub async fn resolve_url_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response> {
    match state.registry().resolve(&code).await {
        Ok(record) => Ok((
            StatusCode::FOUND,
            [(header::LOCATION, record.original_url)],
        )
            .into_response()),
        Err(RegistryError::MalformedCode(_)) => {
            Ok(Json(ErrorBody::new(WRONG_FORMAT)).into_response())
        }
        Err(RegistryError::NotFound(code)) => {
            debug!(code, "short code not found");
            Ok(Json(ErrorBody::new(NOT_FOUND)).into_response())
        }
        Err(err) => Err(err.into()),
    }
}

/// `GET /api/urls`
pub async fn list_urls_handler(State(state): State<AppState>) -> Result<Json<ListUrlsResponse>> {
    let count = state.registry().count().await?;
    let urls = state.registry().list(None).await?;

    Ok(Json(ListUrlsResponse {
        count,
        urls: urls.into_iter().map(UrlResponse::from).collect(),
    }))
}
