//! Public listing and embed endpoints.
//!
//! Both surfaces run the same directory engine; the embed variant differs
//! only in configuration (page size, header visibility).

use axum::{
    extract::{Query, RawQuery, State},
    Json,
};
use serde::{Deserialize, Serialize};

use super::{success, ApiResult};
use crate::directory::{query, Directory, Facets};
use crate::errors::AppError;
use crate::models::Profile;
use crate::AppState;

/// Pagination query parameter; the filter dimensions are decoded from the
/// raw query string so unrecognized parameters are skipped, not rejected.
#[derive(Debug, Deserialize)]
pub struct PageParam {
    #[serde(default)]
    pub page: Option<usize>,
}

/// One rendered page of the directory.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryResponse {
    pub profiles: Vec<Profile>,
    /// 1-based page number after clamping.
    pub page: usize,
    pub total_pages: usize,
    pub total_filtered: usize,
    pub total_records: usize,
    pub facets: Facets,
    /// Canonical query-string form of the active filters; empty when
    /// unfiltered so clients can render a clean base URL.
    pub query_string: String,
    pub show_header: bool,
}

/// GET /api/directory - The public listing page.
pub async fn public_directory(
    State(state): State<AppState>,
    Query(params): Query<PageParam>,
    RawQuery(raw): RawQuery,
) -> ApiResult<DirectoryResponse> {
    let page_size = state.config.page_size;
    render_directory(&state, raw.as_deref(), params.page, page_size, true).await
}

/// GET /api/embed/directory - The iframe-hosted listing, header hidden.
pub async fn embed_directory(
    State(state): State<AppState>,
    Query(params): Query<PageParam>,
    RawQuery(raw): RawQuery,
) -> ApiResult<DirectoryResponse> {
    let page_size = state.config.embed_page_size;
    render_directory(&state, raw.as_deref(), params.page, page_size, false).await
}

async fn render_directory(
    state: &AppState,
    raw_query: Option<&str>,
    page: Option<usize>,
    page_size: usize,
    show_header: bool,
) -> ApiResult<DirectoryResponse> {
    let criteria = query::decode(raw_query.unwrap_or_default());

    let profiles = state.repo.list_profiles().await?;
    let mut directory = Directory::new(profiles, page_size);
    directory.set_criteria(criteria);
    if let Some(page) = page {
        directory.set_page(page);
    }

    let facets = directory.facets();
    let query_string = directory.query_string();
    let total_filtered = directory.filtered().len();

    success(DirectoryResponse {
        profiles: directory.page().into_iter().cloned().collect(),
        page: directory.current_page(),
        total_pages: directory.total_pages(),
        total_filtered,
        total_records: directory.total_records(),
        facets,
        query_string,
        show_header,
    })
}

/// POST /api/embed/sync - Filter-state exchange with an embedding page.
///
/// Accepts the inbound `setFilters` message and answers with the outbound
/// `updateURL` message carrying the canonical query string, so the hosting
/// page can mirror the embed's filter state into its own address bar.
pub async fn embed_sync(
    Json(message): Json<query::SyncMessage>,
) -> Result<Json<query::SyncMessage>, AppError> {
    match message {
        query::SyncMessage::SetFilters { filters } => {
            let criteria = filters.into_criteria();
            Ok(Json(query::SyncMessage::UpdateUrl {
                query_string: query::encode(&criteria),
            }))
        }
        query::SyncMessage::UpdateUrl { .. } => Err(AppError::BadRequest(
            "updateURL is an outbound message".to_string(),
        )),
    }
}
