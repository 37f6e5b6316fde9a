//! Metadata routes — JSON view of a page's resolved metadata.

use axum::Json;
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};

use super::ApiError;
use crate::metadata::{BaseMeta, OpenGraph, RouteMetadata, TwitterCard};
use crate::pages::{ComponentHandle, route_key};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct MetadataQuery {
    path: String,
}

#[derive(Debug, Serialize)]
pub struct MetadataResponse {
    #[serde(flatten)]
    pub base: BaseMeta,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
    pub component: ComponentHandle,
}

impl MetadataResponse {
    fn new(meta: &RouteMetadata, component: ComponentHandle) -> Self {
        Self { base: meta.base(), open_graph: meta.open_graph(), twitter: meta.twitter(), component }
    }
}

/// `GET /api/metadata?path=/login` — metadata record for one registered page.
///
/// `path` is matched in `route_key` form, so `//login` and `/login/` resolve
/// to `/login`.
pub async fn get_metadata(
    State(state): State<AppState>,
    Query(query): Query<MetadataQuery>,
) -> Result<Json<MetadataResponse>, ApiError> {
    let page = route_key(&query.path).ok().and_then(|key| state.pages.get(&key));
    let Some(page) = page else {
        tracing::warn!(path = %query.path, "metadata requested for unknown page");
        return Err(ApiError::NotFound(query.path));
    };
    let meta = page.metadata(&state.site)?;
    Ok(Json(MetadataResponse::new(&meta, page.render())))
}
