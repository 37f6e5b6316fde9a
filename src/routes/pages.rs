//! Page routes — full HTML documents for registered pages.

use axum::extract::{MatchedPath, State};
use axum::response::Html;

use super::ApiError;
use crate::pages::document::render_document;
use crate::state::AppState;

/// `GET /<page>` — resolve metadata for the matched route and render it.
pub async fn render_page(State(state): State<AppState>, matched: MatchedPath) -> Result<Html<String>, ApiError> {
    let path = matched.as_str();
    let page = state.pages.get(path).ok_or_else(|| ApiError::NotFound(path.to_owned()))?;
    let meta = page.metadata(&state.site)?;
    Ok(Html(render_document(&meta, &page.render())))
}
