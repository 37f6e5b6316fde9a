//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. Both
//! fields are read-only after startup, so handlers never lock anything.

use std::sync::Arc;

use crate::config::SiteConfig;
use crate::pages::PageRegistry;

/// Clone is required by Axum; inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub site: Arc<SiteConfig>,
    pub pages: Arc<PageRegistry>,
}

impl AppState {
    #[must_use]
    pub fn new(site: SiteConfig, pages: PageRegistry) -> Self {
        Self { site: Arc::new(site), pages: Arc::new(pages) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
