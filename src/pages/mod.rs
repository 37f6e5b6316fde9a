//! Page definitions and the registry the router is built from.
//!
//! SYSTEM CONTEXT
//! ==============
//! A `Page` owns two things: how to build its `PageContent` from the site
//! config, and which client component it mounts. The component is injected
//! as an `Arc<dyn ClientComponent>`; the service never renders its internals,
//! it only emits a mount point naming it.

pub mod document;
pub mod login;

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;

use crate::config::SiteConfig;
use crate::metadata::{MetadataError, PageContent, RouteMetadata, normalize_path};
use crate::routes::RESERVED_PATHS;

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PageError {
    #[error("route already registered: {0}")]
    DuplicateRoute(String),
    #[error("route path must be a normalized literal path like \"/login\": {0:?}")]
    InvalidRoute(String),
    #[error("route is reserved by the service: {0}")]
    ReservedRoute(String),
    #[error("canonical path {canonical} does not match route {path}")]
    CanonicalMismatch { path: String, canonical: String },
    #[error("metadata for {path} is invalid: {source}")]
    Metadata {
        path: String,
        #[source]
        source: MetadataError,
    },
}

// =============================================================================
// CLIENT COMPONENT
// =============================================================================

/// Externally owned interactive UI that a page delegates its body to.
pub trait ClientComponent: Send + Sync {
    /// Component name as known to the client bundle.
    fn name(&self) -> &'static str;

    /// DOM id of the element the component hydrates into.
    fn mount_id(&self) -> &'static str;
}

/// Result of rendering a page: which component to mount. Components are
/// mounted bare; a handle carries no props.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentHandle {
    pub name: &'static str,
    pub mount_id: &'static str,
}

// =============================================================================
// PAGE
// =============================================================================

pub type ContentFn = fn(&SiteConfig) -> PageContent;

#[derive(Clone)]
pub struct Page {
    path: &'static str,
    content: ContentFn,
    component: Arc<dyn ClientComponent>,
}

impl Page {
    #[must_use]
    pub fn new(path: &'static str, content: ContentFn, component: Arc<dyn ClientComponent>) -> Self {
        Self { path, content, component }
    }

    #[must_use]
    pub fn path(&self) -> &'static str {
        self.path
    }

    /// Resolve this page's metadata record. Recomputed on every call.
    ///
    /// The content's canonical path must name this page's own route.
    pub fn metadata(&self, site: &SiteConfig) -> Result<RouteMetadata, PageError> {
        let meta = RouteMetadata::resolve(site, &(self.content)(site))
            .map_err(|source| PageError::Metadata { path: self.path.to_owned(), source })?;
        let canonical = route_key(meta.canonical_path()).unwrap_or_default();
        if canonical != self.path {
            return Err(PageError::CanonicalMismatch {
                path: self.path.to_owned(),
                canonical: meta.canonical_path().to_owned(),
            });
        }
        Ok(meta)
    }

    /// Render entry point: a handle to the injected component.
    #[must_use]
    pub fn render(&self) -> ComponentHandle {
        ComponentHandle { name: self.component.name(), mount_id: self.component.mount_id() }
    }
}

impl std::fmt::Debug for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("path", &self.path)
            .field("component", &self.component.name())
            .finish_non_exhaustive()
    }
}

// =============================================================================
// REGISTRY
// =============================================================================

/// Pages keyed by route path.
#[derive(Debug, Default, Clone)]
pub struct PageRegistry {
    pages: BTreeMap<&'static str, Page>,
}

impl PageRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The product's pages with their production components.
    pub fn standard() -> Result<Self, PageError> {
        let mut registry = Self::new();
        registry.register(login::page(Arc::new(login::LoginClient)))?;
        Ok(registry)
    }

    /// Add `page`. Its path must already be in `route_key` form, contain no
    /// router captures or wildcards, and not collide with a service route.
    pub fn register(&mut self, page: Page) -> Result<(), PageError> {
        let path = page.path();
        if route_key(path).ok().as_deref() != Some(path) || path.contains(['{', '}', '*', ':']) {
            return Err(PageError::InvalidRoute(path.to_owned()));
        }
        if RESERVED_PATHS.contains(&path) {
            return Err(PageError::ReservedRoute(path.to_owned()));
        }
        if self.pages.contains_key(path) {
            return Err(PageError::DuplicateRoute(page.path().to_owned()));
        }
        self.pages.insert(page.path(), page);
        Ok(())
    }

    #[must_use]
    pub fn get(&self, path: &str) -> Option<&Page> {
        self.pages.get(path)
    }

    pub fn paths(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.pages.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Page> {
        self.pages.values()
    }

    /// Resolve every page once, reporting the first invalid one.
    pub fn validate(&self, site: &SiteConfig) -> Result<(), PageError> {
        for page in self.iter() {
            page.metadata(site)?;
        }
        Ok(())
    }
}

/// Lookup form of a route path: normalized, without a trailing slash
/// (except for the root).
pub fn route_key(raw: &str) -> Result<String, MetadataError> {
    let mut path = normalize_path(raw)?;
    if path.len() > 1 && path.ends_with('/') {
        path.pop();
    }
    Ok(path)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
