//! Route metadata resolution.
//!
//! DESIGN
//! ======
//! A page defines its `title`, `description` and canonical path exactly once
//! (`PageContent`). `RouteMetadata::resolve` combines that with the site-wide
//! `SiteConfig` into a single immutable record. The three schemas consumed by
//! the document head (base tags, Open Graph, Twitter card) are pure
//! projections of that record, so they cannot drift from one another.
//!
//! Resolution is synchronous and side-effect free. Nothing is cached; every
//! call builds a fresh record.

pub mod head;

use serde::Serialize;
use url::Url;

use crate::config::SiteConfig;

pub const OPEN_GRAPH_TYPE: &str = "website";
pub const TWITTER_CARD: &str = "summary_large_image";

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum MetadataError {
    #[error("page title must not be empty")]
    EmptyTitle,
    #[error("page description must not be empty")]
    EmptyDescription,
    #[error("canonical path must start with '/' and contain no query, fragment or whitespace: {0:?}")]
    InvalidPath(String),
    #[error("social image url must be an absolute http(s) url: {0}")]
    InvalidImageUrl(String),
    #[error("social image dimensions must be positive (got {width}x{height})")]
    InvalidImageSize { width: u32, height: u32 },
}

// =============================================================================
// INPUT TYPES
// =============================================================================

/// Preview image shared by Open Graph and the Twitter card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
}

impl SocialImage {
    fn validate(&self) -> Result<(), MetadataError> {
        if self.width == 0 || self.height == 0 {
            return Err(MetadataError::InvalidImageSize { width: self.width, height: self.height });
        }
        match Url::parse(&self.url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") && url.host_str().is_some() => Ok(()),
            _ => Err(MetadataError::InvalidImageUrl(self.url.clone())),
        }
    }
}

/// Per-page values, defined once and fanned out into every schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContent {
    pub title: String,
    pub description: String,
    pub canonical_path: String,
}

// =============================================================================
// ROUTE METADATA
// =============================================================================

/// Immutable metadata record for one logical route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMetadata {
    title: String,
    description: String,
    canonical_path: String,
    canonical_url: String,
    social_image: SocialImage,
    site_name: String,
    twitter_handle: String,
    locale: String,
}

impl RouteMetadata {
    /// Build the record for `content` under the site-wide `site` settings.
    pub fn resolve(site: &SiteConfig, content: &PageContent) -> Result<Self, MetadataError> {
        let title = content.title.trim();
        if title.is_empty() {
            return Err(MetadataError::EmptyTitle);
        }
        let description = content.description.trim();
        if description.is_empty() {
            return Err(MetadataError::EmptyDescription);
        }
        site.social_image.validate()?;

        let canonical_path = normalize_path(&content.canonical_path)?;
        let canonical_url = join_origin(&site.base_origin, &canonical_path);

        tracing::debug!(path = %canonical_path, url = %canonical_url, "route metadata resolved");

        Ok(Self {
            title: title.to_owned(),
            description: description.to_owned(),
            canonical_path,
            canonical_url,
            social_image: site.social_image.clone(),
            site_name: site.site_name.clone(),
            twitter_handle: site.twitter_handle.clone(),
            locale: site.locale.clone(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn canonical_path(&self) -> &str {
        &self.canonical_path
    }

    pub fn canonical_url(&self) -> &str {
        &self.canonical_url
    }

    pub fn social_image(&self) -> &SocialImage {
        &self.social_image
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Plain document tags: `<title>`, description, canonical link.
    #[must_use]
    pub fn base(&self) -> BaseMeta {
        BaseMeta {
            title: self.title.clone(),
            description: self.description.clone(),
            canonical_url: self.canonical_url.clone(),
        }
    }

    #[must_use]
    pub fn open_graph(&self) -> OpenGraph {
        OpenGraph {
            title: self.title.clone(),
            description: self.description.clone(),
            url: self.canonical_url.clone(),
            site_name: self.site_name.clone(),
            images: vec![self.social_image.clone()],
            locale: self.locale.clone(),
            kind: OPEN_GRAPH_TYPE,
        }
    }

    #[must_use]
    pub fn twitter(&self) -> TwitterCard {
        TwitterCard {
            card: TWITTER_CARD,
            title: self.title.clone(),
            description: self.description.clone(),
            creator: self.twitter_handle.clone(),
            images: vec![self.social_image.url.clone()],
        }
    }
}

// =============================================================================
// PROJECTIONS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BaseMeta {
    pub title: String,
    pub description: String,
    pub canonical_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub url: String,
    pub site_name: String,
    pub images: Vec<SocialImage>,
    pub locale: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TwitterCard {
    pub card: &'static str,
    pub title: String,
    pub description: String,
    pub creator: String,
    pub images: Vec<String>,
}

// =============================================================================
// URL HELPERS
// =============================================================================

/// Collapse repeated slashes and require a leading `/`.
///
/// Query strings, fragments and whitespace are rejected; a canonical path
/// names a page, not a request.
pub fn normalize_path(raw: &str) -> Result<String, MetadataError> {
    if !raw.starts_with('/') || raw.contains(['?', '#']) || raw.chars().any(char::is_whitespace) {
        return Err(MetadataError::InvalidPath(raw.to_owned()));
    }

    let mut out = String::with_capacity(raw.len());
    for segment in raw.split('/').filter(|s| !s.is_empty()) {
        out.push('/');
        out.push_str(segment);
    }
    if out.is_empty() {
        out.push('/');
    } else if raw.ends_with('/') {
        out.push('/');
    }
    Ok(out)
}

/// Concatenate an origin and a normalized path with exactly one `/` between.
///
/// `origin` is a parsed http(s) origin and `path` holds no whitespace, query
/// or fragment, so the result is always an absolute URL.
#[must_use]
pub fn join_origin(origin: &Url, path: &str) -> String {
    format!("{}/{}", origin.as_str().trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
