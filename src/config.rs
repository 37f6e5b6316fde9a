//! Site and server configuration parsed from environment variables.
//!
//! Every site-level literal shown in page metadata (origin, site name,
//! attribution handle, preview image) is configuration. The defaults are the
//! values the login page shipped with.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use url::Url;

use crate::metadata::SocialImage;

pub const DEFAULT_BASE_ORIGIN: &str = "https://www.papermark.com";
pub const DEFAULT_SITE_NAME: &str = "Papermark";
pub const DEFAULT_TWITTER_HANDLE: &str = "@chrisberno";
pub const DEFAULT_LOCALE: &str = "en_US";
pub const DEFAULT_SOCIAL_IMAGE_URL: &str =
    "https://github.com/chrisberno/deal-docs/raw/main/public/_static/meta-image.png";
pub const DEFAULT_SOCIAL_IMAGE_WIDTH: u32 = 800;
pub const DEFAULT_SOCIAL_IMAGE_HEIGHT: u32 = 600;
pub const DEFAULT_PORT: u16 = 3000;

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must not be empty")]
    Empty { var: &'static str },
    #[error("{var} is not a valid absolute URL: {value}")]
    InvalidUrl { var: &'static str, value: String },
    #[error("{var} must be an origin without path, query or fragment: {value}")]
    NotAnOrigin { var: &'static str, value: String },
    #[error("{var} is not a valid {expected}: {value}")]
    InvalidNumber { var: &'static str, expected: &'static str, value: String },
    #[error("{var} is not a valid IP address: {value}")]
    InvalidAddr { var: &'static str, value: String },
}

// =============================================================================
// SITE CONFIG
// =============================================================================

/// Values shared by every route of the product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub base_origin: Url,
    pub site_name: String,
    pub twitter_handle: String,
    pub locale: String,
    pub social_image: SocialImage,
}

impl SiteConfig {
    /// Build site config from environment variables.
    ///
    /// Optional:
    /// - `SITE_BASE_ORIGIN`: default `https://www.papermark.com`
    /// - `SITE_NAME`: default `Papermark`
    /// - `SITE_TWITTER_HANDLE`: default `@chrisberno`
    /// - `SITE_LOCALE`: default `en_US`
    /// - `SITE_SOCIAL_IMAGE_URL`, `SITE_SOCIAL_IMAGE_WIDTH`, `SITE_SOCIAL_IMAGE_HEIGHT`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`SiteConfig::from_env`] but reads values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_origin = parse_origin(
            "SITE_BASE_ORIGIN",
            &lookup("SITE_BASE_ORIGIN").unwrap_or_else(|| DEFAULT_BASE_ORIGIN.to_owned()),
        )?;
        let site_name = non_empty("SITE_NAME", lookup("SITE_NAME"), DEFAULT_SITE_NAME)?;
        let twitter_handle = non_empty("SITE_TWITTER_HANDLE", lookup("SITE_TWITTER_HANDLE"), DEFAULT_TWITTER_HANDLE)?;
        let locale = non_empty("SITE_LOCALE", lookup("SITE_LOCALE"), DEFAULT_LOCALE)?;

        let image_url = lookup("SITE_SOCIAL_IMAGE_URL").unwrap_or_else(|| DEFAULT_SOCIAL_IMAGE_URL.to_owned());
        let image_url = parse_absolute("SITE_SOCIAL_IMAGE_URL", &image_url)?;
        let social_image = SocialImage {
            url: image_url.to_string(),
            width: parse_dimension("SITE_SOCIAL_IMAGE_WIDTH", lookup("SITE_SOCIAL_IMAGE_WIDTH"), DEFAULT_SOCIAL_IMAGE_WIDTH)?,
            height: parse_dimension(
                "SITE_SOCIAL_IMAGE_HEIGHT",
                lookup("SITE_SOCIAL_IMAGE_HEIGHT"),
                DEFAULT_SOCIAL_IMAGE_HEIGHT,
            )?,
        };

        Ok(Self { base_origin, site_name, twitter_handle, locale, social_image })
    }
}

// =============================================================================
// SERVER CONFIG
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}

impl ServerConfig {
    /// Optional: `BIND_ADDR` (default `0.0.0.0`), `PORT` (default 3000).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let ip = match lookup("BIND_ADDR") {
            Some(raw) => raw
                .trim()
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::InvalidAddr { var: "BIND_ADDR", value: raw })?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidNumber { var: "PORT", expected: "port", value: raw })?,
            None => DEFAULT_PORT,
        };
        Ok(Self { addr: SocketAddr::new(ip, port) })
    }
}

// =============================================================================
// PARSING HELPERS
// =============================================================================

fn non_empty(var: &'static str, raw: Option<String>, default: &str) -> Result<String, ConfigError> {
    let value = raw.unwrap_or_else(|| default.to_owned());
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Empty { var });
    }
    Ok(trimmed.to_owned())
}

fn parse_absolute(var: &'static str, raw: &str) -> Result<Url, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Empty { var });
    }
    let url = Url::parse(trimmed).map_err(|_| ConfigError::InvalidUrl { var, value: trimmed.to_owned() })?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(ConfigError::InvalidUrl { var, value: trimmed.to_owned() });
    }
    Ok(url)
}

fn parse_origin(var: &'static str, raw: &str) -> Result<Url, ConfigError> {
    let url = parse_absolute(var, raw)?;
    if url.path() != "/" || url.query().is_some() || url.fragment().is_some() {
        return Err(ConfigError::NotAnOrigin { var, value: raw.trim().to_owned() });
    }
    Ok(url)
}

fn parse_dimension(var: &'static str, raw: Option<String>, default: u32) -> Result<u32, ConfigError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    match raw.trim().parse::<u32>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(ConfigError::InvalidNumber { var, expected: "positive integer", value: raw }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
