//! Document head tags for a resolved route.

use std::fmt::Write as _;

use super::RouteMetadata;

/// One element destined for `<head>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadTag {
    Title(String),
    /// `<meta name=.. content=..>`
    Name { name: &'static str, content: String },
    /// `<meta property=.. content=..>` (Open Graph)
    Property { property: &'static str, content: String },
    /// `<link rel=.. href=..>`
    Link { rel: &'static str, href: String },
}

impl HeadTag {
    fn name(name: &'static str, content: impl Into<String>) -> Self {
        Self::Name { name, content: content.into() }
    }

    fn property(property: &'static str, content: impl Into<String>) -> Self {
        Self::Property { property, content: content.into() }
    }

    /// Render as a single HTML element with escaped values.
    #[must_use]
    pub fn to_html(&self) -> String {
        match self {
            Self::Title(text) => format!("<title>{}</title>", escape(text)),
            Self::Name { name, content } => format!(r#"<meta name="{name}" content="{}">"#, escape(content)),
            Self::Property { property, content } => {
                format!(r#"<meta property="{property}" content="{}">"#, escape(content))
            }
            Self::Link { rel, href } => format!(r#"<link rel="{rel}" href="{}">"#, escape(href)),
        }
    }
}

/// Tags for the base record, then Open Graph, then the Twitter card.
#[must_use]
pub fn head_tags(meta: &RouteMetadata) -> Vec<HeadTag> {
    let base = meta.base();
    let og = meta.open_graph();
    let twitter = meta.twitter();

    let mut tags = vec![
        HeadTag::Title(base.title),
        HeadTag::name("description", base.description),
        HeadTag::Link { rel: "canonical", href: base.canonical_url },
        HeadTag::property("og:title", og.title),
        HeadTag::property("og:description", og.description),
        HeadTag::property("og:url", og.url),
        HeadTag::property("og:site_name", og.site_name),
        HeadTag::property("og:locale", og.locale),
        HeadTag::property("og:type", og.kind),
    ];
    for image in og.images {
        tags.push(HeadTag::property("og:image", image.url));
        tags.push(HeadTag::property("og:image:width", image.width.to_string()));
        tags.push(HeadTag::property("og:image:height", image.height.to_string()));
    }

    tags.push(HeadTag::name("twitter:card", twitter.card));
    tags.push(HeadTag::name("twitter:title", twitter.title));
    tags.push(HeadTag::name("twitter:description", twitter.description));
    tags.push(HeadTag::name("twitter:creator", twitter.creator));
    for image in twitter.images {
        tags.push(HeadTag::name("twitter:image", image));
    }
    tags
}

/// Newline-separated HTML for every head tag of `meta`.
#[must_use]
pub fn render_head(meta: &RouteMetadata) -> String {
    let mut out = String::new();
    for tag in head_tags(meta) {
        let _ = writeln!(out, "{}", tag.to_html());
    }
    out
}

/// Escape text for use in HTML element content and quoted attributes.
#[must_use]
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
#[path = "head_test.rs"]
mod tests;
