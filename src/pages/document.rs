//! Full HTML document for a page: resolved head plus the client mount point.

use super::ComponentHandle;
use crate::metadata::RouteMetadata;
use crate::metadata::head::{escape, render_head};

/// `en_US` -> `en`; falls back to `en` for an unusable locale.
#[must_use]
pub fn html_lang(locale: &str) -> &str {
    let lang = locale.split(['_', '-']).next().unwrap_or_default();
    if lang.is_empty() || !lang.chars().all(|c| c.is_ascii_alphabetic()) { "en" } else { lang }
}

#[must_use]
pub fn render_document(meta: &RouteMetadata, component: &ComponentHandle) -> String {
    let mut head = String::from("<meta charset=\"utf-8\">\n");
    head.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    head.push_str(&render_head(meta));

    format!(
        "<!DOCTYPE html>\n<html lang=\"{lang}\">\n<head>\n{head}</head>\n<body>\n<div id=\"{id}\" data-component=\"{name}\"></div>\n</body>\n</html>\n",
        lang = escape(html_lang(meta.locale())),
        id = escape(component.mount_id),
        name = escape(component.name),
    )
}

#[cfg(test)]
#[path = "document_test.rs"]
mod tests;
