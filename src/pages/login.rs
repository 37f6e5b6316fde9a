//! Login route: `/login`.

use std::sync::Arc;

use super::{ClientComponent, Page};
use crate::config::SiteConfig;
use crate::metadata::PageContent;

pub const PATH: &str = "/login";

/// Interactive login form, shipped by the client bundle.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoginClient;

impl ClientComponent for LoginClient {
    fn name(&self) -> &'static str {
        "LoginClient"
    }

    fn mount_id(&self) -> &'static str {
        "login-client"
    }
}

fn content(site: &SiteConfig) -> PageContent {
    PageContent {
        title: format!("Login | {}", site.site_name),
        description: format!("Login to {}", site.site_name),
        canonical_path: PATH.to_owned(),
    }
}

#[must_use]
pub fn page(component: Arc<dyn ClientComponent>) -> Page {
    Page::new(PATH, content, component)
}
