use super::*;

fn site() -> SiteConfig {
    SiteConfig::from_lookup(|_| None).unwrap()
}

fn login_content() -> PageContent {
    PageContent {
        title: "Login | Papermark".into(),
        description: "Login to Papermark".into(),
        canonical_path: "/login".into(),
    }
}

// =============================================================================
// resolve
// =============================================================================

#[test]
fn resolve_fans_title_out_to_every_schema() {
    let meta = RouteMetadata::resolve(&site(), &login_content()).unwrap();
    assert_eq!(meta.title(), "Login | Papermark");
    assert_eq!(meta.base().title, meta.title());
    assert_eq!(meta.open_graph().title, meta.title());
    assert_eq!(meta.twitter().title, meta.title());
}

#[test]
fn resolve_fans_description_out_to_every_schema() {
    let meta = RouteMetadata::resolve(&site(), &login_content()).unwrap();
    assert_eq!(meta.base().description, "Login to Papermark");
    assert_eq!(meta.open_graph().description, meta.base().description);
    assert_eq!(meta.twitter().description, meta.base().description);
}

#[test]
fn resolve_builds_absolute_canonical_url() {
    let meta = RouteMetadata::resolve(&site(), &login_content()).unwrap();
    assert_eq!(meta.canonical_url(), "https://www.papermark.com/login");
    assert_eq!(meta.base().canonical_url, meta.canonical_url());
    assert_eq!(meta.open_graph().url, meta.canonical_url());
}

#[test]
fn resolve_copies_site_constants() {
    let meta = RouteMetadata::resolve(&site(), &login_content()).unwrap();
    let og = meta.open_graph();
    assert_eq!(og.site_name, "Papermark");
    assert_eq!(og.locale, "en_US");
    assert_eq!(og.kind, "website");
    assert_eq!(og.images, vec![meta.social_image().clone()]);

    let tw = meta.twitter();
    assert_eq!(tw.card, "summary_large_image");
    assert_eq!(tw.creator, "@chrisberno");
    assert_eq!(tw.images, vec![meta.social_image().url.clone()]);
}

#[test]
fn resolve_social_image_is_positive_and_absolute() {
    let meta = RouteMetadata::resolve(&site(), &login_content()).unwrap();
    let image = meta.social_image();
    assert!(image.width > 0);
    assert!(image.height > 0);
    let url = Url::parse(&image.url).unwrap();
    assert_eq!(url.scheme(), "https");
}

#[test]
fn resolve_is_deterministic() {
    let site = site();
    let first = RouteMetadata::resolve(&site, &login_content()).unwrap();
    let second = RouteMetadata::resolve(&site, &login_content()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn resolve_trims_title_and_description() {
    let content = PageContent { title: "  Login  ".into(), description: "\tSign in\n".into(), ..login_content() };
    let meta = RouteMetadata::resolve(&site(), &content).unwrap();
    assert_eq!(meta.title(), "Login");
    assert_eq!(meta.description(), "Sign in");
}

#[test]
fn resolve_rejects_blank_title() {
    let content = PageContent { title: "   ".into(), ..login_content() };
    assert_eq!(RouteMetadata::resolve(&site(), &content), Err(MetadataError::EmptyTitle));
}

#[test]
fn resolve_rejects_blank_description() {
    let content = PageContent { description: String::new(), ..login_content() };
    assert_eq!(RouteMetadata::resolve(&site(), &content), Err(MetadataError::EmptyDescription));
}

#[test]
fn resolve_rejects_relative_path() {
    let content = PageContent { canonical_path: "login".into(), ..login_content() };
    assert_eq!(
        RouteMetadata::resolve(&site(), &content),
        Err(MetadataError::InvalidPath("login".into()))
    );
}

#[test]
fn resolve_rejects_zero_sized_image() {
    let mut site = site();
    site.social_image.height = 0;
    assert_eq!(
        RouteMetadata::resolve(&site, &login_content()),
        Err(MetadataError::InvalidImageSize { width: 800, height: 0 })
    );
}

#[test]
fn resolve_rejects_relative_image_url() {
    let mut site = site();
    site.social_image.url = "/_static/meta-image.png".into();
    assert!(matches!(
        RouteMetadata::resolve(&site, &login_content()),
        Err(MetadataError::InvalidImageUrl(_))
    ));
}

// =============================================================================
// normalize_path / join_origin
// =============================================================================

#[test]
fn normalize_path_collapses_repeated_slashes() {
    assert_eq!(normalize_path("//login").unwrap(), "/login");
    assert_eq!(normalize_path("/auth//login").unwrap(), "/auth/login");
    assert_eq!(normalize_path("/docs/").unwrap(), "/docs/");
    assert_eq!(normalize_path("/").unwrap(), "/");
    assert_eq!(normalize_path("///").unwrap(), "/");
}

#[test]
fn normalize_path_rejects_query_fragment_and_whitespace() {
    for raw in ["/login?next=/", "/login#form", "/log in", "", "login"] {
        assert!(normalize_path(raw).is_err(), "expected error for {raw:?}");
    }
}

#[test]
fn join_origin_places_exactly_one_separator() {
    let with_slash = Url::parse("https://www.papermark.com/").unwrap();
    assert_eq!(join_origin(&with_slash, "/login"), "https://www.papermark.com/login");
    assert_eq!(join_origin(&with_slash, "login"), "https://www.papermark.com/login");
    assert_eq!(join_origin(&with_slash, "/"), "https://www.papermark.com/");
}

#[test]
fn join_origin_keeps_port() {
    let origin = Url::parse("http://localhost:3000").unwrap();
    assert_eq!(join_origin(&origin, "/login"), "http://localhost:3000/login");
}

#[test]
fn canonical_url_never_contains_double_slash_after_scheme() {
    let content = PageContent { canonical_path: "///login".into(), ..login_content() };
    let meta = RouteMetadata::resolve(&site(), &content).unwrap();
    let after_scheme = meta.canonical_url().trim_start_matches("https://");
    assert!(!after_scheme.contains("//"));
    assert!(after_scheme.ends_with("/login"));
}

#[test]
fn join_origin_of_normalized_path_parses_as_absolute_url() {
    let origin = Url::parse("https://www.papermark.com").unwrap();
    for raw in ["/", "/login", "//auth//login/", "/docs/intro"] {
        let path = normalize_path(raw).unwrap();
        let joined = Url::parse(&join_origin(&origin, &path)).unwrap();
        assert_eq!(joined.host_str(), Some("www.papermark.com"));
        assert_eq!(joined.path(), path);
    }
}
