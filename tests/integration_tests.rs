//! Integration tests for the locale edge service
//!
//! These tests drive the full router in-process, covering the interaction
//! between the redirect table, preference negotiation and static serving.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use jerna_locale::config::Config;
use jerna_locale::i18n::{Language, LanguagePreference, MemoryStore};
use jerna_locale::navigation::language_options;
use jerna_locale::redirects::RedirectTable;
use jerna_locale::server::{router, AppState};
use std::path::PathBuf;
use tempfile::TempDir;
use tower::ServiceExt;

// ==================== Test Helpers ====================

fn create_test_config(static_dir: Option<PathBuf>) -> Config {
    Config {
        site_url: "https://example.com".to_string(),
        port: 8080,
        static_dir,
        negotiate_redirects: true,
    }
}

fn create_app() -> Router {
    router(AppState::new(create_test_config(None)))
}

/// Create a minimal static build with English and Spanish home pages
fn create_static_site() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    std::fs::write(temp_dir.path().join("index.html"), "<html lang=\"en\">home</html>")
        .expect("Failed to write index");
    std::fs::write(temp_dir.path().join("favicon.svg"), "<svg/>").expect("Failed to write favicon");
    std::fs::create_dir(temp_dir.path().join("es")).expect("Failed to create es dir");
    std::fs::write(
        temp_dir.path().join("es").join("index.html"),
        "<html lang=\"es\">inicio</html>",
    )
    .expect("Failed to write es index");
    temp_dir
}

async fn get(app: Router, uri: &str, headers: &[(header::HeaderName, &str)]) -> axum::response::Response {
    let mut builder = Request::builder().method("GET").uri(uri);
    for (name, value) in headers {
        builder = builder.header(name.clone(), *value);
    }
    app.oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn location(response: &axum::response::Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .expect("Should have Location header")
        .to_str()
        .unwrap()
}

fn set_cookie(response: &axum::response::Response) -> Option<String> {
    response
        .headers()
        .get(header::SET_COOKIE)
        .map(|value| value.to_str().unwrap().to_string())
}

// ==================== Endpoint Tests ====================

#[tokio::test]
async fn test_health() {
    let response = get(create_app(), "/health", &[]).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_locale_info_for_spanish_page() {
    let response = get(create_app(), "/api/locale?path=/es/contact", &[]).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();

    assert_eq!(json["lang"], "es");
    assert_eq!(json["route"], "/contact");
    assert_eq!(json["page"], "contact");
    assert_eq!(json["canonical_path"], "/es/contact");
    assert_eq!(json["x_default"], "https://example.com/contact");
    assert_eq!(json["alternates"][0]["url"], "https://example.com/contact");
    assert_eq!(json["alternates"][1]["url"], "https://example.com/es/contact");
    assert_eq!(json["alternates"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_locale_info_reports_preference() {
    let response = get(
        create_app(),
        "/api/locale?path=/essays",
        &[(header::ACCEPT_LANGUAGE, "fr-FR, es;q=0.5")],
    )
    .await;

    let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(json["lang"], "en");
    assert_eq!(json["preferred"], "es");
    assert_eq!(json["route"], "/essays");
    assert!(json["page"].is_null());
}

#[tokio::test]
async fn test_locale_info_defaults_to_root() {
    let response = get(create_app(), "/api/locale", &[(header::COOKIE, "jerna-lang=es")]).await;

    let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(json["route"], "/");
    assert_eq!(json["page"], "home");
    assert_eq!(json["preferred"], "es");
}

#[tokio::test]
async fn test_sitemap() {
    let response = get(create_app(), "/sitemap.xml", &[]).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("application/xml"));
    let body = body_string(response).await;
    assert!(body.contains("<loc>https://example.com/es/services</loc>"));
}

// ==================== Language Switch Tests ====================

#[tokio::test]
async fn test_switch_to_spanish() {
    let response = get(create_app(), "/lang/es?path=/about", &[]).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/es/about");
    let cookie = set_cookie(&response).expect("Should set cookie");
    assert!(cookie.starts_with("jerna-lang=es;"));
}

#[tokio::test]
async fn test_switch_to_english_strips_prefix() {
    let response = get(create_app(), "/lang/en?path=/es/services", &[]).await;

    assert_eq!(location(&response), "/services");
    assert!(set_cookie(&response).unwrap().starts_with("jerna-lang=en;"));
}

#[tokio::test]
async fn test_switch_to_unsupported_language() {
    let response = get(create_app(), "/lang/fr?path=/about", &[]).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(set_cookie(&response).is_none());
}

#[tokio::test]
async fn test_switcher_link_overrides_stored_preference() {
    let english = language_options("/es/about")
        .into_iter()
        .find(|option| option.lang == Language::English)
        .expect("Should offer English");

    let response = get(
        create_app(),
        &english.switch_href,
        &[(header::COOKIE, "jerna-lang=es")],
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/about");
    assert!(set_cookie(&response).unwrap().starts_with("jerna-lang=en;"));

    // The next request carries the new cookie and stays on the English page
    let response = get(
        create_app(),
        &english.href,
        &[(header::ACCEPT_LANGUAGE, "es-ES"), (header::COOKIE, "jerna-lang=en")],
    )
    .await;
    assert!(response.headers().get(header::LOCATION).is_none());
}

#[tokio::test]
async fn test_switch_rejects_protocol_relative_target() {
    let response = get(create_app(), "/lang/en?path=//evil.example", &[]).await;
    assert_eq!(location(&response), "/");
}

// ==================== Redirect Tests ====================

#[tokio::test]
async fn test_legacy_redirect() {
    let response = get(create_app(), "/en/about", &[]).await;

    assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(location(&response), "/about");
}

#[tokio::test]
async fn test_legacy_redirect_keeps_query_string() {
    let response = get(create_app(), "/en/about?ref=a&utm_source=x", &[]).await;

    assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(location(&response), "/about?ref=a&utm_source=x");
}

#[tokio::test]
async fn test_legacy_redirect_root_with_trailing_slash() {
    let response = get(create_app(), "/en/", &[]).await;

    assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(location(&response), "/");
}

#[tokio::test]
async fn test_legacy_redirects_can_be_disabled() {
    let app = router(AppState::new(create_test_config(None)).with_redirects(RedirectTable::empty()));
    let response = get(app, "/en/about", &[]).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_browser_language_redirects_unprefixed_page() {
    let response = get(
        create_app(),
        "/services",
        &[(header::ACCEPT_LANGUAGE, "es-ES,es;q=0.9,en;q=0.8")],
    )
    .await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/es/services");
    assert_eq!(response.headers()[header::VARY], "Accept-Language, Cookie");
    assert!(set_cookie(&response).unwrap().starts_with("jerna-lang=es;"));
}

#[tokio::test]
async fn test_negotiated_redirect_keeps_query_string() {
    let response = get(
        create_app(),
        "/contact?utm_source=x&utm_medium=email",
        &[(header::ACCEPT_LANGUAGE, "es")],
    )
    .await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/es/contact?utm_source=x&utm_medium=email");
}

#[tokio::test]
async fn test_stored_preference_beats_browser_language() {
    let response = get(
        create_app(),
        "/about",
        &[
            (header::ACCEPT_LANGUAGE, "fr-FR"),
            (header::COOKIE, "jerna-lang=es"),
        ],
    )
    .await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/es/about");
    assert!(set_cookie(&response).is_none());
}

#[tokio::test]
async fn test_default_preference_cookie_suppresses_redirect() {
    let response = get(
        create_app(),
        "/about",
        &[
            (header::ACCEPT_LANGUAGE, "es-ES"),
            (header::COOKIE, "jerna-lang=en"),
        ],
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response.headers().get(header::LOCATION).is_none());
}

#[tokio::test]
async fn test_invalid_cookie_is_replaced() {
    let response = get(
        create_app(),
        "/",
        &[
            (header::ACCEPT_LANGUAGE, "es"),
            (header::COOKIE, "jerna-lang=klingon"),
        ],
    )
    .await;

    assert_eq!(location(&response), "/es");
    assert!(set_cookie(&response).unwrap().starts_with("jerna-lang=es;"));
}

#[tokio::test]
async fn test_prefixed_pages_are_not_negotiated() {
    let response = get(
        create_app(),
        "/es/about",
        &[(header::ACCEPT_LANGUAGE, "en-US"), (header::COOKIE, "jerna-lang=en")],
    )
    .await;

    assert!(response.headers().get(header::LOCATION).is_none());
}

#[tokio::test]
async fn test_lookalike_prefix_is_negotiated_as_unprefixed() {
    let response = get(create_app(), "/essays", &[(header::ACCEPT_LANGUAGE, "es")]).await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/es/essays");
}

#[tokio::test]
async fn test_negotiation_can_be_disabled() {
    let mut config = create_test_config(None);
    config.negotiate_redirects = false;
    let app = router(AppState::new(config));

    let response = get(app, "/about", &[(header::ACCEPT_LANGUAGE, "es")]).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(set_cookie(&response).is_none());
}

#[tokio::test]
async fn test_post_requests_pass_through() {
    let request = Request::builder()
        .method("POST")
        .uri("/en/about")
        .header(header::ACCEPT_LANGUAGE, "es")
        .body(Body::empty())
        .unwrap();
    let response = create_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ==================== Static Serving Tests ====================

#[tokio::test]
async fn test_serves_static_home_page() {
    let site = create_static_site();
    let app = router(AppState::new(create_test_config(Some(site.path().to_path_buf()))));

    let response = get(app, "/", &[(header::ACCEPT_LANGUAGE, "en-US")]).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(set_cookie(&response).unwrap().starts_with("jerna-lang=en;"));
    assert!(body_string(response).await.contains("home"));
}

#[tokio::test]
async fn test_serves_spanish_page_without_redirect() {
    let site = create_static_site();
    let app = router(AppState::new(create_test_config(Some(site.path().to_path_buf()))));

    let response = get(app, "/es/", &[(header::ACCEPT_LANGUAGE, "es")]).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("inicio"));
}

#[tokio::test]
async fn test_assets_are_not_negotiated() {
    let site = create_static_site();
    let app = router(AppState::new(create_test_config(Some(site.path().to_path_buf()))));

    let response = get(app, "/favicon.svg", &[(header::ACCEPT_LANGUAGE, "es")]).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(set_cookie(&response).is_none());
}

// ==================== Client Flow Tests ====================

#[test]
fn test_switch_then_navigate_keeps_choice() {
    let preference = LanguagePreference::new(MemoryStore::new());

    // Visitor lands with a Spanish browser, then explicitly picks English
    assert_eq!(preference.negotiate(&["es-ES"]).language, Language::Spanish);
    assert_eq!(preference.switch_language(Language::English, "/es/contact"), "/contact");

    // Later visits keep the explicit choice regardless of browser settings
    assert_eq!(preference.preferred_language(&["es-ES"]), Language::English);
}
