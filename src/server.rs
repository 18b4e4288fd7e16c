//! Locale edge service.
//!
//! Sits in front of the static build output and applies, in order: legacy
//! redirects, preference-based redirects for unprefixed pages, then static
//! file serving.

use crate::config::Config;
use crate::i18n::{
    alternate_urls, language_from_path, localized_path, parse_accept_language,
    strip_language_prefix, x_default_url, AlternateUrl, Language, LanguagePreference,
    MemoryStore, PreferenceStore, LANGUAGE_STORAGE_KEY,
};
use crate::redirects::RedirectTable;
use crate::routes::Route;
use crate::seo::sitemap_xml;
use axum::{
    extract::{Path, Query, Request, State},
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::{debug, info};

/// Lifetime of the preference cookie (one year).
const PREFERENCE_COOKIE_MAX_AGE: u32 = 60 * 60 * 24 * 365;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub redirects: Arc<RedirectTable>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            redirects: Arc::new(RedirectTable::legacy()),
        }
    }

    pub fn with_redirects(mut self, redirects: RedirectTable) -> Self {
        self.redirects = Arc::new(redirects);
        self
    }
}

/// Build the service router.
pub fn router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/health", get(health))
        .route("/api/locale", get(locale_info))
        .route("/lang/:code", get(switch_language))
        .route("/sitemap.xml", get(sitemap));

    let routes = match &state.config.static_dir {
        Some(dir) => routes.fallback_service(ServeDir::new(dir)),
        None => routes.fallback(not_found),
    };

    routes
        .layer(middleware::from_fn_with_state(state.clone(), locale_redirects))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ==================== Handlers ====================

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn not_found() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "not found" })))
}

async fn sitemap(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        sitemap_xml(&state.config.site_url),
    )
}

#[derive(Debug, Deserialize)]
struct PathQuery {
    path: Option<String>,
}

/// How a path resolves for the requesting visitor.
#[derive(Debug, Serialize)]
pub struct LocaleResolution {
    /// Language the page at `path` is rendered in
    pub lang: Language,
    /// Language the visitor prefers (cookie, then `Accept-Language`)
    pub preferred: Language,
    pub route: String,
    pub page: Option<Route>,
    pub canonical_path: String,
    pub alternates: Vec<AlternateUrl>,
    pub x_default: String,
}

async fn locale_info(
    State(state): State<AppState>,
    Query(query): Query<PathQuery>,
    headers: HeaderMap,
) -> Json<LocaleResolution> {
    let path = query.path.unwrap_or_else(|| "/".to_string());
    let lang = language_from_path(&path);
    let preference = LanguagePreference::new(cookie_store(&headers));

    Json(LocaleResolution {
        lang,
        preferred: preference.preferred_language(&browser_languages(&headers)),
        route: strip_language_prefix(&path),
        page: Route::from_path(&path),
        canonical_path: localized_path(lang, &path),
        alternates: alternate_urls(&path, &state.config.site_url),
        x_default: x_default_url(&path, &state.config.site_url),
    })
}

/// Explicit language switch: remember the choice and send the visitor to
/// the current page in that language.
async fn switch_language(Path(code): Path<String>, Query(query): Query<PathQuery>) -> Response {
    let lang = match Language::from_code(&code) {
        Ok(lang) => lang,
        Err(e) => {
            return (StatusCode::NOT_FOUND, Json(json!({ "error": e.to_string() }))).into_response()
        }
    };

    let current = query.path.unwrap_or_else(|| "/".to_string());
    let preference = LanguagePreference::new(MemoryStore::new());
    let target = safe_location(preference.switch_language(lang, &current));
    info!("Language switched to {}, redirecting to {}", lang, target);

    let mut response = (StatusCode::SEE_OTHER, [(header::LOCATION, target)]).into_response();
    if let Ok(Some(stored)) = preference.store().get_item(LANGUAGE_STORAGE_KEY) {
        append_preference_cookie(&mut response, &stored);
    }
    response
}

// ==================== Middleware ====================

async fn locale_redirects(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let method = request.method().clone();
    if method != Method::GET && method != Method::HEAD {
        return next.run(request).await;
    }

    let path = request.uri().path().to_string();

    if let Some(redirect) = state.redirects.lookup(&path) {
        info!("Legacy redirect {} -> {}", path, redirect.to);
        let status =
            StatusCode::from_u16(redirect.status).unwrap_or(StatusCode::MOVED_PERMANENTLY);
        let target = with_query(redirect.to, request.uri().query());
        return (status, [(header::LOCATION, target)]).into_response();
    }

    if !state.config.negotiate_redirects
        || !is_page_path(&path)
        || !language_from_path(&path).is_default()
    {
        return next.run(request).await;
    }

    let preference = LanguagePreference::new(cookie_store(request.headers()));
    let outcome = preference.negotiate(&browser_languages(request.headers()));

    let mut response = if outcome.language.is_default() {
        next.run(request).await
    } else {
        let target = with_query(
            &localized_path(outcome.language, &path),
            request.uri().query(),
        );
        debug!("Negotiated {} for {}, redirecting to {}", outcome.language, path, target);
        (StatusCode::FOUND, [(header::LOCATION, target)]).into_response()
    };

    response.headers_mut().insert(
        header::VARY,
        HeaderValue::from_static("Accept-Language, Cookie"),
    );
    if outcome.remembered {
        append_preference_cookie(&mut response, outcome.language.code());
    }
    response
}

// ==================== Helpers ====================

/// Preference store backed by the request's `jerna-lang` cookie.
fn cookie_store(headers: &HeaderMap) -> MemoryStore {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == LANGUAGE_STORAGE_KEY)
        .map(|(_, value)| MemoryStore::with_item(LANGUAGE_STORAGE_KEY, value.trim()))
        .unwrap_or_default()
}

fn browser_languages(headers: &HeaderMap) -> Vec<String> {
    headers
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok())
        .map(parse_accept_language)
        .unwrap_or_default()
}

fn append_preference_cookie(response: &mut Response, code: &str) {
    let cookie = format!(
        "{}={}; Path=/; Max-Age={}; SameSite=Lax",
        LANGUAGE_STORAGE_KEY, code, PREFERENCE_COOKIE_MAX_AGE
    );
    if let Ok(value) = HeaderValue::from_str(&cookie) {
        response.headers_mut().append(header::SET_COOKIE, value);
    }
}

/// Pages are everything except the service's own endpoints and files with
/// an extension (assets).
fn is_page_path(path: &str) -> bool {
    if path == "/health" || path == "/sitemap.xml" {
        return false;
    }
    if path.starts_with("/api/") || path.starts_with("/lang/") {
        return false;
    }

    let last_segment = path.rsplit('/').next().unwrap_or("");
    !last_segment.contains('.')
}

/// Carry the request's query string over to a redirect target.
fn with_query(target: &str, query: Option<&str>) -> String {
    match query.filter(|query| !query.is_empty()) {
        Some(query) => format!("{}?{}", target, query),
        None => target.to_string(),
    }
}

/// Keep redirect targets on this origin.
fn safe_location(path: String) -> String {
    if path.starts_with("//") || path.contains('\\') {
        "/".to_string()
    } else {
        path
    }
}
