//! Locale routing middleware.
//! Applies the router's decision before the request reaches the origin.

use axum::{
    body::Body,
    extract::State,
    http::{uri::PathAndQuery, HeaderName, HeaderValue, Request, Uri},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::http::request::request_id;
use crate::http::response;
use crate::locale::RequestContext;
use crate::observability::metrics;
use crate::routing::{LocaleRouter, RoutingDecision};

pub async fn locale_middleware(
    State(router): State<Arc<LocaleRouter>>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let path = req.uri().path().to_string();
    let settings = router.settings();

    // 0. Only the gateway may set the rewrite marker.
    req.headers_mut().remove(settings.marker_header);

    // 1. API routes and framework assets skip locale routing entirely.
    if router.is_excluded(&path) {
        return next.run(req).await;
    }

    // 2. Decide
    let ctx = RequestContext::from_headers(&path, req.headers(), settings.cookie_name);
    let (locale, decision) = router.decide(&ctx);
    metrics::record_decision(&decision, locale);

    tracing::debug!(
        request_id = %request_id(req.headers()),
        path = %path,
        locale = %locale,
        action = decision.action(),
        target = decision.target().unwrap_or_default(),
        "Locale routing decision"
    );

    // 3. Apply
    match decision {
        RoutingDecision::PassThrough => next.run(req).await,
        RoutingDecision::Rewrite { target } => {
            let Some(uri) = with_path(req.uri(), &target) else {
                return response::bad_request();
            };
            let Ok(marker) = HeaderValue::from_str(&path) else {
                return response::bad_request();
            };
            *req.uri_mut() = uri;
            req.headers_mut()
                .insert(HeaderName::from_static(settings.marker_header), marker);
            next.run(req).await
        }
        RoutingDecision::Redirect { target, status } => {
            let location = match req.uri().query() {
                Some(query) => format!("{target}?{query}"),
                None => target,
            };
            response::redirect(&location, status.status_code())
        }
    }
}

/// Replace the path of `uri`, keeping scheme, authority and query.
fn with_path(uri: &Uri, path: &str) -> Option<Uri> {
    let path_and_query = match uri.query() {
        Some(query) => format!("{path}?{query}"),
        None => path.to_string(),
    };
    let mut parts = uri.clone().into_parts();
    parts.path_and_query = Some(PathAndQuery::try_from(path_and_query).ok()?);
    Uri::from_parts(parts).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::LocaleSettings;
    use axum::{
        http::{header, StatusCode},
        middleware,
        Router,
    };
    use tower::ServiceExt;

    /// Echoes the URI and marker header the origin would see.
    async fn echo(req: Request<Body>) -> String {
        let marker = req
            .headers()
            .get("x-original-pathname")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("-")
            .to_string();
        format!("{} {}", req.uri(), marker)
    }

    fn app() -> Router {
        let router = Arc::new(LocaleRouter::new(Arc::new(LocaleSettings::default())));
        Router::new()
            .fallback(echo)
            .layer(middleware::from_fn_with_state(router, locale_middleware))
    }

    async fn send(req: Request<Body>) -> (StatusCode, Option<String>, String) {
        let res = app().oneshot(req).await.unwrap();
        let status = res.status();
        let location = res
            .headers()
            .get(header::LOCATION)
            .map(|v| v.to_str().unwrap().to_string());
        let body = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, location, String::from_utf8(body.to_vec()).unwrap())
    }

    fn get(uri: &str) -> axum::http::request::Builder {
        Request::builder().uri(uri)
    }

    #[tokio::test]
    async fn test_default_locale_rewrite_keeps_query() {
        let req = get("/news?page=2").body(Body::empty()).unwrap();
        let (status, location, body) = send(req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(location, None);
        assert_eq!(body, "/en/news?page=2 /news");
    }

    #[tokio::test]
    async fn test_negotiated_redirect() {
        let req = get("/news?page=2")
            .header(header::ACCEPT_LANGUAGE, "pt-BR,en;q=0.9")
            .body(Body::empty())
            .unwrap();
        let (status, location, _) = send(req).await;
        assert_eq!(status, StatusCode::FOUND);
        assert_eq!(location.as_deref(), Some("/br/news?page=2"));
    }

    #[tokio::test]
    async fn test_cookie_overrides_header() {
        let req = get("/markets")
            .header(header::COOKIE, "preferredLanguage=es")
            .header(header::ACCEPT_LANGUAGE, "pt-BR")
            .body(Body::empty())
            .unwrap();
        let (status, location, _) = send(req).await;
        assert_eq!(status, StatusCode::FOUND);
        assert_eq!(location.as_deref(), Some("/es/markets"));
    }

    #[tokio::test]
    async fn test_legacy_alias_redirect() {
        let req = get("/pt/artigo-1/")
            .header(header::COOKIE, "preferredLanguage=en")
            .body(Body::empty())
            .unwrap();
        let (status, location, _) = send(req).await;
        assert_eq!(status, StatusCode::MOVED_PERMANENTLY);
        assert_eq!(location.as_deref(), Some("/br/artigo-1/"));
    }

    #[tokio::test]
    async fn test_prefixed_and_excluded_paths_untouched() {
        for path in ["/br/news", "/es", "/post/hello-es/", "/api/posts?x=1", "/_next/static/app.js", "/favicon.ico"] {
            let req = get(path)
                .header(header::ACCEPT_LANGUAGE, "pt-BR")
                .body(Body::empty())
                .unwrap();
            let (status, _, body) = send(req).await;
            assert_eq!(status, StatusCode::OK, "{path}");
            assert_eq!(body, format!("{path} -"));
        }
    }

    #[tokio::test]
    async fn test_client_marker_never_reaches_origin() {
        for (path, expected) in [
            ("/en/news", "/en/news -"),
            ("/api/posts", "/api/posts -"),
            ("/news", "/en/news /news"),
        ] {
            let req = get(path)
                .header("x-original-pathname", "/admin/secret")
                .body(Body::empty())
                .unwrap();
            let (status, _, body) = send(req).await;
            assert_eq!(status, StatusCode::OK, "{path}");
            assert_eq!(body, expected);
        }
    }

    #[test]
    fn test_with_path() {
        let uri: Uri = "/news?a=1&b=2".parse().unwrap();
        assert_eq!(with_path(&uri, "/en/news").unwrap(), "/en/news?a=1&b=2");
        let uri: Uri = "http://example.com/news".parse().unwrap();
        assert_eq!(with_path(&uri, "/en/news").unwrap(), "http://example.com/en/news");
    }
}
