//! End-to-end locale routing through a running gateway.

use reqwest::StatusCode;
use std::net::SocketAddr;

use locale_gateway::lifecycle::Shutdown;

mod common;

async fn setup() -> (Shutdown, SocketAddr) {
    let origin = common::start_echo_origin().await;
    let shutdown = Shutdown::new();
    let gateway = common::start_gateway(origin, &shutdown).await;
    (shutdown, gateway)
}

fn location(res: &reqwest::Response) -> Option<&str> {
    res.headers().get("location").and_then(|v| v.to_str().ok())
}

#[tokio::test]
async fn test_default_locale_is_rewritten_invisibly() {
    let (shutdown, gateway) = setup().await;

    let res = common::client()
        .get(format!("http://{gateway}/news?page=2"))
        .send()
        .await
        .expect("Gateway unreachable");

    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers().contains_key("x-request-id"));
    assert_eq!(res.text().await.unwrap(), "/en/news?page=2|/news");

    shutdown.trigger();
}

#[tokio::test]
async fn test_portuguese_browser_is_redirected() {
    let (shutdown, gateway) = setup().await;

    let res = common::client()
        .get(format!("http://{gateway}/news"))
        .header("accept-language", "pt-BR,en;q=0.9")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(location(&res), Some("/br/news"));

    shutdown.trigger();
}

#[tokio::test]
async fn test_legacy_alias_is_permanent() {
    let (shutdown, gateway) = setup().await;

    let res = common::client()
        .get(format!("http://{gateway}/pt/artigo-1/?ref=home"))
        .header("cookie", "preferredLanguage=es")
        .header("accept-language", "es")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(location(&res), Some("/br/artigo-1/?ref=home"));

    shutdown.trigger();
}

#[tokio::test]
async fn test_following_the_redirect_passes_through() {
    let (shutdown, gateway) = setup().await;
    let client = common::client();

    let first = client
        .get(format!("http://{gateway}/markets"))
        .header("cookie", "preferredLanguage=es")
        .send()
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::FOUND);
    let target = location(&first).unwrap().to_string();

    let second = client
        .get(format!("http://{gateway}{target}"))
        .header("cookie", "preferredLanguage=es")
        .send()
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::OK);
    assert_eq!(second.text().await.unwrap(), "/es/markets|-");

    shutdown.trigger();
}

#[tokio::test]
async fn test_post_suffix_and_api_pass_through() {
    let (shutdown, gateway) = setup().await;
    let client = common::client();

    for path in ["/post/hello-es/", "/api/posts?locale=br", "/favicon.ico"] {
        let res = client
            .get(format!("http://{gateway}{path}"))
            .header("accept-language", "pt-BR")
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK, "{path}");
        assert_eq!(res.text().await.unwrap(), format!("{path}|-"));
    }

    shutdown.trigger();
}

#[tokio::test]
async fn test_dead_upstream_is_bad_gateway() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let dead = listener.local_addr().unwrap();
    drop(listener);

    let shutdown = Shutdown::new();
    let gateway = common::start_gateway(dead, &shutdown).await;

    let res = common::client()
        .get(format!("http://{gateway}/en/news"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_GATEWAY);

    shutdown.trigger();
}
