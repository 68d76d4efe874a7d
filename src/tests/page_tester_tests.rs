use std::time::Duration;

use wiremock::matchers::{ header, method, path };
use wiremock::{ Mock, MockServer, ResponseTemplate };

use crate::config::HttpSettings;
use crate::errors::{ FailureKind, SmokeError };
use crate::implementations::http_fetcher::HttpPageFetcher;
use crate::implementations::page_tester::PageTester;
use crate::tests::setup;
use crate::traits::page_fetcher::PageFetcher;

const PAGE: &str = r#"<html><body>
    <img src="logo.png" alt="Logo"><img src="hero.jpg">
    <a href="/services.html">Services</a>
    <form action="/contact"><input type="submit"></form>
</body></html>"#;

fn create_test_fetcher(timeout: Duration) -> HttpPageFetcher {
    let settings = HttpSettings {
        user_agent: "Mozilla/5.0".to_string(),
        timeout,
    };
    HttpPageFetcher::new(&settings).expect("client builds")
}

async fn serve(server: &MockServer, page_path: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(response)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_fetch_success_sends_user_agent() {
    setup();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/index.html"))
        .and(header("user-agent", "Mozilla/5.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PAGE))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = create_test_fetcher(Duration::from_secs(10));
    let page = fetcher
        .fetch_page(&format!("{}/index.html", server.uri())).await
        .expect("page fetched");

    assert_eq!(page.status, 200);
    assert_eq!(page.body, PAGE.as_bytes());
}

#[tokio::test]
async fn test_fetch_not_found_is_http_status() {
    setup();
    let server = MockServer::start().await;
    serve(&server, "/missing.html", ResponseTemplate::new(404)).await;

    let fetcher = create_test_fetcher(Duration::from_secs(10));
    let err = fetcher.fetch_page(&format!("{}/missing.html", server.uri())).await.unwrap_err();

    assert_eq!(err.kind(), FailureKind::HttpStatus);
    assert_eq!(err.to_string(), "HTTP 404 - Not Found");
}

#[tokio::test]
async fn test_fetch_server_error_is_http_status() {
    setup();
    let server = MockServer::start().await;
    serve(&server, "/index.html", ResponseTemplate::new(503)).await;

    let fetcher = create_test_fetcher(Duration::from_secs(10));
    let err = fetcher.fetch_page(&format!("{}/index.html", server.uri())).await.unwrap_err();

    match err {
        SmokeError::HttpStatus { status, reason } => {
            assert_eq!(status, 503);
            assert_eq!(reason, "Service Unavailable");
        }
        other => panic!("expected HTTP status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_slow_response_times_out() {
    setup();
    let server = MockServer::start().await;
    serve(
        &server,
        "/index.html",
        ResponseTemplate::new(200).set_body_string(PAGE).set_delay(Duration::from_secs(3))
    ).await;

    let fetcher = create_test_fetcher(Duration::from_millis(200));
    let err = fetcher.fetch_page(&format!("{}/index.html", server.uri())).await.unwrap_err();

    assert!(matches!(err, SmokeError::Timeout(_)), "got {:?}", err);
    assert_eq!(err.kind(), FailureKind::Other);
}

#[tokio::test]
async fn test_fetch_connection_refused_is_transport() {
    setup();
    // Grab a free port, then close it so nothing is listening
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let fetcher = create_test_fetcher(Duration::from_secs(10));
    let err = fetcher.fetch_page(&format!("http://127.0.0.1:{}/index.html", port)).await.unwrap_err();

    assert_eq!(err.kind(), FailureKind::Transport, "got {:?}", err);
    assert!(err.to_string().starts_with("URL "));
}

#[tokio::test]
async fn test_fetch_malformed_url_is_transport() {
    setup();
    let fetcher = create_test_fetcher(Duration::from_secs(10));
    let err = fetcher.fetch_page("index.html").await.unwrap_err();

    assert_eq!(err.kind(), FailureKind::Transport, "got {:?}", err);
}

#[tokio::test]
async fn test_page_tester_success() {
    setup();
    let server = MockServer::start().await;
    serve(&server, "/index.html", ResponseTemplate::new(200).set_body_string(PAGE)).await;

    let fetcher = create_test_fetcher(Duration::from_secs(10));
    let tester = PageTester::new(&fetcher, 10);
    let outcome = tester.test(&format!("{}/index.html", server.uri()), "Home").await;

    assert!(outcome.success);
    assert!(outcome.load_time < Duration::from_secs(10));
}

#[tokio::test]
async fn test_page_tester_404_fails_with_zero_load_time() {
    setup();
    let server = MockServer::start().await;

    let fetcher = create_test_fetcher(Duration::from_secs(10));
    let tester = PageTester::new(&fetcher, 10);
    let outcome = tester.test(&format!("{}/contact.html", server.uri()), "Contact").await;

    assert!(!outcome.success);
    assert_eq!(outcome.load_time, Duration::ZERO);
}

#[tokio::test]
async fn test_page_tester_rejects_non_utf8_body() {
    setup();
    let server = MockServer::start().await;
    serve(
        &server,
        "/index.html",
        ResponseTemplate::new(200).set_body_bytes(vec![0x3c, 0x70, 0x3e, 0xff, 0xfe, 0xfd])
    ).await;

    let fetcher = create_test_fetcher(Duration::from_secs(10));
    let tester = PageTester::new(&fetcher, 10);
    let outcome = tester.test(&format!("{}/index.html", server.uri()), "Home").await;

    assert!(!outcome.success);
    assert_eq!(outcome.load_time, Duration::ZERO);
}
