use super::ArticleFetcher;
use crate::{Article, DownloadError, ErrorKind, FetchConfig};
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PAGE: &str = r#"<html><head><title>Ignored</title></head><body>
    <h1>Headline</h1>
    <p>Body text.</p>
</body></html>"#;

// The blocking client must neither be built nor dropped on an async worker.
async fn fetch(config: FetchConfig, url: String) -> Result<Article, DownloadError> {
    let _ = env_logger::builder().is_test(true).try_init();
    tokio::task::spawn_blocking(move || ArticleFetcher::new(&config)?.fetch(&url))
        .await
        .expect("fetch task panicked")
}

async fn serve(template: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(template)
        .mount(&server)
        .await;
    server
}

#[test]
fn title_is_last_segment() {
    assert_eq!(ArticleFetcher::extract_title("https://www.wired.com/a/b/c"), "c");
    assert_eq!(
        ArticleFetcher::extract_title("https://www.wired.com/story/slug.html?utm=1"),
        "slug.html?utm=1"
    );
    assert_eq!(
        ArticleFetcher::extract_title("https://www.wired.com/story/my%20slug"),
        "my%20slug"
    );
}

#[test]
fn title_skips_trailing_slash() {
    assert_eq!(
        ArticleFetcher::extract_title("https://www.wired.com/story/some-story/"),
        "some-story"
    );
    assert_eq!(ArticleFetcher::extract_title("///"), "///");
}

#[tokio::test]
async fn fetch_article() {
    let server = serve(ResponseTemplate::new(200).set_body_string(PAGE)).await;

    let article = fetch(
        FetchConfig::default(),
        format!("{}/story/robots-are-here", server.uri()),
    )
    .await
    .unwrap();

    assert_eq!(article.title, "robots-are-here");
    assert_eq!(article.content, "Headline\n\nBody text.");
}

#[tokio::test]
async fn empty_body_has_no_content() {
    let server = serve(ResponseTemplate::new(200)).await;

    let article = fetch(FetchConfig::default(), format!("{}/story/empty", server.uri()))
        .await
        .unwrap();

    assert_eq!(article.title, "empty");
    assert_eq!(article.content, "");
}

#[tokio::test]
async fn not_found_is_a_fetch_error() {
    let server = serve(ResponseTemplate::new(404)).await;

    let error = fetch(FetchConfig::default(), format!("{}/story/gone", server.uri()))
        .await
        .unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Fetch);
    assert!(matches!(error, DownloadError::Status(status) if status.as_u16() == 404));
    assert_eq!(error.to_string(), "HTTP error: 404 Not Found");
}

#[tokio::test]
async fn only_200_is_accepted() {
    for status in [201, 204, 500] {
        let server = serve(ResponseTemplate::new(status).set_body_string(PAGE)).await;

        let error = fetch(FetchConfig::default(), format!("{}/story/x", server.uri()))
            .await
            .unwrap_err();

        assert_eq!(error.kind(), ErrorKind::Fetch, "status {status}");
    }
}

#[tokio::test]
async fn invalid_url() {
    let error = fetch(FetchConfig::default(), "wired.com/no-scheme".into())
        .await
        .unwrap_err();

    assert!(matches!(error, DownloadError::Url(_)));
    assert_eq!(error.kind(), ErrorKind::Fetch);
}

#[tokio::test]
async fn unreachable_server() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let error = fetch(
        FetchConfig::default(),
        format!("http://127.0.0.1:{port}/story/offline"),
    )
    .await
    .unwrap_err();

    assert!(matches!(error, DownloadError::Http(_)));
}

#[tokio::test]
async fn timeout_is_applied() {
    let server = serve(
        ResponseTemplate::new(200)
            .set_body_string(PAGE)
            .set_delay(Duration::from_secs(3)),
    )
    .await;

    let config = FetchConfig::default().with_timeout(Duration::from_millis(200));
    let error = fetch(config, format!("{}/story/slow", server.uri()))
        .await
        .unwrap_err();

    assert!(matches!(error, DownloadError::Http(_)));
}

#[tokio::test]
async fn redirects_are_followed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/story/old"))
        .respond_with(
            ResponseTemplate::new(301)
                .insert_header("Location", format!("{}/story/new", server.uri()).as_str()),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/story/new"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PAGE))
        .mount(&server)
        .await;

    let url = format!("{}/story/old", server.uri());
    let article = fetch(FetchConfig::default(), url.clone()).await.unwrap();
    // the title follows the requested url, not the redirect target
    assert_eq!(article.title, "old");
    assert_eq!(article.content, "Headline\n\nBody text.");

    let error = fetch(FetchConfig::default().with_max_redirects(0), url)
        .await
        .unwrap_err();
    assert!(matches!(error, DownloadError::Status(status) if status.as_u16() == 301));
}

#[tokio::test]
async fn custom_user_agent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("user-agent", "wired-downloader-test"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PAGE))
        .mount(&server)
        .await;

    let config = FetchConfig::default().with_user_agent("wired-downloader-test");
    let article = fetch(config, format!("{}/story/agent", server.uri()))
        .await
        .unwrap();

    assert_eq!(article.content, "Headline\n\nBody text.");
}
