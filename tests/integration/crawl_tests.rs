//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full crawl cycle end-to-end.

use faq_harvest::config::Config;
use faq_harvest::crawler::{run_crawl, Coordinator};
use faq_harvest::state::FetchFailure;
use faq_harvest::storage::{JsonStorage, Storage};
use faq_harvest::{CrawlState, FaqRecord};
use std::path::Path;
use std::time::{Duration, Instant};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const HOME_PAGE: &str = r#"<html><head><title>Home</title></head><body>
    <div class="faq-item">
      <div class="faq-header"><span>What is the card fee?</span></div>
      <div class="faq-answer"><p>The annual fee is ₹500 for the first year.</p></div>
    </div>
    <a href="/faq">FAQ</a>
</body></html>"#;

const FAQ_PAGE: &str = r#"<html><head><title>FAQ</title></head><body>
    <h2>Can I get a refund?</h2>
    <p>Refunds take 5 to 7 days.</p>
</body></html>"#;

/// Creates a test configuration pointing at the mock server
fn create_test_config(seed: &str, corpus_path: &Path) -> Config {
    let mut config = Config::from_seed(seed);
    config.crawler.politeness_delay_ms = 0;
    config.crawler.request_timeout_secs = 5;
    config.output.corpus_path = corpus_path.to_string_lossy().into_owned();
    config
}

fn html(body: impl Into<String>) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.into(), "text/html; charset=utf-8")
}

async fn mount_page(server: &MockServer, page_path: &str, body: &str, expected_hits: u64) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(html(body))
        .expect(expected_hits)
        .mount(server)
        .await;
}

fn load_corpus(path: &Path) -> Vec<FaqRecord> {
    JsonStorage::new(path).load().expect("corpus should load")
}

#[tokio::test]
async fn test_full_crawl_collects_faqs_in_order() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/", HOME_PAGE, 1).await;
    mount_page(&mock_server, "/faq", FAQ_PAGE, 1).await;

    let dir = TempDir::new().unwrap();
    let corpus_path = dir.path().join("faqs.json");
    let mut config = create_test_config(&base_url, &corpus_path);
    config.crawler.max_pages = 2;

    let mut coordinator = Coordinator::new(config).expect("Failed to create coordinator");
    let stats = coordinator.run().await.expect("Crawl failed");

    assert_eq!(coordinator.state(), CrawlState::Completed);
    assert_eq!(stats.pages_processed, 2);
    assert_eq!(stats.records_added, 2);
    assert_eq!(stats.corpus_size, 2);

    let records = load_corpus(&corpus_path);
    assert_eq!(records.len(), 2);

    assert_eq!(records[0].question, "What is the card fee?");
    assert_eq!(records[0].answer, "The annual fee is ₹500 for the first year.");
    assert_eq!(records[0].source_url, format!("{}/", base_url));
    assert_eq!(records[0].extraction_method.as_deref(), Some("structured"));

    assert_eq!(records[1].question, "Can I get a refund?");
    assert_eq!(records[1].answer, "Refunds take 5 to 7 days.");
    assert_eq!(records[1].source_url, format!("{}/faq", base_url));
    assert_eq!(
        records[1].extraction_method.as_deref(),
        Some("heading-adjacency")
    );
    assert!(records.iter().all(|r| r.extracted_at.is_some()));

    // The file on disk is a plain JSON array
    let raw = std::fs::read_to_string(&corpus_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed.as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_second_run_refetches_but_adds_nothing() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/", HOME_PAGE, 2).await;
    mount_page(&mock_server, "/faq", FAQ_PAGE, 2).await;

    let dir = TempDir::new().unwrap();
    let corpus_path = dir.path().join("faqs.json");

    let first = run_crawl(create_test_config(&base_url, &corpus_path))
        .await
        .expect("First crawl failed");
    assert_eq!(first.records_added, 2);

    let second = run_crawl(create_test_config(&base_url, &corpus_path))
        .await
        .expect("Second crawl failed");
    assert_eq!(second.pages_processed, 2);
    assert_eq!(second.candidates_found, 2);
    assert_eq!(second.records_added, 0);
    assert_eq!(second.corpus_size, 2);

    let records = load_corpus(&corpus_path);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].question, "What is the card fee?");
    assert_eq!(records[1].question, "Can I get a refund?");
}

#[tokio::test]
async fn test_each_url_fetched_once() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    let home = r##"<html><body>
        <a href="/faq">FAQ</a>
        <a href="/faq/">FAQ with slash</a>
        <a href="/faq#fees">FAQ section</a>
        <a href="/faq?">FAQ with empty query</a>
        <a href="/cards">Cards</a>
    </body></html>"##;
    let faq = r##"<html><body>
        <a href="/">Home</a>
        <a href="/#top">Top</a>
        <a href="/cards">Cards</a>
    </body></html>"##;
    let cards = r#"<html><body><a href="/faq">FAQ</a></body></html>"#;

    mount_page(&mock_server, "/", home, 1).await;
    mount_page(&mock_server, "/faq", faq, 1).await;
    mount_page(&mock_server, "/cards", cards, 1).await;

    let dir = TempDir::new().unwrap();
    let corpus_path = dir.path().join("faqs.json");
    let mut config = create_test_config(&base_url, &corpus_path);
    config.crawler.max_pages = 20;

    let mut coordinator = Coordinator::new(config).unwrap();
    let stats = coordinator.run().await.unwrap();

    assert_eq!(stats.pages_fetched, 3);
    assert!(stats.duplicates_skipped >= 4);
    assert_eq!(coordinator.frontier().visited_count(), 3);
    assert!(coordinator.frontier().is_empty());

    // A run that found nothing still leaves a valid, empty corpus file
    assert!(load_corpus(&corpus_path).is_empty());
}

#[tokio::test]
async fn test_page_budget_stops_the_crawl() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/", HOME_PAGE, 1).await;
    mount_page(&mock_server, "/faq", FAQ_PAGE, 0).await;

    let dir = TempDir::new().unwrap();
    let corpus_path = dir.path().join("faqs.json");
    let mut config = create_test_config(&base_url, &corpus_path);
    config.crawler.max_pages = 1;

    let stats = run_crawl(config).await.unwrap();
    assert_eq!(stats.pages_fetched, 1);
    assert_eq!(load_corpus(&corpus_path).len(), 1);
}

#[tokio::test]
async fn test_failed_pages_do_not_abort_the_crawl() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    let home = r#"<html><body>
        <a href="/missing">Missing</a>
        <a href="/broken">Broken</a>
        <a href="/api/rates">Rates</a>
        <a href="/old-help">Old help</a>
        <a href="/faq">FAQ</a>
    </body></html>"#;
    mount_page(&mock_server, "/", home, 1).await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/rates"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(r#"{"rate": 3.5}"#, "application/json"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    // Redirect into an excluded path
    Mock::given(method("GET"))
        .and(path("/old-help"))
        .respond_with(ResponseTemplate::new(302).insert_header("location", "/login"))
        .expect(1)
        .mount(&mock_server)
        .await;
    mount_page(&mock_server, "/login", FAQ_PAGE, 1).await;

    mount_page(&mock_server, "/faq", FAQ_PAGE, 1).await;

    let dir = TempDir::new().unwrap();
    let corpus_path = dir.path().join("faqs.json");
    let config = create_test_config(&base_url, &corpus_path);

    let stats = run_crawl(config).await.expect("Crawl should survive page failures");

    assert_eq!(stats.pages_fetched, 6);
    assert_eq!(stats.pages_processed, 2);
    assert_eq!(stats.total_failures(), 4);
    assert_eq!(stats.failures.get("http_status"), Some(&2));
    assert_eq!(stats.failures_of(FetchFailure::ContentMismatch), 1);
    assert_eq!(stats.failures_of(FetchFailure::RedirectOffDomain), 1);

    let records = load_corpus(&corpus_path);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].source_url, format!("{}/faq", base_url));
}

#[tokio::test]
async fn test_in_scope_redirect_marks_target_visited() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    let home = r#"<html><body>
        <a href="/help">Help</a>
        <a href="/faq">FAQ</a>
    </body></html>"#;
    mount_page(&mock_server, "/", home, 1).await;

    Mock::given(method("GET"))
        .and(path("/help"))
        .respond_with(ResponseTemplate::new(301).insert_header("location", "/faq"))
        .expect(1)
        .mount(&mock_server)
        .await;
    mount_page(&mock_server, "/faq", FAQ_PAGE, 1).await;

    let dir = TempDir::new().unwrap();
    let corpus_path = dir.path().join("faqs.json");
    let stats = run_crawl(create_test_config(&base_url, &corpus_path))
        .await
        .unwrap();

    assert_eq!(stats.pages_fetched, 2);
    assert_eq!(stats.duplicates_skipped, 1);

    let records = load_corpus(&corpus_path);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].source_url, format!("{}/faq", base_url));
}

#[tokio::test]
async fn test_redirect_to_visited_page_is_not_reprocessed() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    let home = r#"<html><body>
        <a href="/faq">FAQ</a>
        <a href="/help">Help</a>
    </body></html>"#;
    mount_page(&mock_server, "/", home, 1).await;

    // Fetched once directly and once more when following the redirect
    mount_page(&mock_server, "/faq", FAQ_PAGE, 2).await;
    Mock::given(method("GET"))
        .and(path("/help"))
        .respond_with(ResponseTemplate::new(301).insert_header("location", "/faq"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let corpus_path = dir.path().join("faqs.json");
    let stats = run_crawl(create_test_config(&base_url, &corpus_path))
        .await
        .unwrap();

    assert_eq!(stats.pages_fetched, 3);
    assert_eq!(stats.pages_processed, 2);
    assert_eq!(stats.candidates_found, 1);
    assert_eq!(stats.records_added, 1);
    assert_eq!(stats.duplicates_skipped, 1);
    assert_eq!(stats.total_failures(), 0);
    assert_eq!(load_corpus(&corpus_path).len(), 1);
}

#[tokio::test]
async fn test_crawl_continues_when_corpus_cannot_be_saved() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/", HOME_PAGE, 1).await;
    mount_page(&mock_server, "/faq", FAQ_PAGE, 1).await;

    // The corpus directory is a regular file, so every save fails
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "not a directory").unwrap();
    let corpus_path = blocker.join("faqs.json");

    let stats = run_crawl(create_test_config(&base_url, &corpus_path))
        .await
        .expect("Crawl should survive save failures");

    assert_eq!(stats.pages_fetched, 2);
    assert_eq!(stats.pages_processed, 2);
    assert_eq!(stats.records_added, 2);
    assert_eq!(stats.corpus_size, 2);
    assert!(!corpus_path.exists());
    assert_eq!(std::fs::read_to_string(&blocker).unwrap(), "not a directory");
}

#[tokio::test]
async fn test_politeness_delay_between_pages() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/", HOME_PAGE, 1).await;
    mount_page(&mock_server, "/faq", FAQ_PAGE, 1).await;

    let dir = TempDir::new().unwrap();
    let corpus_path = dir.path().join("faqs.json");
    let mut config = create_test_config(&base_url, &corpus_path);
    config.crawler.politeness_delay_ms = 300;

    let start = Instant::now();
    let stats = run_crawl(config).await.unwrap();

    assert_eq!(stats.pages_fetched, 2);
    assert!(start.elapsed() >= Duration::from_millis(300));
}
