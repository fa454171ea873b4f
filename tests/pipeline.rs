use std::fs;
use std::net::TcpListener;
use std::path::Path;

use hbre2ip::error::AppError;
use hbre2ip::models::{Config, Entry, History, HistoryMode};
use hbre2ip::pipeline;
use hbre2ip::services::HistoryStore;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PAGE: &str = r#"<html><body>
<div class="serviceTop-staffPicks-list">
  <div><a href="http://a"><span class="entry-title"> Article A </span></a></div>
  <div><p>no link</p></div>
  <div><a href="http://b"><span class="entry-title">Article B</span></a></div>
</div>
</body></html>"#;

fn write_secret(dir: &Path) {
    fs::write(
        dir.join("secret.json"),
        r#"{"userName":"alice","password":"hunter2"}"#,
    )
    .unwrap();
}

fn config_for(dir: &Path, server: &MockServer) -> Config {
    let mut config = Config::for_dir(dir);
    config.source.url = format!("{}/", server.uri());
    config.api.url = format!("{}/api/add", server.uri());
    config
}

async fn mount_page(server: &MockServer, status: u16) {
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(status).set_body_raw(PAGE, "text/html"))
        .mount(server)
        .await;
}

fn urls(history: &History) -> Vec<&str> {
    history.entries().iter().map(|e| e.url.as_str()).collect()
}

#[tokio::test]
async fn posts_only_unseen_entries_and_saves_history() {
    let temp = TempDir::new().unwrap();
    write_secret(temp.path());
    HistoryStore::new(temp.path())
        .save(&History::from(vec![Entry::new("Article A", "http://a")]))
        .unwrap();

    let server = MockServer::start().await;
    mount_page(&server, 200).await;
    Mock::given(method("POST"))
        .and(path("/api/add"))
        .respond_with(ResponseTemplate::new(201).set_body_string("201"))
        .expect(1)
        .mount(&server)
        .await;

    let summary = pipeline::run(&config_for(temp.path(), &server))
        .await
        .unwrap();

    assert_eq!(summary.scraped, 2);
    assert_eq!(summary.posted, 1);
    assert_eq!(summary.skipped, 1);

    let posts: Vec<String> = server
        .received_requests()
        .await
        .unwrap()
        .into_iter()
        .filter(|req| req.url.path() == "/api/add")
        .map(|req| String::from_utf8(req.body).unwrap())
        .collect();
    assert_eq!(
        posts,
        vec!["username=alice&password=hunter2&url=http%3A%2F%2Fb"]
    );

    let saved = HistoryStore::new(temp.path()).load().unwrap();
    assert_eq!(
        saved.entries(),
        &[
            Entry::new("Article A", "http://a"),
            Entry::new("Article B", "http://b"),
        ]
    );
}

#[tokio::test]
async fn replace_mode_drops_entries_no_longer_on_page() {
    let temp = TempDir::new().unwrap();
    write_secret(temp.path());
    HistoryStore::new(temp.path())
        .save(&History::from(vec![Entry::new("Gone", "http://gone")]))
        .unwrap();

    let server = MockServer::start().await;
    mount_page(&server, 200).await;
    Mock::given(method("POST"))
        .and(path("/api/add"))
        .respond_with(ResponseTemplate::new(201))
        .expect(2)
        .mount(&server)
        .await;

    pipeline::run(&config_for(temp.path(), &server))
        .await
        .unwrap();

    let saved = HistoryStore::new(temp.path()).load().unwrap();
    assert_eq!(urls(&saved), vec!["http://a", "http://b"]);
}

#[tokio::test]
async fn accumulate_mode_keeps_prior_entries() {
    let temp = TempDir::new().unwrap();
    write_secret(temp.path());
    HistoryStore::new(temp.path())
        .save(&History::from(vec![
            Entry::new("Gone", "http://gone"),
            Entry::new("Article B", "http://b"),
        ]))
        .unwrap();

    let server = MockServer::start().await;
    mount_page(&server, 200).await;
    Mock::given(method("POST"))
        .and(path("/api/add"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let mut config = config_for(temp.path(), &server);
    config.history.mode = HistoryMode::Accumulate;
    pipeline::run(&config).await.unwrap();

    let saved = HistoryStore::new(temp.path()).load().unwrap();
    assert_eq!(urls(&saved), vec!["http://gone", "http://b", "http://a"]);
}

#[tokio::test]
async fn rejected_post_does_not_stop_the_run() {
    let temp = TempDir::new().unwrap();
    write_secret(temp.path());

    let server = MockServer::start().await;
    mount_page(&server, 200).await;
    Mock::given(method("POST"))
        .and(path("/api/add"))
        .respond_with(ResponseTemplate::new(403).set_body_string("403"))
        .expect(2)
        .mount(&server)
        .await;

    let summary = pipeline::run(&config_for(temp.path(), &server))
        .await
        .unwrap();

    assert_eq!(summary.posted, 2);
    assert_eq!(summary.history_len, 2);
}

#[tokio::test]
async fn page_404_stops_before_posting_or_saving() {
    let temp = TempDir::new().unwrap();
    write_secret(temp.path());

    let server = MockServer::start().await;
    mount_page(&server, 404).await;
    Mock::given(method("POST"))
        .and(path("/api/add"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let err = pipeline::run(&config_for(temp.path(), &server))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::HttpStatus { status: 404, .. }));
    assert!(!temp.path().join("history.json").exists());
}

#[tokio::test]
async fn post_transport_failure_leaves_history_untouched() {
    let temp = TempDir::new().unwrap();
    write_secret(temp.path());
    let prior = r#"{"entries":[{"title":"Z","url":"http://z"}]}"#;
    fs::write(temp.path().join("history.json"), prior).unwrap();

    let server = MockServer::start().await;
    mount_page(&server, 200).await;

    // Nothing listens on a port we just released.
    let closed_port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let mut config = config_for(temp.path(), &server);
    config.api.url = format!("http://127.0.0.1:{closed_port}/api/add");

    let err = pipeline::run(&config).await.unwrap_err();

    assert!(matches!(err, AppError::Network(_)));
    assert_eq!(err.exit_code(), 3);
    assert_eq!(
        fs::read_to_string(temp.path().join("history.json")).unwrap(),
        prior
    );
}

#[tokio::test]
async fn missing_secret_fails_before_any_request() {
    let temp = TempDir::new().unwrap();

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = pipeline::run(&config_for(temp.path(), &server))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Config(_)));
    assert_eq!(err.exit_code(), 2);
}
