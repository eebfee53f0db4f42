use std::path::Path;
use std::sync::Arc;

use dashboard_core::{DashboardConfig, LogNotifier};
use dashboard_http::{AppState, create_router};
use dashboard_service::Dashboard;
use serde_json::Value;

fn write_fixtures(dir: &Path) {
    let results: Vec<Value> = (0..25)
        .map(|i| serde_json::json!({"id": i, "titulo": format!("Producto {i}")}))
        .collect();
    std::fs::write(dir.join("results.json"), serde_json::to_string(&results).unwrap()).unwrap();
    std::fs::write(dir.join("files.json"), r#"[{"filename": "manual.pdf", "size": 4096}]"#)
        .unwrap();
    std::fs::write(
        dir.join("events.json"),
        r#"[{"title": "Demo day", "start": "2025-06-10T09:00:00", "category": "conferencia"}]"#,
    )
    .unwrap();
}

/// Starts the API on an ephemeral port and returns its base URL.
async fn spawn_app(dir: &Path) -> String {
    let config = DashboardConfig::default().with_data(dir.to_str().unwrap());
    let dashboard = Dashboard::from_config(&config, Arc::new(LogNotifier)).unwrap();
    dashboard.reload_all().await;
    let state = Arc::new(AppState {
        dashboard: Arc::new(dashboard),
        data_dir: Some(dir.to_path_buf()),
    });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, create_router(state)).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn test_health() {
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path());
    let base = spawn_app(dir.path()).await;

    let body = reqwest::get(format!("{base}/health")).await.unwrap().text().await.unwrap();
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn test_results_pagination() {
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path());
    let base = spawn_app(dir.path()).await;

    let page: Value = reqwest::get(format!("{base}/api/results?page=3"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(page["page"], 3);
    assert_eq!(page["total_pages"], 3);
    assert_eq!(page["records"].as_array().unwrap().len(), 5);
    assert_eq!(page["records"][0]["title"], "Producto 20");
    assert_eq!(page["has_next"], false);

    let resp = reqwest::get(format!("{base}/api/results?page=4")).await.unwrap();
    assert_eq!(resp.status(), 400);
    let err: Value = resp.json().await.unwrap();
    assert!(err["error"].as_str().unwrap().contains("out of range"));

    let page: Value = reqwest::get(format!("{base}/api/results?page_size=50"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(page["page"], 1);
    assert_eq!(page["total_pages"], 1);
    assert_eq!(page["records"].as_array().unwrap().len(), 25);
}

#[tokio::test]
async fn test_unsupported_page_size_and_unknown_collection() {
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path());
    let base = spawn_app(dir.path()).await;

    let resp = reqwest::get(format!("{base}/api/results?page_size=7")).await.unwrap();
    assert_eq!(resp.status(), 400);

    let resp = reqwest::get(format!("{base}/api/results?page_size=500")).await.unwrap();
    assert_eq!(resp.status(), 400);

    let resp = reqwest::get(format!("{base}/api/calendar")).await.unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn test_events_range_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path());
    let base = spawn_app(dir.path()).await;

    let events: Value = reqwest::get(format!("{base}/api/events/range?from=2025-06-01&to=2025-06-30"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(events.as_array().unwrap().len(), 1);
    assert_eq!(events[0]["color"], "#9C27B0");

    std::fs::remove_file(dir.path().join("files.json")).unwrap();
    let client = reqwest::Client::new();
    let resp = client.post(format!("{base}/api/files/reload")).send().await.unwrap();
    assert_eq!(resp.status(), 502);

    let page: Value =
        reqwest::get(format!("{base}/api/files")).await.unwrap().json().await.unwrap();
    assert_eq!(page["total_pages"], 0);
}

#[tokio::test]
async fn test_static_documents_are_served() {
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path());
    let base = spawn_app(dir.path()).await;

    let files: Value =
        reqwest::get(format!("{base}/data/files.json")).await.unwrap().json().await.unwrap();
    assert_eq!(files[0]["filename"], "manual.pdf");
}

#[tokio::test]
async fn test_malformed_query_returns_json_error() {
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path());
    let base = spawn_app(dir.path()).await;

    let resp = reqwest::get(format!("{base}/api/events/range?from=2025-06-01")).await.unwrap();
    assert_eq!(resp.status(), 400);
    let err: Value = resp.json().await.unwrap();
    assert!(err["error"].as_str().unwrap().contains("to"));

    let resp = reqwest::get(format!("{base}/api/results?page=-1")).await.unwrap();
    assert_eq!(resp.status(), 400);
    let err: Value = resp.json().await.unwrap();
    assert!(err["error"].is_string());
}

#[tokio::test]
async fn test_rejected_page_request_leaves_state_alone() {
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path());
    let base = spawn_app(dir.path()).await;

    reqwest::get(format!("{base}/api/results?page=3")).await.unwrap();
    let resp = reqwest::get(format!("{base}/api/results?page_size=50&page=2")).await.unwrap();
    assert_eq!(resp.status(), 400);

    let page: Value =
        reqwest::get(format!("{base}/api/results")).await.unwrap().json().await.unwrap();
    assert_eq!(page["page"], 3);
    assert_eq!(page["page_size"], 10);
}
