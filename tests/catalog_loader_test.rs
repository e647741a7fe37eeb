//! Integration tests for catalog loading
//!
//! These tests run the loader against a throwaway local HTTP server and
//! verify:
//! 1. A good manifest becomes the catalog, ids in manifest order
//! 2. Any failure (status, refused connection, bad body) yields the
//!    built-in fallback list instead of an error
//! 3. Results from an activation the user already left are ignored

use std::time::Duration;

use memegallery::api::TemplateClient;
use memegallery::logic::errors::ErrorType;
use memegallery::model::types::{CatalogSource, Category, LoadState};
use memegallery::model::Model;
use memegallery::services::loader::{load_catalog, spawn_catalog_load, CatalogOrigin};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serve exactly one HTTP response, return the base URL
async fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        // Read until the end of the request headers
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
    });

    format!("http://{}", addr)
}

fn remote(base_url: String) -> CatalogOrigin {
    CatalogOrigin::Remote(
        TemplateClient::new(base_url, "/images.json".to_string(), Duration::from_secs(5))
            .unwrap(),
    )
}

fn fallback_error(source: &CatalogSource) -> Option<ErrorType> {
    match source {
        CatalogSource::Fallback { error_type, .. } => Some(error_type.clone()),
        _ => None,
    }
}

#[tokio::test]
async fn test_manifest_success_builds_records() {
    let base = serve_once("200 OK", r#"["Drake-Pointing.png", "success_kid.jpg"]"#).await;

    let catalog = load_catalog(&remote(base)).await;

    assert_eq!(catalog.source, CatalogSource::Manifest);
    assert_eq!(catalog.templates.len(), 2);

    assert_eq!(catalog.templates[0].id, 1);
    assert_eq!(catalog.templates[0].name, "Drake Pointing");
    assert_eq!(catalog.templates[0].url, "/Drake-Pointing.png");

    assert_eq!(catalog.templates[1].id, 2);
    assert_eq!(catalog.templates[1].name, "success kid");
    assert_eq!(catalog.templates[1].url, "/success_kid.jpg");
    assert_eq!(catalog.templates[1].category, Category::General);
}

#[tokio::test]
async fn test_empty_manifest_is_success() {
    let base = serve_once("200 OK", "[]").await;

    let catalog = load_catalog(&remote(base)).await;

    assert_eq!(catalog.source, CatalogSource::Manifest);
    assert!(catalog.templates.is_empty());
}

#[tokio::test]
async fn test_not_found_falls_back() {
    let base = serve_once("404 Not Found", "missing").await;

    let catalog = load_catalog(&remote(base)).await;

    assert_eq!(catalog.templates.len(), 24);
    assert_eq!(fallback_error(&catalog.source), Some(ErrorType::NotFound));
}

#[tokio::test]
async fn test_server_error_falls_back() {
    let base = serve_once("500 Internal Server Error", "boom").await;

    let catalog = load_catalog(&remote(base)).await;

    assert_eq!(catalog.templates.len(), 24);
    assert_eq!(fallback_error(&catalog.source), Some(ErrorType::ServerError));
}

#[tokio::test]
async fn test_malformed_body_falls_back() {
    let base = serve_once("200 OK", r#"{"templates": "nope"}"#).await;

    let catalog = load_catalog(&remote(base)).await;

    assert_eq!(catalog.templates.len(), 24);
    assert_eq!(
        fallback_error(&catalog.source),
        Some(ErrorType::MalformedManifest)
    );
}

#[tokio::test]
async fn test_connection_refused_falls_back() {
    // Grab a free port, then close it so nothing is listening
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let catalog = load_catalog(&remote(format!("http://{}", addr))).await;

    assert_eq!(catalog.templates.len(), 24);
    assert!(fallback_error(&catalog.source).is_some());
    assert_eq!(catalog.templates[0].name, "Drake Pointing");
}

#[tokio::test]
async fn test_directory_origin_discovers_images() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("happy_cat.png"), b"x").unwrap();
    std::fs::write(dir.path().join("notes.txt"), b"x").unwrap();
    std::fs::write(dir.path().join("office-worker.jpg"), b"x").unwrap();

    let catalog = load_catalog(&CatalogOrigin::Directory(dir.path().to_path_buf())).await;

    assert_eq!(catalog.source, CatalogSource::Discovered);
    let names: Vec<&str> = catalog.templates.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["happy_cat", "office-worker"]);
    assert_eq!(catalog.templates[0].category, Category::Animals);
    assert_eq!(catalog.templates[1].category, Category::People);
}

#[tokio::test]
async fn test_missing_directory_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope");

    let catalog = load_catalog(&CatalogOrigin::Directory(missing)).await;

    assert_eq!(catalog.templates.len(), 24);
    assert!(fallback_error(&catalog.source).is_some());
}

/// Test: A load that finishes after the user left and came back is dropped
#[tokio::test]
async fn test_stale_result_after_remount_is_ignored() {
    let base = serve_once("200 OK", r#"["a.png"]"#).await;
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();

    let mut model = Model::new(false, 24);
    let first = model.mount_gallery();
    spawn_catalog_load(remote(base), first, tx)
        .await
        .unwrap();

    // User leaves and re-enters before the result is processed
    model.unmount_gallery();
    let second = model.mount_gallery();
    assert_ne!(first, second);

    let loaded = rx.recv().await.unwrap();
    assert_eq!(loaded.generation, first);
    assert!(!model.apply_catalog(loaded.generation, loaded.catalog));

    assert_eq!(model.catalog.load_state, LoadState::Loading);
    assert!(model.catalog.templates.is_empty());
}

/// Test: The current activation's result is applied and filtered
#[tokio::test]
async fn test_current_result_is_applied() {
    let base = serve_once("200 OK", r#"["happy_cat.png", "office-worker.jpg"]"#).await;
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();

    let mut model = Model::new(false, 24);
    let generation = model.mount_gallery();
    spawn_catalog_load(remote(base), generation, tx)
        .await
        .unwrap();

    let loaded = rx.recv().await.unwrap();
    assert!(model.apply_catalog(loaded.generation, loaded.catalog));

    assert_eq!(model.catalog.load_state, LoadState::Ready);
    assert_eq!(model.gallery.filtered.len(), 2);
    assert_eq!(
        model.catalog.categories,
        vec![Category::Animals, Category::People]
    );
}
