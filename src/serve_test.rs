use std::fs;
use std::path::PathBuf;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::sync::oneshot;

use super::*;

fn export_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("softwared-serve-{name}-{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(dir.join("pkg")).unwrap();
    fs::write(dir.join("index.html"), "<!DOCTYPE html><title>preview</title>").unwrap();
    fs::write(dir.join("pkg").join("softwared.css"), "body{}").unwrap();
    dir
}

async fn get(addr: SocketAddr, path: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    let request = format!("GET {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n");
    stream.write_all(request.as_bytes()).await.unwrap();
    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();
    response
}

/// Start a server on an ephemeral port; send on the returned channel to stop it.
async fn start(root: PathBuf, base_path: &'static str) -> (SocketAddr, oneshot::Sender<()>, tokio::task::JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    let handle = tokio::spawn(async move {
        let shutdown = async move {
            let _ = stop_rx.await;
        };
        serve(listener, &root, base_path, shutdown).await.unwrap();
    });
    (addr, stop_tx, handle)
}

// =============================================================
// Root deployment
// =============================================================

#[tokio::test]
async fn serves_index_at_root() {
    let (addr, stop, handle) = start(export_dir("root"), "").await;

    let response = get(addr, "/").await;
    assert!(response.starts_with("HTTP/1.1 200"), "{response}");
    assert!(response.contains("<title>preview</title>"));

    let css = get(addr, "/pkg/softwared.css").await;
    assert!(css.starts_with("HTTP/1.1 200"), "{css}");

    stop.send(()).unwrap();
    handle.await.unwrap();
}

#[tokio::test]
async fn missing_files_are_404() {
    let (addr, stop, handle) = start(export_dir("missing"), "").await;

    let response = get(addr, "/nope.txt").await;
    assert!(response.starts_with("HTTP/1.1 404"), "{response}");

    stop.send(()).unwrap();
    handle.await.unwrap();
}

// =============================================================
// Base path deployment
// =============================================================

#[tokio::test]
async fn serves_under_base_path() {
    let (addr, stop, handle) = start(export_dir("base"), "/site").await;

    let response = get(addr, "/site/").await;
    assert!(response.starts_with("HTTP/1.1 200"), "{response}");
    assert!(response.contains("<title>preview</title>"));

    let css = get(addr, "/site/pkg/softwared.css").await;
    assert!(css.starts_with("HTTP/1.1 200"), "{css}");

    stop.send(()).unwrap();
    handle.await.unwrap();
}

#[tokio::test]
async fn root_redirects_to_base_path() {
    let (addr, stop, handle) = start(export_dir("redirect"), "/site").await;

    let response = get(addr, "/").await;
    assert!(response.starts_with("HTTP/1.1 307"), "{response}");
    assert!(response.to_ascii_lowercase().contains("location: /site/"), "{response}");

    stop.send(()).unwrap();
    handle.await.unwrap();
}

#[tokio::test]
async fn bind_conflict_is_reported() {
    let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = taken.local_addr().unwrap();
    let err = run(&export_dir("conflict"), "", addr).await.unwrap_err();
    assert!(matches!(err, AppError::Bind { .. }), "{err:?}");
}
