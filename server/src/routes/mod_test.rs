use super::*;

use std::net::SocketAddr;

const INDEX_HTML: &str = "<!DOCTYPE html><html><body>bhardwaj</body></html>";
const APP_CSS: &str = "body { margin: 0; }";

async fn spawn_site() -> (SocketAddr, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(INDEX_FILE), INDEX_HTML).unwrap();
    std::fs::create_dir_all(dir.path().join("assets")).unwrap();
    std::fs::write(dir.path().join("assets/app.css"), APP_CSS).unwrap();

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = app(dir.path());
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    (addr, dir)
}

async fn get_text(addr: SocketAddr, path: &str) -> (u16, String) {
    let resp = reqwest::get(format!("http://{addr}{path}")).await.unwrap();
    let status = resp.status().as_u16();
    (status, resp.text().await.unwrap())
}

#[tokio::test]
async fn healthz_returns_ok() {
    let (addr, _dir) = spawn_site().await;
    let (status, body) = get_text(addr, "/healthz").await;
    assert_eq!(status, 200);
    assert!(body.is_empty());
}

#[tokio::test]
async fn root_serves_index() {
    let (addr, _dir) = spawn_site().await;
    let (status, body) = get_text(addr, "/").await;
    assert_eq!(status, 200);
    assert_eq!(body, INDEX_HTML);
}

#[tokio::test]
async fn existing_asset_is_served() {
    let (addr, _dir) = spawn_site().await;
    let (status, body) = get_text(addr, "/assets/app.css").await;
    assert_eq!(status, 200);
    assert_eq!(body, APP_CSS);
}

#[tokio::test]
async fn client_routes_fall_back_to_index() {
    let (addr, _dir) = spawn_site().await;
    for path in ["/projects", "/projects/modern-villa", "/privacy-policy", "/no/such/page"] {
        let (status, body) = get_text(addr, path).await;
        assert_eq!(status, 200, "{path}");
        assert_eq!(body, INDEX_HTML, "{path}");
    }
}
