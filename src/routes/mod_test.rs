use super::*;

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn api_routes_serve_healthz() {
    let state = AppState::new(reqwest::Client::new(), "http://127.0.0.1:9");
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, api_routes(state)).await;
    });

    let response = reqwest::get(format!("http://{addr}/healthz")).await.expect("send");
    assert_eq!(response.status(), StatusCode::OK);
}
