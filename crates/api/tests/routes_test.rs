use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use querytail_api::{create_api_routes, AppState};
use querytail_application::services::BroadcastHub;
use querytail_domain::config::HubConfig;
use tower::ServiceExt;

fn app() -> (axum::Router, BroadcastHub) {
    let (hub, runner) = BroadcastHub::new(&HubConfig::default());
    runner.start();
    (create_api_routes(AppState::new(hub.clone())), hub)
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_health_returns_ok() {
    let (app, _hub) = app();

    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "OK");
}

#[tokio::test]
async fn test_stats_reports_subscriber_count() {
    let (app, hub) = app();
    let _viewer = hub.connect();

    let response = app
        .oneshot(Request::get("/stats").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(json["subscribers"], 1);
    assert!(json["uptime"].is_u64());
}

#[tokio::test]
async fn test_ws_requires_upgrade() {
    let (app, _hub) = app();

    let response = app
        .oneshot(Request::get("/ws").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let (app, _hub) = app();

    let response = app
        .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
