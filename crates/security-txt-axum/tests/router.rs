use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use security_txt::SecurityTxtConfig;
use security_txt_axum::{router, ROOT_ROUTE, WELL_KNOWN_ROUTE};
use tower::ServiceExt;

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read response body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

#[tokio::test]
async fn serves_document_on_well_known_path() {
    let config = SecurityTxtConfig::new()
        .with_contact("mailto:security@example.com")
        .with_expires("2026-12-31T23:59:59Z");
    let app = router(config);

    let response = app.oneshot(get_request(WELL_KNOWN_ROUTE)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/plain; charset=utf-8"
    );
    assert_eq!(
        response.headers()[header::CACHE_CONTROL],
        "public, max-age=3600"
    );
    assert_eq!(
        body_string(response).await,
        "Contact: mailto:security@example.com\nExpires: 2026-12-31T23:59:59Z\n"
    );
}

#[tokio::test]
async fn serves_identical_document_on_root_path() {
    let config = SecurityTxtConfig::new().with_contact("mailto:security@example.com");
    let app = router(config);

    let well_known = app
        .clone()
        .oneshot(get_request(WELL_KNOWN_ROUTE))
        .await
        .unwrap();
    let root = app.oneshot(get_request(ROOT_ROUTE)).await.unwrap();

    assert_eq!(well_known.status(), StatusCode::OK);
    assert_eq!(root.status(), StatusCode::OK);
    assert_eq!(body_string(root).await, body_string(well_known).await);
}

#[tokio::test]
async fn disable_root_unregisters_the_root_route() {
    let mut config = SecurityTxtConfig::new().with_contact("mailto:security@example.com");
    config.disable_root = true;
    let app = router(config);

    let well_known = app
        .clone()
        .oneshot(get_request(WELL_KNOWN_ROUTE))
        .await
        .unwrap();
    let root = app.oneshot(get_request(ROOT_ROUTE)).await.unwrap();

    assert_eq!(well_known.status(), StatusCode::OK);
    assert_eq!(root.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn sparse_config_returns_minimal_document_with_200() {
    let app = router(SecurityTxtConfig::new());

    let response = app.oneshot(get_request(WELL_KNOWN_ROUTE)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "\n");
}
