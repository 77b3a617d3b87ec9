use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::Service;

use server::routes;
use server::startup::build_state;

fn test_config() -> configs::AppConfig {
    let mut cfg = configs::AppConfig::default();
    cfg.auth.jwt_secret = "test-secret".into();
    cfg.session.store_path = std::env::temp_dir()
        .join(format!("adopet-session-{}.json", uuid::Uuid::new_v4()))
        .to_string_lossy()
        .into_owned();
    cfg
}

async fn build_app() -> anyhow::Result<Router> {
    let state = build_state(&test_config()).await?;
    Ok(routes::build_router(state, tower_http::cors::CorsLayer::very_permissive()))
}

async fn body_json(resp: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn shelter_token(app: &mut Router) -> String {
    let resp = app
        .call(post_json(
            "/auth/login",
            json!({"email": "ong@adopetme.com", "password": "admin123"}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    body_json(resp).await["token"].as_str().unwrap().to_string()
}

fn valid_draft() -> Value {
    json!({
        "report_type": "Neglect",
        "location": "Avenida Central, 45",
        "description": "Dog kept on a short chain all day.",
        "evidence": ["img.jpg"],
        "reporter_email": "witness@example.com",
        "anonymous": false
    })
}

#[tokio::test]
async fn create_then_lookup_round_trip() -> anyhow::Result<()> {
    let mut app = build_app().await?;

    let resp = app.call(post_json("/reports", valid_draft())).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let protocol = body_json(resp).await["protocol"].as_str().unwrap().to_string();
    assert_eq!(protocol, "RPT-0003");

    // Lookup tolerates case and surrounding whitespace.
    let req = Request::builder()
        .uri("/reports/%20rpt-0003%20")
        .body(Body::empty())?;
    let resp = app.call(req).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let report = body_json(resp).await;
    assert_eq!(report["protocol"], "RPT-0003");
    assert_eq!(report["status"], "Received");
    Ok(())
}

#[tokio::test]
async fn validation_failures_are_bad_requests() -> anyhow::Result<()> {
    let mut app = build_app().await?;

    let mut short_location = valid_draft();
    short_location["location"] = json!("ab");
    let resp = app.call(post_json("/reports", short_location)).await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let mut short_description = valid_draft();
    short_description["description"] = json!("too short");
    let resp = app.call(post_json("/reports", short_description)).await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let mut bad_email = valid_draft();
    bad_email["reporter_email"] = json!("nope");
    let resp = app.call(post_json("/reports", bad_email)).await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Nothing was stored; the next accepted submission still gets -0003.
    let resp = app.call(post_json("/reports", valid_draft())).await?;
    assert_eq!(body_json(resp).await["protocol"], "RPT-0003");
    Ok(())
}

#[tokio::test]
async fn unknown_protocol_is_not_found() -> anyhow::Result<()> {
    let mut app = build_app().await?;
    let req = Request::builder().uri("/reports/RPT-9999").body(Body::empty())?;
    let resp = app.call(req).await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn listing_requires_shelter_token() -> anyhow::Result<()> {
    let mut app = build_app().await?;

    let req = Request::builder().uri("/reports").body(Body::empty())?;
    let resp = app.call(req).await?;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let token = shelter_token(&mut app).await;
    let req = Request::builder()
        .uri("/reports")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())?;
    let resp = app.call(req).await?;
    assert_eq!(resp.status(), StatusCode::OK);

    let reports = body_json(resp).await;
    let protocols: Vec<&str> = reports
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["protocol"].as_str().unwrap())
        .collect();
    assert_eq!(protocols, vec!["RPT-0002", "RPT-0001"]); // most recent first
    Ok(())
}

#[tokio::test]
async fn filtered_search_and_pagination() -> anyhow::Result<()> {
    let mut app = build_app().await?;
    let token = shelter_token(&mut app).await;

    let resp = app.call(post_json("/reports", valid_draft())).await?;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = Request::builder()
        .uri("/reports?type=Neglect")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())?;
    let resp = app.call(req).await?;
    let reports = body_json(resp).await;
    assert_eq!(reports.as_array().unwrap().len(), 1);
    assert_eq!(reports[0]["protocol"], "RPT-0003");

    let req = Request::builder()
        .uri("/reports?protocol=0001&type=Abuse")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())?;
    let resp = app.call(req).await?;
    let reports = body_json(resp).await;
    assert_eq!(reports.as_array().unwrap().len(), 1);
    assert_eq!(reports[0]["protocol"], "RPT-0001");

    let req = Request::builder()
        .uri("/reports?page=2&per_page=2")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())?;
    let resp = app.call(req).await?;
    let reports = body_json(resp).await;
    assert_eq!(reports.as_array().unwrap().len(), 1);
    assert_eq!(reports[0]["protocol"], "RPT-0001");
    Ok(())
}
