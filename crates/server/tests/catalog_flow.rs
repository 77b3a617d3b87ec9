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

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn login_token(app: &mut Router, email: &str) -> String {
    let req = Request::builder()
        .method("POST")
        .uri("/auth/login")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({"email": email, "password": "admin123"}).to_string(),
        ))
        .unwrap();
    let resp = app.call(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    body_json(resp).await["token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn empty_query_browses_catalog_prefix() -> anyhow::Result<()> {
    let mut app = build_app().await?;
    let resp = app.call(get("/pets/search?q=")).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let pets = body_json(resp).await;
    assert_eq!(pets.as_array().unwrap().len(), 5);
    assert_eq!(pets[0]["name"], "Rex");
    Ok(())
}

#[tokio::test]
async fn search_ranks_prefix_matches_first() -> anyhow::Result<()> {
    let mut app = build_app().await?;
    let resp = app.call(get("/pets/search?q=cat")).await?;
    let pets = body_json(resp).await;
    let names: Vec<&str> = pets
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Mia", "Nina"]);
    Ok(())
}

#[tokio::test]
async fn get_by_id_hit_and_miss() -> anyhow::Result<()> {
    let mut app = build_app().await?;
    let resp = app.call(get("/pets/3")).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["name"], "Bolt");

    let resp = app.call(get("/pets/999")).await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn pet_registration_requires_shelter_role() -> anyhow::Result<()> {
    let mut app = build_app().await?;
    let draft = json!({
        "name": "Thor",
        "species": "Dog",
        "age": "1 year",
        "gender": "Male",
        "size": "Large",
        "description": "gentle giant"
    });

    // No token at all.
    let req = Request::builder()
        .method("POST")
        .uri("/pets")
        .header("content-type", "application/json")
        .body(Body::from(draft.to_string()))?;
    let resp = app.call(req).await?;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // Adopter token is authenticated but not allowed.
    let adopter_token = login_token(&mut app, "tutor@adopetme.com").await;
    let req = Request::builder()
        .method("POST")
        .uri("/pets")
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {adopter_token}"))
        .body(Body::from(draft.to_string()))?;
    let resp = app.call(req).await?;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    // Shelter token registers and gets the next id after the seed.
    let shelter_token = login_token(&mut app, "ong@adopetme.com").await;
    let req = Request::builder()
        .method("POST")
        .uri("/pets")
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {shelter_token}"))
        .body(Body::from(draft.to_string()))?;
    let resp = app.call(req).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["pet_id"], 6);

    // The new animal is searchable with the system-assigned defaults.
    let resp = app.call(get("/pets/6")).await?;
    let pet = body_json(resp).await;
    assert_eq!(pet["location"], "São Paulo/SP");
    assert_eq!(pet["adopted"], false);
    Ok(())
}

#[tokio::test]
async fn shelter_token_works_from_cookie_too() -> anyhow::Result<()> {
    let mut app = build_app().await?;
    let token = login_token(&mut app, "ong@adopetme.com").await;

    let req = Request::builder()
        .uri("/reports")
        .header("cookie", format!("auth_token={token}"))
        .body(Body::empty())?;
    let resp = app.call(req).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    Ok(())
}
