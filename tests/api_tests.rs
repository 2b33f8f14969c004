//! HTTP API and generative client tests

use std::sync::Arc;

use axum::{
    Json, Router,
    body::Body,
    extract::Path,
    http::{Request, StatusCode, header},
    routing::post,
};
use bhutantour::api::{self, AppState};
use bhutantour::assistant::APOLOGY;
use bhutantour::config::AssistantConfig;
use bhutantour::{Catalog, ChatService, GeminiClient, GenerativeModel, TourError};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

fn app() -> Router {
    let chat = ChatService::new(Arc::new(Catalog::builtin().clone()), None);
    api::router(Arc::new(AppState::new(chat)))
}

async fn get_json(uri: &str) -> (StatusCode, Value) {
    let response = app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn post_chat(body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/chat")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn lists_all_hotspots() {
    let (status, body) = get_json("/hotspots").await;
    assert_eq!(status, StatusCode::OK);
    let hotspots = body.as_array().unwrap();
    assert_eq!(hotspots.len(), 10);
    assert_eq!(hotspots[0]["nearbyAttractions"][0], "Paro Dzong");
    assert_eq!(hotspots[0]["difficulty"], "moderate");
}

#[tokio::test]
async fn hotspot_by_id() {
    let (status, body) = get_json("/hotspots/5").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Phobjikha Valley");

    let (status, _) = get_json("/hotspots/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn suggestions_include_scores() {
    let (status, body) = get_json("/suggestions?q=Tell%20me%20about%20Punakha%20Dzong").await;
    assert_eq!(status, StatusCode::OK);
    let suggestions = body.as_array().unwrap();
    assert_eq!(suggestions.len(), 3);
    assert_eq!(suggestions[0]["name"], "Punakha Dzong");
    assert_eq!(suggestions[0]["relevanceScore"], 15);
    assert_eq!(suggestions[0]["category"], "dzong");
}

#[tokio::test]
async fn suggestions_without_query_fall_back() {
    let (_, body) = get_json("/suggestions").await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![
            "Tiger's Nest Monastery (Paro Taktsang)",
            "Punakha Dzong",
            "Phobjikha Valley"
        ]
    );
}

#[tokio::test]
async fn suggestions_with_interests() {
    let (_, body) = get_json("/suggestions?interests=market,%20food").await;
    assert_eq!(body[0]["name"], "Thimphu Weekend Market");
    assert_eq!(body[0]["relevanceScore"], 2);
}

#[tokio::test]
async fn nearby_mixes_known_and_placeholders() {
    let (status, body) = get_json("/nearby?name=punakha%20dzong").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["name"], "Chimi Lhakhang");
    assert_eq!(body[0]["id"], 7);
    assert_eq!(body[2]["name"], "Khamsum Yulley Namgyal Chorten");
    assert_eq!(body[2]["category"], "attraction");
    assert!(body[2].get("id").is_none());
}

#[tokio::test]
async fn seasonal_recommendations() {
    let (status, body) = get_json("/recommendations/seasonal?month=12").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["name"], "Punakha Dzong");
    assert_eq!(body[1]["name"], "Dochula Pass");
}

#[tokio::test]
async fn category_and_difficulty_recommendations() {
    let (_, body) = get_json("/recommendations/category/valley").await;
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (status, body) = get_json("/recommendations/difficulty/moderate").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[1]["name"], "Haa Valley");

    let (status, body) = get_json("/recommendations/difficulty/extreme").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("extreme"));

    let (status, _) = get_json("/recommendations/difficulty/Easy").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, body) = get_json("/recommendations/category/Dzong").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn chat_greeting() {
    let (status, body) = get_json("/chat").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["greeting"].as_str().unwrap().starts_with("Tashi Delek!"));
}

#[tokio::test]
async fn chat_without_model_is_degraded() {
    let (status, body) = post_chat(json!({ "message": "Tell me about Haa Valley" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reply"], APOLOGY);
    assert_eq!(body["degraded"], true);
    assert_eq!(body["suggestions"][0]["name"], "Haa Valley");
}

#[tokio::test]
async fn chat_rejects_empty_message() {
    let (status, body) = post_chat(json!({ "message": "  " })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("empty"));
}

async fn fake_generate(Path(model_action): Path<String>, Json(request): Json<Value>) -> Json<Value> {
    let prompt = request["contents"][0]["parts"][0]["text"]
        .as_str()
        .unwrap_or_default()
        .to_string();
    Json(json!({
        "candidates": [{
            "content": {
                "role": "model",
                "parts": [{ "text": format!("{model_action} heard: ") }, { "text": prompt }]
            }
        }]
    }))
}

async fn spawn_fake_service(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/v1beta")
}

#[tokio::test]
async fn gemini_client_round_trip() {
    let base_url =
        spawn_fake_service(Router::new().route("/v1beta/models/{model_action}", post(fake_generate)))
            .await;
    let config = AssistantConfig {
        base_url,
        model: "test-model".to_string(),
        max_retries: 0,
        ..AssistantConfig::default()
    };

    let client = GeminiClient::new(&config, "test_api_key").unwrap();
    let text = client.generate("Kuzu zangpo").await.unwrap();
    assert_eq!(text, "test-model:generateContent heard: Kuzu zangpo");
}

#[tokio::test]
async fn gemini_client_reports_http_errors() {
    let base_url = spawn_fake_service(Router::new().route(
        "/v1beta/models/{model_action}",
        post(|| async { (StatusCode::BAD_REQUEST, "API key not valid") }),
    ))
    .await;
    let config = AssistantConfig {
        base_url,
        max_retries: 0,
        ..AssistantConfig::default()
    };

    let client = GeminiClient::new(&config, "test_api_key").unwrap();
    let err = client.generate("hello").await.unwrap_err();
    assert!(matches!(err, TourError::Assistant { .. }));
    assert!(err.to_string().contains("400"));
}
