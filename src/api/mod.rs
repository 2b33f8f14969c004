use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
};
use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::{
    TourError,
    assistant::{ChatReply, ChatService},
    hotspots::{Catalog, Destination, Difficulty, SuggestionEngine},
};

/// Shared, read-only state handed to every handler
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub chat: ChatService,
}

impl AppState {
    #[must_use]
    pub fn new(chat: ChatService) -> Self {
        Self {
            catalog: chat.catalog().clone(),
            chat,
        }
    }

    fn engine(&self) -> SuggestionEngine<'_> {
        SuggestionEngine::new(&self.catalog)
    }
}

#[derive(Debug, Serialize)]
struct ApiError {
    error: String,
}

impl IntoResponse for TourError {
    fn into_response(self) -> Response {
        let status = match self {
            TourError::Validation { .. } => StatusCode::BAD_REQUEST,
            TourError::Assistant { .. } => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (
            status,
            Json(ApiError {
                error: self.user_message(),
            }),
        )
            .into_response()
    }
}

#[derive(Debug, Deserialize)]
pub struct SuggestionParams {
    #[serde(default)]
    pub q: String,
    /// Comma separated interests
    pub interests: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NearbyParams {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct SeasonalParams {
    pub month: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
struct Greeting {
    greeting: &'static str,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/hotspots", get(list_hotspots))
        .route("/hotspots/{id}", get(get_hotspot))
        .route("/suggestions", get(get_suggestions))
        .route("/nearby", get(get_nearby))
        .route("/recommendations/seasonal", get(get_seasonal))
        .route("/recommendations/category/{category}", get(get_by_category))
        .route("/recommendations/difficulty/{difficulty}", get(get_by_difficulty))
        .route("/chat", get(get_greeting).post(post_chat))
        .with_state(state)
}

async fn list_hotspots(State(state): State<Arc<AppState>>) -> Json<Vec<Destination>> {
    Json(state.catalog.as_slice().to_vec())
}

async fn get_hotspot(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Result<Json<Destination>, StatusCode> {
    state
        .catalog
        .get(id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn get_suggestions(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SuggestionParams>,
) -> Response {
    let interests: Vec<&str> = params
        .interests
        .as_deref()
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .collect()
        })
        .unwrap_or_default();

    let suggestions =
        state
            .engine()
            .generate_smart_suggestions(&params.q, params.location.as_deref(), &interests);
    Json(suggestions).into_response()
}

async fn get_nearby(
    State(state): State<Arc<AppState>>,
    Query(params): Query<NearbyParams>,
) -> Response {
    Json(state.engine().get_nearby_attractions(&params.name)).into_response()
}

async fn get_seasonal(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SeasonalParams>,
) -> Response {
    let month = params
        .month
        .unwrap_or_else(|| chrono::Local::now().month());
    Json(state.engine().get_seasonal_recommendations(month)).into_response()
}

async fn get_by_category(
    State(state): State<Arc<AppState>>,
    Path(category): Path<String>,
) -> Response {
    Json(state.engine().get_recommendations_by_category(&category)).into_response()
}

async fn get_by_difficulty(
    State(state): State<Arc<AppState>>,
    Path(difficulty): Path<String>,
) -> Response {
    match difficulty.parse::<Difficulty>() {
        Ok(difficulty) => {
            Json(state.engine().get_recommendations_by_difficulty(difficulty)).into_response()
        }
        Err(e) => e.into_response(),
    }
}

async fn get_greeting() -> Json<Greeting> {
    Json(Greeting {
        greeting: ChatService::greeting(),
    })
}

async fn post_chat(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatReply>, TourError> {
    state.chat.respond(&request.message).await.map(Json)
}
