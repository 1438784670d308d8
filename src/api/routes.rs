use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::services::ServeDir;

use crate::api::handlers::{
    home::index,
    matches::{get_matches, submit_match},
    players::{get_players, register_player},
    ratings::{get_category_ratings, get_ratings},
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    let uploads = ServeDir::new(state.photos.upload_dir());
    let public = ServeDir::new(&state.static_dir);
    let body_limit = DefaultBodyLimit::max(state.max_upload_bytes);

    Router::new()
        .route("/", get(index))
        .route("/players", get(get_players))
        .route("/player", post(register_player))
        .route("/ratings", get(get_ratings))
        .route("/ratings/:category", get(get_category_ratings))
        .route("/matches", get(get_matches))
        .route("/match", post(submit_match))
        .nest_service("/uploads", uploads)
        .fallback_service(public)
        .layer(body_limit)
        .with_state(state)
}
