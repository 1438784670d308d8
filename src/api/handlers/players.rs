use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Redirect},
};
use std::sync::Arc;

use super::AppState;
use crate::api::extractors::RegistrationForm;
use crate::domain::Player;

pub async fn get_players(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let players = state.ladder().players().to_vec();
    Json(players)
}

pub async fn register_player(
    State(state): State<Arc<AppState>>,
    form: RegistrationForm,
) -> impl IntoResponse {
    let username = form.username.trim();
    if username.is_empty() {
        return (StatusCode::BAD_REQUEST, "Username is required").into_response();
    }

    let photo = match form.photo {
        Some(upload) => match state.photos.save(upload.file_name.as_deref(), &upload.data).await {
            Ok(path) => Some(path),
            Err(e) => {
                log::error!("Photo upload for {} failed: {:?}", username, e);
                return (StatusCode::INTERNAL_SERVER_ERROR, format!("Upload Error: {}", e)).into_response();
            }
        },
        None => None,
    };

    let player = Player::new(username, form.year, form.gender).with_photo(photo);
    state.ladder().register_player(player);

    Redirect::to("/").into_response()
}
