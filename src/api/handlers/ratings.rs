use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
};
use chrono::{Datelike, Local};
use std::sync::Arc;

use super::AppState;
use crate::rating::{filter_by_category, Category};

pub async fn get_ratings(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let ratings = state.ladder().ratings().as_map().clone();
    Json(ratings)
}

pub async fn get_category_ratings(
    State(state): State<Arc<AppState>>,
    Path(category): Path<String>,
) -> impl IntoResponse {
    let category = Category::from_tag(&category.to_lowercase());
    let current_year = Local::now().year();

    let ladder = state.ladder();
    let rated = filter_by_category(
        category,
        ladder.players(),
        ladder.ratings(),
        current_year,
        &state.categories,
    );

    log::debug!("Category {} lists {} players", category.as_str(), rated.len());
    Json(rated)
}
