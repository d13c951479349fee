//! Favorite endpoints
//!
//! Update and delete answer 204 whether or not a row matched.

use axum::{
    extract::{rejection::PathRejection, rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::extractors::{FavoriteJson, ValidFavoriteId};
use crate::http::server::AppState;
use crate::models::{Favorite, FavoriteLookup, ValidationError};

/// Lookup-by-fields response
#[derive(Debug, Serialize)]
pub struct FavoriteIdResponse {
    pub favorite_id: i32,
}

/// GET /favorites - list every favorite
#[tracing::instrument(skip(state))]
async fn list_favorites(State(state): State<AppState>) -> Result<Json<Vec<Favorite>>, ApiError> {
    let favorites = state.store.list_all().await?;
    Ok(Json(favorites))
}

/// GET /favorites/by-session/{session_id}
#[tracing::instrument(skip(state, session_id))]
async fn list_by_session(
    State(state): State<AppState>,
    session_id: Result<Path<String>, PathRejection>,
) -> Result<Json<Vec<Favorite>>, ApiError> {
    let Path(session_id) =
        session_id.map_err(|e| ValidationError::MalformedPath(e.body_text()))?;

    let favorites = state.store.list_by_session(&session_id).await?;
    tracing::debug!(session_id = %session_id, count = favorites.len(), "listed session favorites");
    Ok(Json(favorites))
}

/// GET /favorites/get-favorite?session_id=&name=&image_url=
#[tracing::instrument(skip(state, pairs))]
async fn get_favorite(
    State(state): State<AppState>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<FavoriteIdResponse>, ApiError> {
    let Query(pairs) = pairs.map_err(|e| ValidationError::MalformedQuery(e.body_text()))?;
    let lookup = FavoriteLookup::from_pairs(pairs);

    let favorite_id = state
        .store
        .find_id(&lookup)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            resource: "favorite",
            id: format!("{}/{}/{}", lookup.session_id, lookup.name, lookup.image_url),
        })?;

    Ok(Json(FavoriteIdResponse { favorite_id }))
}

/// POST /favorites - create; storage assigns the id
#[tracing::instrument(skip(state, favorite))]
async fn create_favorite(
    State(state): State<AppState>,
    FavoriteJson(favorite): FavoriteJson,
) -> Result<Json<Favorite>, ApiError> {
    let created = state.store.create(&favorite).await?;
    tracing::info!(favorite_id = created.favorite_id, "favorite created");
    Ok(Json(created))
}

/// PUT /favorites/{id} - replace every field
#[tracing::instrument(skip(state, id, favorite), fields(id = id.get()))]
async fn update_favorite(
    State(state): State<AppState>,
    ValidFavoriteId(id): ValidFavoriteId,
    FavoriteJson(favorite): FavoriteJson,
) -> Result<StatusCode, ApiError> {
    let affected = state.store.update(id, &favorite).await?;
    tracing::debug!(rows_affected = affected, "favorite updated");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /favorites/{id} - idempotent delete
#[tracing::instrument(skip(state, id), fields(id = id.get()))]
async fn delete_favorite(
    State(state): State<AppState>,
    ValidFavoriteId(id): ValidFavoriteId,
) -> Result<StatusCode, ApiError> {
    let affected = state.store.delete(id).await?;
    tracing::debug!(rows_affected = affected, "favorite deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Favorite routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/favorites", get(list_favorites).post(create_favorite))
        .route("/favorites/by-session/{session_id}", get(list_by_session))
        .route("/favorites/get-favorite", get(get_favorite))
        .route("/favorites/{id}", put(update_favorite).delete(delete_favorite))
}
