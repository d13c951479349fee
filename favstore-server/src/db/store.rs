//! Storage seam for the favorites table
//!
//! One method per HTTP operation. Implementations issue exactly one
//! statement per call and never retry.

use async_trait::async_trait;

use super::DbError;
use crate::models::{Favorite, FavoriteId, FavoriteLookup, NewFavorite};

#[async_trait]
pub trait FavoriteStore: Send + Sync {
    /// Every row, ordered by `favorite_id`.
    async fn list_all(&self) -> Result<Vec<Favorite>, DbError>;

    /// Rows whose `session_id` equals `session_id` exactly.
    async fn list_by_session(&self, session_id: &str) -> Result<Vec<Favorite>, DbError>;

    /// Id of the row matching session, name and image url.
    ///
    /// When several rows match, the lowest id wins.
    async fn find_id(&self, lookup: &FavoriteLookup) -> Result<Option<i32>, DbError>;

    /// Insert a row and return it with the assigned id.
    async fn create(&self, favorite: &NewFavorite) -> Result<Favorite, DbError>;

    /// Overwrite every field of `id`. Returns rows affected (0 or 1).
    async fn update(&self, id: FavoriteId, favorite: &NewFavorite) -> Result<u64, DbError>;

    /// Remove `id`. Returns rows affected (0 or 1).
    async fn delete(&self, id: FavoriteId) -> Result<u64, DbError>;
}
