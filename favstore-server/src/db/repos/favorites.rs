//! Favorite repository
//!
//! - list/find: single SELECT, explicit column list
//! - create: INSERT ... RETURNING (storage assigns the id)
//! - update/delete: single statement, zero rows affected is not an error

use async_trait::async_trait;
use sqlx::PgPool;

use super::DbError;
use crate::db::FavoriteStore;
use crate::models::{Favorite, FavoriteId, FavoriteLookup, NewFavorite};

/// Postgres-backed favorite repository
#[derive(Clone)]
pub struct FavoriteRepo {
    pool: PgPool,
}

impl FavoriteRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FavoriteStore for FavoriteRepo {
    async fn list_all(&self) -> Result<Vec<Favorite>, DbError> {
        let rows: Vec<Favorite> = sqlx::query_as(
            r#"
            SELECT favorite_id, session_id, user_name, name, professional_headline, img_url
            FROM favorites
            ORDER BY favorite_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn list_by_session(&self, session_id: &str) -> Result<Vec<Favorite>, DbError> {
        let rows: Vec<Favorite> = sqlx::query_as(
            r#"
            SELECT favorite_id, session_id, user_name, name, professional_headline, img_url
            FROM favorites
            WHERE session_id = $1
            ORDER BY favorite_id
            "#,
        )
        .bind(session_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn find_id(&self, lookup: &FavoriteLookup) -> Result<Option<i32>, DbError> {
        // No uniqueness constraint on these columns; lowest id breaks ties.
        let id: Option<i32> = sqlx::query_scalar(
            r#"
            SELECT favorite_id
            FROM favorites
            WHERE session_id = $1 AND name = $2 AND img_url = $3
            ORDER BY favorite_id
            LIMIT 1
            "#,
        )
        .bind(&lookup.session_id)
        .bind(&lookup.name)
        .bind(&lookup.image_url)
        .fetch_optional(&self.pool)
        .await?;

        Ok(id)
    }

    async fn create(&self, favorite: &NewFavorite) -> Result<Favorite, DbError> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO favorites (session_id, user_name, name, professional_headline, img_url)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING favorite_id
            "#,
        )
        .bind(&favorite.session_id)
        .bind(&favorite.user_name)
        .bind(&favorite.name)
        .bind(&favorite.professional_headline)
        .bind(&favorite.img_url)
        .fetch_one(&self.pool)
        .await?;

        Ok(favorite.clone().into_favorite(id))
    }

    async fn update(&self, id: FavoriteId, favorite: &NewFavorite) -> Result<u64, DbError> {
        let result = sqlx::query(
            r#"
            UPDATE favorites
            SET session_id = $1, user_name = $2, name = $3, professional_headline = $4, img_url = $5
            WHERE favorite_id = $6
            "#,
        )
        .bind(&favorite.session_id)
        .bind(&favorite.user_name)
        .bind(&favorite.name)
        .bind(&favorite.professional_headline)
        .bind(&favorite.img_url)
        .bind(id.get())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: FavoriteId) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM favorites WHERE favorite_id = $1")
            .bind(id.get())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
