//! In-memory `FavoriteStore` for router tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::{DbError, FavoriteStore};
use crate::models::{Favorite, FavoriteId, FavoriteLookup, NewFavorite};

#[derive(Default)]
pub struct MemoryStore {
    rows: Mutex<Vec<Favorite>>,
    next_id: AtomicUsize,
    calls: AtomicUsize,
    failing: AtomicBool,
}

impl MemoryStore {
    /// Make every subsequent call fail like a dropped connection.
    pub fn fail(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    /// Number of store calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn rows(&self) -> Vec<Favorite> {
        self.rows.lock().unwrap().clone()
    }

    fn enter(&self) -> Result<(), DbError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(DbError::Sqlx(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl FavoriteStore for MemoryStore {
    async fn list_all(&self) -> Result<Vec<Favorite>, DbError> {
        self.enter()?;
        Ok(self.rows())
    }

    async fn list_by_session(&self, session_id: &str) -> Result<Vec<Favorite>, DbError> {
        self.enter()?;
        Ok(self
            .rows()
            .into_iter()
            .filter(|f| f.session_id == session_id)
            .collect())
    }

    async fn find_id(&self, lookup: &FavoriteLookup) -> Result<Option<i32>, DbError> {
        self.enter()?;
        Ok(self
            .rows()
            .iter()
            .filter(|f| {
                f.session_id == lookup.session_id
                    && f.name == lookup.name
                    && f.img_url == lookup.image_url
            })
            .map(|f| f.favorite_id)
            .min())
    }

    async fn create(&self, favorite: &NewFavorite) -> Result<Favorite, DbError> {
        self.enter()?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) as i32 + 1;
        let row = favorite.clone().into_favorite(id);
        self.rows.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn update(&self, id: FavoriteId, favorite: &NewFavorite) -> Result<u64, DbError> {
        self.enter()?;
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|f| f.favorite_id == id.get()) {
            Some(row) => {
                *row = favorite.clone().into_favorite(id.get());
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: FavoriteId) -> Result<u64, DbError> {
        self.enter()?;
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|f| f.favorite_id != id.get());
        Ok((before - rows.len()) as u64)
    }
}
