//! Database layer - connection pool, storage seam and repository
//!
//! - One statement (or one query + scan) per operation, no transactions
//! - Handlers talk to `FavoriteStore`, never to the pool directly
//! - The `favorites` table is a precondition, see `SCHEMA`

pub mod pool;
pub mod repos;
pub mod schema;
pub mod store;

#[cfg(test)]
pub(crate) mod memory;

pub use pool::{create_pool, create_pool_with_options};
pub use repos::{DbError, FavoriteRepo};
pub use schema::SCHEMA;
pub use store::FavoriteStore;
