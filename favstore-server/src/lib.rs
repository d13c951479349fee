//! favstore-server: HTTP CRUD service for saved profile favorites
//!
//! Exposes the `favorites` table over six JSON endpoints. Storage is
//! reached through the `FavoriteStore` seam, built once at startup and
//! shared by every handler.

pub mod db;
pub mod http;
pub mod models;

pub use db::{create_pool, FavoriteRepo, FavoriteStore};
pub use http::{build_router, run_server, AppState, ServerConfig, ServerError};
