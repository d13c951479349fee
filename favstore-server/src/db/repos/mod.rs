//! Repository implementations for database access

pub mod favorites;

pub use favorites::FavoriteRepo;

/// Database error type
///
/// Displays the driver's message unchanged; it is surfaced to clients.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("{0}")]
    Sqlx(#[from] sqlx::Error),
}
