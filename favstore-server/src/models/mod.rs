//! Domain models with validation at construction
//!
//! Client input (path ids, JSON bodies) is validated when these types are
//! built. Invalid input returns ValidationError, not panic.

pub mod favorite;
pub mod validation;

pub use favorite::{Favorite, FavoriteId, FavoriteLookup, NewFavorite};
pub use validation::ValidationError;
