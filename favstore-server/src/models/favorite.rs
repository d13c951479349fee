//! Favorite record and the inputs that address it

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::ValidationError;

/// A stored favorite, as returned on the wire and read from `favorites`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Favorite {
    pub favorite_id: i32,
    pub session_id: String,
    pub user_name: String,
    pub name: String,
    pub professional_headline: String,
    pub img_url: String,
}

/// Full field set for create and update.
///
/// Every field is required on the wire. A client-supplied `favorite_id`
/// is not part of this shape and is dropped during decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFavorite {
    pub session_id: String,
    pub user_name: String,
    pub name: String,
    pub professional_headline: String,
    pub img_url: String,
}

impl NewFavorite {
    /// Decode a request body.
    ///
    /// The body is parsed as JSON whatever the request's content type.
    pub fn from_json(body: &[u8]) -> Result<Self, ValidationError> {
        serde_json::from_slice(body).map_err(|e| ValidationError::MalformedBody(e.to_string()))
    }

    /// Attach the storage-assigned id.
    pub fn into_favorite(self, favorite_id: i32) -> Favorite {
        Favorite {
            favorite_id,
            session_id: self.session_id,
            user_name: self.user_name,
            name: self.name,
            professional_headline: self.professional_headline,
            img_url: self.img_url,
        }
    }
}

/// Validated favorite id taken from a path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FavoriteId(i32);

impl FavoriteId {
    /// Parse a path segment, accepting only `[0-9]+` that fits the id column.
    ///
    /// # Example
    /// ```
    /// use favstore_server::models::FavoriteId;
    ///
    /// assert_eq!(FavoriteId::parse("42").unwrap().get(), 42);
    /// assert!(FavoriteId::parse("abc").is_err());
    /// assert!(FavoriteId::parse("-1").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidFormat {
                field: "id",
                reason: "must be a non-negative integer",
            });
        }

        s.parse::<i32>().map(Self).map_err(|_| ValidationError::InvalidFormat {
            field: "id",
            reason: "out of range",
        })
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

/// Query parameters for the lookup-by-fields operation.
///
/// Absent parameters read as the empty string. A repeated parameter keeps
/// its first value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoriteLookup {
    pub session_id: String,
    pub name: String,
    pub image_url: String,
}

impl FavoriteLookup {
    /// Build from decoded query pairs in request order.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut session_id = None;
        let mut name = None;
        let mut image_url = None;

        for (key, value) in pairs {
            let slot = match key.as_str() {
                "session_id" => &mut session_id,
                "name" => &mut name,
                "image_url" => &mut image_url,
                _ => continue,
            };
            slot.get_or_insert(value);
        }

        Self {
            session_id: session_id.unwrap_or_default(),
            name: name.unwrap_or_default(),
            image_url: image_url.unwrap_or_default(),
        }
    }
}
