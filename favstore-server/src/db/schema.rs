//! Table layout the service expects to find.
//!
//! The server never runs this itself; operators create the table before
//! starting it (`favstore schema` prints the statement).

/// DDL for the `favorites` table.
pub const SCHEMA: &str = r#"CREATE TABLE IF NOT EXISTS favorites (
    favorite_id SERIAL PRIMARY KEY,
    session_id TEXT NOT NULL,
    user_name TEXT NOT NULL,
    name TEXT NOT NULL,
    professional_headline TEXT NOT NULL,
    img_url TEXT NOT NULL
);
"#;
