//! Route handlers organized by resource

pub mod favorites;
pub mod health;
