//! SeaORM entity models and their domain conversions.

pub mod comment;
pub mod like;
pub mod post;
pub mod tag;
