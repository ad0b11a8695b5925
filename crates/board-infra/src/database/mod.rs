//! Database adapters - SeaORM entities and PostgreSQL repositories.

mod connections;
pub mod entity;
mod postgres_repo;

pub use connections::{DatabaseConfig, connect};
pub use postgres_repo::{
    PostgresCommentRepository, PostgresLikeRepository, PostgresPostRepository,
    PostgresTagRepository,
};
