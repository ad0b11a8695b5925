//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod counter;
mod repository;

pub use counter::CounterStore;
pub use repository::{
    BaseRepository, CommentRepository, LikeRepository, PostRepository, TagRepository,
};
