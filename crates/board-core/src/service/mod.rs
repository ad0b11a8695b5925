//! Services - the use-case layer orchestrating entities, repositories, and
//! the counter store.

mod comment;
mod dto;
mod like;
mod post;

pub use comment::CommentService;
pub use dto::{
    CommentView, CreateComment, CreatePost, PostDetail, PostSummary, UpdateComment, UpdatePost,
};
pub use like::{LikeService, like_count_key};
pub use post::PostService;
