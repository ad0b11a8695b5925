//! Like handlers.

use actix_web::{HttpResponse, web};
use serde::Deserialize;

use board_shared::ApiResponse;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// Query parameter carrying the liking identity.
#[derive(Debug, Deserialize)]
pub struct LikeQuery {
    pub created_by: String,
}

/// POST /api/posts/{id}/likes?created_by=...
pub async fn create_like(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    query: web::Query<LikeQuery>,
) -> AppResult<HttpResponse> {
    let id = state
        .likes
        .create_like(path.into_inner(), &query.created_by)
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok(id)))
}

/// GET /api/posts/{id}/likes/count
pub async fn count_likes(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let count = state.likes.count_like(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(count)))
}
