//! Comment handlers.

use actix_web::{HttpResponse, web};

use board_core::service::{CreateComment, UpdateComment};
use board_shared::ApiResponse;
use board_shared::dto::{CreateCommentRequest, UpdateCommentRequest};

use super::post::DeleteQuery;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/posts/{id}/comments
pub async fn create_comment(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<CreateCommentRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    if req.content.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Content must not be empty".to_string(),
        ));
    }

    let id = state
        .comments
        .create_comment(
            path.into_inner(),
            CreateComment {
                content: req.content,
                created_by: req.created_by,
            },
        )
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok(id)))
}

/// PUT /api/comments/{id}
pub async fn update_comment(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<UpdateCommentRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let id = state
        .comments
        .update_comment(
            path.into_inner(),
            UpdateComment {
                content: req.content,
                updated_by: req.updated_by,
            },
        )
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(id)))
}

/// DELETE /api/comments/{id}?deleted_by=...
pub async fn delete_comment(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    query: web::Query<DeleteQuery>,
) -> AppResult<HttpResponse> {
    let id = state
        .comments
        .delete_comment(path.into_inner(), &query.deleted_by)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(id)))
}
