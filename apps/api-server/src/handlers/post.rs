//! Post handlers.

use actix_web::{HttpResponse, web};
use serde::Deserialize;

use board_core::query::{PageRequest, PostSearchCriteria};
use board_core::service::{CreatePost, PostDetail, PostSummary, UpdatePost};
use board_shared::ApiResponse;
use board_shared::dto::{
    CommentResponse, CreatePostRequest, PageResponse, PostDetailResponse, PostSummaryResponse,
    UpdatePostRequest,
};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameter carrying the acting identity for deletions.
#[derive(Debug, Deserialize)]
pub struct DeleteQuery {
    pub deleted_by: String,
}

/// Search and paging query parameters.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub page: Option<u64>,
    pub size: Option<u64>,
    pub title: Option<String>,
    pub created_by: Option<String>,
    pub tag: Option<String>,
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    // Validate input
    if req.title.trim().is_empty() {
        return Err(AppError::BadRequest("Title must not be empty".to_string()));
    }
    if req.created_by.trim().is_empty() {
        return Err(AppError::BadRequest(
            "created_by must not be empty".to_string(),
        ));
    }

    let id = state
        .posts
        .create_post(CreatePost {
            title: req.title,
            content: req.content,
            created_by: req.created_by,
            tags: req.tags,
        })
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok(id)))
}

/// PUT /api/posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let id = state
        .posts
        .update_post(
            path.into_inner(),
            UpdatePost {
                title: req.title,
                content: req.content,
                updated_by: req.updated_by,
                tags: req.tags,
            },
        )
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(id)))
}

/// DELETE /api/posts/{id}?deleted_by=...
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    query: web::Query<DeleteQuery>,
) -> AppResult<HttpResponse> {
    let id = state
        .posts
        .delete_post(path.into_inner(), &query.deleted_by)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(id)))
}

/// GET /api/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let detail = state.posts.get_post(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(to_detail_response(detail))))
}

/// GET /api/posts
pub async fn search_posts(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> AppResult<HttpResponse> {
    let q = query.into_inner();

    let page_request = PageRequest::new(q.page.unwrap_or(0), q.size.unwrap_or(20).clamp(1, 100));
    let criteria = PostSearchCriteria {
        title: q.title,
        created_by: q.created_by,
        tag: q.tag,
    };

    let page = state.posts.find_page_by(page_request, criteria).await?;
    let response = PageResponse {
        page: page.page,
        size: page.size,
        total: page.total,
        items: page.items.into_iter().map(to_summary_response).collect(),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::ok(response)))
}

fn to_detail_response(detail: PostDetail) -> PostDetailResponse {
    PostDetailResponse {
        id: detail.id,
        title: detail.title,
        content: detail.content,
        created_by: detail.created_by,
        created_at: detail.created_at.to_rfc3339(),
        comments: detail
            .comments
            .into_iter()
            .map(|c| CommentResponse {
                id: c.id,
                content: c.content,
                created_by: c.created_by,
                created_at: c.created_at.to_rfc3339(),
            })
            .collect(),
        tags: detail.tags,
        like_count: detail.like_count,
    }
}

fn to_summary_response(summary: PostSummary) -> PostSummaryResponse {
    PostSummaryResponse {
        id: summary.id,
        title: summary.title,
        created_by: summary.created_by,
        created_at: summary.created_at.to_rfc3339(),
        first_tag: summary.first_tag,
    }
}
