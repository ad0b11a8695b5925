//! HTTP handlers and route configuration.

mod comment;
mod health;
mod like;
mod post;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            // Post routes
            .service(
                web::scope("/posts")
                    .route("", web::post().to(post::create_post))
                    .route("", web::get().to(post::search_posts))
                    .route("/{id}", web::get().to(post::get_post))
                    .route("/{id}", web::put().to(post::update_post))
                    .route("/{id}", web::delete().to(post::delete_post))
                    .route("/{id}/comments", web::post().to(comment::create_comment))
                    .route("/{id}/likes", web::post().to(like::create_like))
                    .route("/{id}/likes/count", web::get().to(like::count_likes)),
            )
            // Comment routes addressed by comment id
            .service(
                web::scope("/comments")
                    .route("/{id}", web::put().to(comment::update_comment))
                    .route("/{id}", web::delete().to(comment::delete_comment)),
            ),
    );
}
