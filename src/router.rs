use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::db::{Database, PostRepository};
use crate::handlers::blog::{about, create_form, create_post, index, not_found, show_post};
use crate::handlers::ops::{healthz, metrics};
use crate::templates::Templates;

/// Shared per-process state. The repository carries the storage accessor and
/// therefore the statement counter.
#[derive(Clone)]
pub struct BlogState {
    pub posts: PostRepository,
    pub templates: Arc<Templates>,
}

impl BlogState {
    pub fn new(db: Database, templates: Templates) -> Self {
        Self {
            posts: PostRepository::new(db),
            templates: Arc::new(templates),
        }
    }
}

pub fn blog_router(state: BlogState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/about", get(about))
        .route("/create", get(create_form).post(create_post))
        .route("/healthz", get(healthz))
        .route("/metrics", get(metrics))
        .route("/{post_id}", get(show_post))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
