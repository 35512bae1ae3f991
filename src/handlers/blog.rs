use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use minijinja::context;
use serde::Deserialize;
use tracing::info;

use crate::BlogError;
use crate::router::BlogState;

const TITLE_REQUIRED: &str = "Title is required!";

#[derive(Debug, Default, Deserialize)]
pub struct CreatePostForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// GET /
pub async fn index(State(state): State<BlogState>) -> Result<Html<String>, BlogError> {
    let posts = state.posts.list_posts().await?;
    state.templates.render("index.html", context! { posts })
}

/// GET /{post_id}; ids that are not integers are treated as unknown posts.
pub async fn show_post(
    State(state): State<BlogState>,
    Path(raw_id): Path<String>,
) -> Result<Response, BlogError> {
    let post = match raw_id.parse::<i64>() {
        Ok(id) => state.posts.get_post(id).await?,
        Err(_) => None,
    };

    let Some(post) = post else {
        info!(post_id = %raw_id, "non existing article accessed");
        return render_not_found(&state);
    };

    info!(post_id = post.id, title = %post.title, "article retrieved");
    Ok(state
        .templates
        .render("post.html", context! { post })?
        .into_response())
}

/// GET /about
pub async fn about(State(state): State<BlogState>) -> Result<Html<String>, BlogError> {
    info!("about us retrieved");
    state.templates.render("about.html", context! {})
}

/// GET /create
pub async fn create_form(State(state): State<BlogState>) -> Result<Html<String>, BlogError> {
    state.templates.render("create.html", context! {})
}

/// POST /create
pub async fn create_post(
    State(state): State<BlogState>,
    Form(form): Form<CreatePostForm>,
) -> Result<Response, BlogError> {
    if form.title.is_empty() {
        let page = state.templates.render(
            "create.html",
            context! {
                messages => vec![TITLE_REQUIRED],
                content => form.content,
            },
        )?;
        return Ok(page.into_response());
    }

    let id = state.posts.create_post(&form.title, &form.content).await?;
    info!(post_id = id, title = %form.title, "new article created");
    Ok(Redirect::to("/").into_response())
}

/// Fallback for every unmatched path.
pub async fn not_found(State(state): State<BlogState>) -> Result<Response, BlogError> {
    render_not_found(&state)
}

fn render_not_found(state: &BlogState) -> Result<Response, BlogError> {
    let page = state.templates.render("404.html", context! {})?;
    Ok((StatusCode::NOT_FOUND, page).into_response())
}
