use serde::Serialize;

use crate::db::posts::PostRepository;
use crate::error::BlogError;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub db_connection_count: u64,
    pub post_count: i64,
}

/// Count posts first and read the statement counter afterwards, so
/// `db_connection_count` includes the counting query.
pub async fn snapshot(posts: &PostRepository) -> Result<MetricsSnapshot, BlogError> {
    let post_count = posts.get_post_count().await?;
    Ok(MetricsSnapshot {
        db_connection_count: posts.db().executed_statements(),
        post_count,
    })
}
