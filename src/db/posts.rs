use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};

use crate::db::models::Post;
use crate::db::sqlite::Database;
use crate::error::BlogError;

/// Queries over the `posts` table. Each call opens and releases its own connection.
#[derive(Debug, Clone)]
pub struct PostRepository {
    db: Database,
}

impl PostRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Database {
        &self.db
    }

    /// Look a post up by primary key. `Ok(None)` when no row matches.
    pub async fn get_post(&self, id: i64) -> Result<Option<Post>, BlogError> {
        let mut conn = self.db.acquire().await?;
        let row = self
            .db
            .execute(
                &mut conn,
                sqlx::query("SELECT id, created, title, content FROM posts WHERE id = ?").bind(id),
            )
            .await?
            .fetch_next();
        row.as_ref().map(Self::row_to_model).transpose()
    }

    pub async fn get_post_count(&self) -> Result<i64, BlogError> {
        let mut conn = self.db.acquire().await?;
        let row = self
            .db
            .execute(
                &mut conn,
                sqlx::query("SELECT COUNT(*) AS post_count FROM posts"),
            )
            .await?
            .fetch_next();
        // COUNT(*) always yields exactly one row
        match row {
            Some(row) => Ok(row.try_get("post_count")?),
            None => Ok(0),
        }
    }

    pub async fn list_posts(&self) -> Result<Vec<Post>, BlogError> {
        let mut conn = self.db.acquire().await?;
        self.db
            .execute(
                &mut conn,
                sqlx::query("SELECT id, created, title, content FROM posts ORDER BY id"),
            )
            .await?
            .map(|row| Self::row_to_model(&row))
            .collect()
    }

    /// Insert a post and return its id. The statement runs in autocommit mode,
    /// so the row is visible to other connections once this returns.
    pub async fn create_post(&self, title: &str, content: &str) -> Result<i64, BlogError> {
        let mut conn = self.db.acquire().await?;
        let row = self
            .db
            .execute(
                &mut conn,
                sqlx::query("INSERT INTO posts (title, content) VALUES (?, ?) RETURNING id")
                    .bind(title)
                    .bind(content),
            )
            .await?
            .fetch_next()
            .ok_or(sqlx::Error::RowNotFound)?;
        conn.close().await?;
        Ok(row.try_get("id")?)
    }

    fn row_to_model(row: &SqliteRow) -> Result<Post, BlogError> {
        Ok(Post::from_row(row)?)
    }
}
