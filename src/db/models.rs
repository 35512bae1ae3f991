use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, PartialEq, FromRow)]
pub struct Post {
    pub id: i64,
    pub created: NaiveDateTime,
    pub title: String,
    pub content: String,
}
