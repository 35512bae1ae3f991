//! Database module: the storage accessor, the post repository and the schema.
//!
//! Layout:
//! - `sqlite.rs`: per-operation connections and the counted `execute` entry point
//! - `posts.rs`: typed queries over the `posts` table
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL and the startup bootstrap

pub mod models;
pub mod posts;
pub mod schema;
pub mod sqlite;

pub use models::Post;
pub use posts::PostRepository;
pub use sqlite::{Connection, Cursor, Database};
