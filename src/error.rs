use axum::{
    http::StatusCode,
    response::{Html, IntoResponse},
};
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum BlogError {
    #[error("Failed to open database connection: {0}")]
    Connect(#[source] SqlxError),

    #[error("Database error: {0}")]
    Database(#[from] SqlxError),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BlogError {
    /// True when the store was reachable but the expected table or column is absent.
    pub fn is_missing_schema(&self) -> bool {
        let BlogError::Database(SqlxError::Database(db_err)) = self else {
            return false;
        };
        let message = db_err.message();
        message.starts_with("no such table") || message.starts_with("no such column")
    }
}

impl From<figment::Error> for BlogError {
    fn from(e: figment::Error) -> Self {
        BlogError::Config(Box::new(e))
    }
}

impl IntoResponse for BlogError {
    fn into_response(self) -> axum::response::Response {
        error!(error = %self, "request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html("<h1>Internal Server Error</h1><p>An internal server error occurred.</p>"),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_database_errors_are_not_schema_errors() {
        let err = BlogError::Database(SqlxError::RowNotFound);
        assert!(!err.is_missing_schema());

        let err = BlogError::Io(std::io::Error::other("disk"));
        assert!(!err.is_missing_schema());
    }

    #[test]
    fn errors_render_as_500() {
        let err = BlogError::Database(SqlxError::PoolClosed);
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
