use serde::Serialize;
use tracing::error;

use crate::db::sqlite::Database;
use crate::error::BlogError;

/// Why the probe failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unhealthy {
    /// The file opened but the `posts` table is not there.
    SchemaMissing,
    /// Connecting or querying failed for any other reason.
    StoreUnavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthStatus {
    Healthy,
    Unhealthy(Unhealthy),
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        matches!(self, HealthStatus::Healthy)
    }

    pub fn report(&self) -> HealthReport {
        let result = match self {
            HealthStatus::Healthy => "OK - healthy",
            HealthStatus::Unhealthy(_) => "ERROR - unhealthy",
        };
        HealthReport { result }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub result: &'static str,
}

/// Read at most one row from `posts` through the counted accessor.
pub async fn probe(db: &Database) -> HealthStatus {
    match run_probe(db).await {
        Ok(()) => HealthStatus::Healthy,
        Err(e) if e.is_missing_schema() => {
            // Nothing works without this table.
            error!(error = %e, "FATAL: posts table is unavailable");
            HealthStatus::Unhealthy(Unhealthy::SchemaMissing)
        }
        Err(e) => {
            error!(error = %e, "FATAL: database unreachable during health probe");
            HealthStatus::Unhealthy(Unhealthy::StoreUnavailable)
        }
    }
}

async fn run_probe(db: &Database) -> Result<(), BlogError> {
    let mut conn = db.acquire().await?;
    db.execute(&mut conn, sqlx::query("SELECT 1 FROM posts LIMIT 1"))
        .await?;
    Ok(())
}
