//! Embedded schema migrations.

use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use super::database::{Database, DbConnection};
use super::error::QueryError;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Apply pending migrations on an open connection, returning the applied versions
pub fn run_pending(conn: &mut DbConnection) -> Result<Vec<String>, QueryError> {
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| QueryError::StorageError(format!("Migration failed: {}", e)))?;

    Ok(applied.into_iter().map(|v| v.to_string()).collect())
}

/// Apply pending migrations using a pooled connection
pub fn migrate(db: &Database) -> Result<Vec<String>, QueryError> {
    let mut conn = db.get_connection()?;
    let applied = run_pending(&mut conn)?;

    for version in &applied {
        tracing::info!("Applied migration {}", version);
    }
    if applied.is_empty() {
        tracing::info!("Database schema is up to date");
    }

    Ok(applied)
}
