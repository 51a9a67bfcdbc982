//! Throwaway databases for tests. Production schema is managed outside this
//! workspace.

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, DbErr};

const SQLITE_PRODUCT_TABLE: &str = "CREATE TABLE IF NOT EXISTS product (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    price REAL NOT NULL,
    description TEXT
)";

const POSTGRES_PRODUCT_TABLE: &str = "CREATE TABLE IF NOT EXISTS product (
    id BIGSERIAL PRIMARY KEY,
    name VARCHAR NOT NULL,
    price DOUBLE PRECISION NOT NULL,
    description TEXT
)";

/// Create the `product` table for the connected backend if it is missing.
pub async fn create_product_table(db: &DatabaseConnection) -> Result<(), DbErr> {
    let ddl = match db.get_database_backend() {
        DatabaseBackend::Sqlite => SQLITE_PRODUCT_TABLE,
        DatabaseBackend::Postgres => POSTGRES_PRODUCT_TABLE,
        other => return Err(DbErr::Custom(format!("unsupported test backend: {other:?}"))),
    };
    db.execute_unprepared(ddl).await?;
    Ok(())
}

/// A private in-memory SQLite database with the schema applied.
///
/// The pool is pinned to one connection: every SQLite `:memory:` connection is
/// its own database.
pub async fn sqlite_memory() -> anyhow::Result<DatabaseConnection> {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(opts).await?;
    create_product_table(&db).await?;
    Ok(db)
}
