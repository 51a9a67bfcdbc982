use crate::db::connect_with_config;
use configs::DatabaseConfig;
use sea_orm::{ConnectionTrait, DatabaseBackend};

#[tokio::test]
async fn connects_to_sqlite_with_pool_settings() -> anyhow::Result<()> {
    let cfg = DatabaseConfig {
        url: "sqlite::memory:".into(),
        max_connections: 1,
        min_connections: 1,
        ..Default::default()
    };
    let db = connect_with_config(&cfg).await?;
    assert_eq!(db.get_database_backend(), DatabaseBackend::Sqlite);
    db.ping().await?;
    Ok(())
}

#[tokio::test]
async fn rejects_invalid_config_before_connecting() {
    let cfg = DatabaseConfig { url: "redis://localhost".into(), ..Default::default() };
    assert!(connect_with_config(&cfg).await.is_err());
}
