use std::time::Duration;

use configs::StoreConfig;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Schema};
use tracing::info;

use crate::{errors::ModelError, friend, post};

/// Build a lazily connected pool from config.
///
/// Only an unusable URL fails here; an unreachable server surfaces later as
/// per-query errors, so the process can start without its store.
pub async fn connect_with_config(cfg: &StoreConfig) -> anyhow::Result<DatabaseConnection> {
    let mut opt = ConnectOptions::new(cfg.url.clone());
    opt.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .sqlx_logging(cfg.sqlx_logging)
        .connect_lazy(true);
    let db = Database::connect(opt).await?;
    Ok(db)
}

/// Round-trip the server, then create the collection tables if absent.
pub async fn prepare(db: &DatabaseConnection) -> Result<(), ModelError> {
    db.ping().await?;
    ensure_schema(db).await?;
    Ok(())
}

/// `CREATE TABLE IF NOT EXISTS` for every collection, derived from the entities.
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), ModelError> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);
    let tables = [
        schema.create_table_from_entity(friend::Entity).if_not_exists().to_owned(),
        schema.create_table_from_entity(post::Entity).if_not_exists().to_owned(),
    ];
    for stmt in tables.iter() {
        db.execute(backend.build(stmt)).await?;
    }
    info!(event = "schema_ready", tables = "friends,posts", "collections ready");
    Ok(())
}
