use std::{error::Error, fmt::Debug, time::Duration};

use actix_web::web;
use diesel::{connection::SimpleConnection, r2d2::{ConnectionManager, CustomizeConnection}, SqliteConnection};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use r2d2::{Pool, PooledConnection};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{configuration::DatabaseSettings, telemetry::spawn_blocking_with_tracing};

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

pub fn error_fmt_chain(f: &mut std::fmt::Formatter<'_>, source: &Option<impl Error>) -> std::fmt::Result{
    if let Some(error) = source{
        write!(f, "\n\tCaused By:\n\t")?;
        write!(f, "{:?}", &error)?;
        error_fmt_chain(f, &error.source())
    } else {
        Ok(())
    }
}

// Body of failed restaurant and pizza requests
#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorMessage{
    pub error: String
}

// Body of failed restaurant_pizza requests
#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorMessages{
    pub errors: Vec<String>
}

// Applied to every connection the pool hands out
#[derive(Debug, Clone, Copy)]
pub struct SqliteConnectionOptions{
    pub busy_timeout: Duration
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for SqliteConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute(&format!(
                "PRAGMA foreign_keys = ON; PRAGMA busy_timeout = {};",
                self.busy_timeout.as_millis()
            ))
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

pub fn get_connection_pool(settings: &DatabaseSettings) -> Result<DbPool, r2d2::Error>{
    let manager = ConnectionManager::<SqliteConnection>::new(settings.get_database_url());

    Pool::builder()
        .max_size(settings.max_connections)
        .connection_customizer(Box::new(SqliteConnectionOptions{
            busy_timeout: Duration::from_millis(settings.busy_timeout_ms)
        }))
        .build(manager)
}

#[tracing::instrument(
    "Running pending migrations",
    skip_all
)]
pub fn run_migrations(pool: &DbPool) -> Result<(), anyhow::Error>{
    let mut conn = pool.get()?;

    let applied = conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| anyhow::anyhow!("Failed to run migrations: {}", e))?;

    tracing::info!(count = applied.len(), "Applied pending migrations");
    Ok(())
}

pub async fn get_pooled_connection(
    pool: &web::Data<DbPool>
) -> Result<DbConnection, PoolGetError>{
    let pool_clone = pool.clone();

    let res = spawn_blocking_with_tracing(move || {
        pool_clone.get()
    })
    .await??;

    Ok(res)
}

#[derive(Error)]
pub enum PoolGetError{
    #[error("Failed due to threadpool error")]
    ThreadpoolError(#[from] tokio::task::JoinError),
    #[error("Failed to get connection from pool")]
    DbPoolError(#[from] r2d2::Error),
}

impl Debug for PoolGetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}
