//! Database connection helpers.
//!
//! The dashboard only ever reads the traffic-stop log, so the web server opens
//! its pool in [`AccessMode::ReadOnly`], which makes SQLite reject any write
//! statement. The CSV importer is the single writer and asks for
//! [`AccessMode::ReadWrite`].

use std::time::Duration;

use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PoolError, PooledConnection};
use diesel::sqlite::SqliteConnection;
use log::error;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Whether pooled connections may modify the database.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessMode {
    ReadOnly,
    ReadWrite,
}

#[derive(Debug)]
/// Pragmas applied each time a connection is acquired from the pool.
struct StopLogPragmas {
    mode: AccessMode,
    busy_timeout: Duration,
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for StopLogPragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        let mut pragmas = format!("PRAGMA busy_timeout = {};", self.busy_timeout.as_millis());
        match self.mode {
            AccessMode::ReadOnly => pragmas.push_str(" PRAGMA query_only = ON;"),
            AccessMode::ReadWrite => {
                pragmas.push_str(" PRAGMA journal_mode = WAL; PRAGMA synchronous = NORMAL;")
            }
        }
        conn.batch_execute(&pragmas)
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// How long a request waits for a connection before reporting the database
/// as unavailable.
const LAZY_CONNECTION_TIMEOUT: Duration = Duration::from_secs(3);

fn pool_builder(mode: AccessMode) -> diesel::r2d2::Builder<ConnectionManager<SqliteConnection>> {
    Pool::builder().connection_customizer(Box::new(StopLogPragmas {
        mode,
        busy_timeout: Duration::from_secs(30),
    }))
}

/// Create a Diesel connection pool for the given database URL, failing when
/// no connection can be opened.
pub fn establish_connection_pool(database_url: &str, mode: AccessMode) -> Result<DbPool, PoolError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    pool_builder(mode).build(manager)
}

/// Create a pool that opens connections on first use.
///
/// Startup never touches the database, so an unreachable file surfaces as an
/// error from [`get_connection`] on each request instead.
pub fn lazy_connection_pool(database_url: &str, mode: AccessMode) -> DbPool {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    pool_builder(mode)
        .min_idle(Some(0))
        .connection_timeout(LAZY_CONNECTION_TIMEOUT)
        .build_unchecked(manager)
}

/// Retrieve a connection from the pool, logging the failure.
pub fn get_connection(pool: &DbPool) -> Result<DbConnection, PoolError> {
    pool.get().map_err(|e| {
        error!("Failed to get connection from pool: {e}");
        e
    })
}
