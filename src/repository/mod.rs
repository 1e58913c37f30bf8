use crate::db::{DbConnection, DbPool, get_connection};
use crate::domain::insight::{InsightKind, InsightTable};
use crate::domain::traffic_stop::{NewTrafficStop, TrafficStop};
use crate::repository::errors::RepositoryResult;

pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod traffic_stop;

/// Read access to the traffic-stop log.
pub trait TrafficStopReader {
    /// First `limit` stops ordered by id.
    fn preview_traffic_stops(&self, limit: u32) -> RepositoryResult<Vec<TrafficStop>>;
    /// Executes the literal SQL behind `kind`.
    fn run_insight(&self, kind: InsightKind) -> RepositoryResult<InsightTable>;
}

/// Write access used by the CSV importer.
pub trait TrafficStopWriter {
    fn create_traffic_stops(&self, new_stops: &[NewTrafficStop]) -> RepositoryResult<usize>;
}

/// Diesel backed repository shared by the routes and the importer.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}
