//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::insight::{InsightKind, InsightTable};
use crate::domain::traffic_stop::{NewTrafficStop, TrafficStop};
use crate::repository::errors::RepositoryResult;
use crate::repository::{TrafficStopReader, TrafficStopWriter};

mock! {
    pub Repository {}

    impl TrafficStopReader for Repository {
        fn preview_traffic_stops(&self, limit: u32) -> RepositoryResult<Vec<TrafficStop>>;
        fn run_insight(&self, kind: InsightKind) -> RepositoryResult<InsightTable>;
    }

    impl TrafficStopWriter for Repository {
        fn create_traffic_stops(&self, new_stops: &[NewTrafficStop]) -> RepositoryResult<usize>;
    }
}
