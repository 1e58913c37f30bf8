use diesel::prelude::*;

use crate::domain::insight::{InsightKind, InsightTable, MAX_INSIGHT_COLUMNS};
use crate::domain::traffic_stop::{NewTrafficStop, TrafficStop};
use crate::models::traffic_stop::{
    InsightRow, NewTrafficStop as DbNewTrafficStop, TrafficStop as DbTrafficStop,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, TrafficStopReader, TrafficStopWriter};
use crate::schema::traffic_stops;

/// Rows inserted per statement by [`TrafficStopWriter::create_traffic_stops`].
const INSERT_BATCH_SIZE: usize = 500;

/// Wraps an insight query so that its columns land in the fixed
/// [`InsightRow`] shape, cast to text and padded with `NULL`.
fn text_projection(kind: InsightKind) -> RepositoryResult<String> {
    let columns = kind.columns();
    if columns.len() > MAX_INSIGHT_COLUMNS {
        return Err(RepositoryError::Unexpected(format!(
            "insight {} projects {} columns",
            kind.slug(),
            columns.len()
        )));
    }

    let projection = (0..MAX_INSIGHT_COLUMNS)
        .map(|idx| match columns.get(idx) {
            Some(column) => format!("CAST(insight.\"{column}\" AS TEXT) AS c{}", idx + 1),
            None => format!("NULL AS c{}", idx + 1),
        })
        .collect::<Vec<_>>()
        .join(", ");

    Ok(format!("SELECT {projection} FROM ({}) AS insight", kind.sql()))
}

impl TrafficStopReader for DieselRepository {
    fn preview_traffic_stops(&self, limit: u32) -> RepositoryResult<Vec<TrafficStop>> {
        let mut conn = self.conn()?;

        let stops = traffic_stops::table
            .order(traffic_stops::id.asc())
            .limit(i64::from(limit))
            .select(DbTrafficStop::as_select())
            .load::<DbTrafficStop>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(stops)
    }

    fn run_insight(&self, kind: InsightKind) -> RepositoryResult<InsightTable> {
        let mut conn = self.conn()?;
        let query = text_projection(kind)?;
        let width = kind.columns().len();

        let rows = diesel::sql_query(query)
            .load::<InsightRow>(&mut conn)?
            .into_iter()
            .map(|row| row.into_values(width))
            .collect();

        Ok(InsightTable::new(kind, rows))
    }
}

impl TrafficStopWriter for DieselRepository {
    fn create_traffic_stops(&self, new_stops: &[NewTrafficStop]) -> RepositoryResult<usize> {
        let mut conn = self.conn()?;

        conn.transaction::<usize, RepositoryError, _>(|conn| {
            let mut inserted = 0;
            for chunk in new_stops.chunks(INSERT_BATCH_SIZE) {
                let insertables: Vec<DbNewTrafficStop> = chunk.iter().map(Into::into).collect();
                inserted += diesel::insert_into(traffic_stops::table)
                    .values(&insertables)
                    .execute(conn)?;
            }
            Ok(inserted)
        })
    }
}
