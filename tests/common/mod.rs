#![allow(dead_code)]

use std::path::PathBuf;

use chrono::{NaiveDate, NaiveTime};
use diesel::{Connection, SqliteConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use securecheck::db::{AccessMode, DbPool, establish_connection_pool};
use securecheck::domain::traffic_stop::NewTrafficStop;
use securecheck::repository::{DieselRepository, TrafficStopWriter};
use tempfile::TempDir;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

/// SQLite database in a temporary directory with the schema applied.
pub struct TestDb {
    _dir: TempDir,
    path: PathBuf,
    pool: DbPool,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(name);
        let url = path.to_str().expect("utf-8 temp path").to_string();

        let mut conn = SqliteConnection::establish(&url).expect("open test database");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("run migrations");

        let pool = establish_connection_pool(&url, AccessMode::ReadWrite).expect("build pool");

        Self {
            _dir: dir,
            path,
            pool,
        }
    }

    /// Temporary database without the `traffic_stops` table.
    pub fn without_schema(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(name);
        let url = path.to_str().expect("utf-8 temp path").to_string();
        let pool = establish_connection_pool(&url, AccessMode::ReadWrite).expect("build pool");

        Self {
            _dir: dir,
            path,
            pool,
        }
    }

    pub fn url(&self) -> &str {
        self.path.to_str().expect("utf-8 temp path")
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn repo(&self) -> DieselRepository {
        DieselRepository::new(self.pool.clone())
    }

    /// Inserts [`sample_stops`] and returns the repository.
    pub fn seeded(name: &str) -> (Self, DieselRepository) {
        let db = Self::new(name);
        let repo = db.repo();
        let inserted = repo
            .create_traffic_stops(&sample_stops())
            .expect("seed traffic stops");
        assert_eq!(inserted, 5);
        (db, repo)
    }
}

#[allow(clippy::too_many_arguments)]
pub fn stop(
    date: (i32, u32, u32),
    time: (u32, u32),
    country: &str,
    gender: &str,
    age: Option<i32>,
    race: &str,
    violation: &str,
    searched: bool,
    arrested: bool,
    duration: &str,
    drugs: bool,
    vehicle: &str,
) -> NewTrafficStop {
    NewTrafficStop {
        stop_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).expect("valid date"),
        stop_time: NaiveTime::from_hms_opt(time.0, time.1, 0).expect("valid time"),
        country_name: country.to_string(),
        driver_gender: gender.to_string(),
        driver_age: age,
        driver_race: race.to_string(),
        violation: violation.to_string(),
        search_conducted: searched,
        search_type: searched.then(|| "Frisk".to_string()),
        stop_outcome: if arrested { "Arrest" } else { "Citation" }.to_string(),
        is_arrested: arrested,
        stop_duration: duration.to_string(),
        drugs_related_stop: drugs,
        vehicle_number: vehicle.to_string(),
    }
}

/// Five stops across three countries and two years.
pub fn sample_stops() -> Vec<NewTrafficStop> {
    vec![
        stop((2020, 1, 1), (21, 15), "India", "M", Some(22), "Asian", "Speeding", true, false, "0-15 Min", false, "V1"),
        stop((2020, 6, 10), (10, 30), "India", "F", Some(30), "White", "Speeding", true, true, "16-30 Min", false, "V1"),
        stop((2021, 2, 2), (2, 45), "USA", "M", Some(45), "Black", "Drug Trafficking", true, true, "30+ Min", true, "V2"),
        stop((2021, 7, 7), (14, 0), "USA", "F", Some(19), "Hispanic", "Seatbelt", false, false, "0-15 Min", false, "V3"),
        stop((2021, 8, 8), (14, 20), "Canada", "M", None, "Asian", "drug possession", false, false, "16-30 Min", true, "V2"),
    ]
}
