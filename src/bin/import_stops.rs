//! Loads a traffic-stop CSV export into the `traffic_stops` table.
//!
//! Usage: `import_stops <path/to/traffic_stops.csv>`. The database is taken
//! from the same configuration as the dashboard.

use std::env;
use std::fs::File;

use dotenvy::dotenv;

use securecheck::db::{AccessMode, establish_connection_pool};
use securecheck::import::read_traffic_stops;
use securecheck::models::config::ServerConfig;
use securecheck::repository::{DieselRepository, TrafficStopWriter};

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let Some(path) = env::args().nth(1) else {
        log::error!("Usage: import_stops <csv file>");
        std::process::exit(2);
    };

    let server_config = match ServerConfig::load() {
        Ok(server_config) => server_config,
        Err(err) => {
            log::error!("Error loading server config: {err}");
            std::process::exit(1);
        }
    };

    let file = match File::open(&path) {
        Ok(file) => file,
        Err(err) => {
            log::error!("Cannot open {path}: {err}");
            std::process::exit(1);
        }
    };

    let stops = match read_traffic_stops(file) {
        Ok(stops) => stops,
        Err(err) => {
            log::error!("Failed to parse {path}: {err}");
            std::process::exit(1);
        }
    };

    let pool = match establish_connection_pool(&server_config.database_url, AccessMode::ReadWrite)
    {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };

    let repo = DieselRepository::new(pool);

    match repo.create_traffic_stops(&stops) {
        Ok(inserted) => log::info!("Imported {inserted} traffic stops from {path}"),
        Err(e) => {
            log::error!("Failed to import traffic stops: {e}");
            std::process::exit(1);
        }
    }
}
