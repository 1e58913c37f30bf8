//! Database models backing the traffic-stop repository.

pub mod config;
pub mod traffic_stop;
