//! Domain aggregates exposed by the dashboard service layer.

pub mod insight;
pub mod prediction;
pub mod traffic_stop;
pub mod types;
