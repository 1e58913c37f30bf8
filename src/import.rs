//! CSV ingestion of traffic-stop records.
//!
//! The expected file carries one stop per line with the `traffic_stops`
//! column names as headers. Columns the table does not know about are ignored.

use std::io::Read;

use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use thiserror::Error;

use crate::domain::traffic_stop::NewTrafficStop;
use crate::domain::types::YesNo;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("record {record}: {message}")]
    InvalidRecord { record: u64, message: String },
}

/// One CSV line before any value has been interpreted.
#[derive(Debug, Deserialize)]
struct RawStop {
    stop_date: String,
    stop_time: String,
    country_name: String,
    driver_gender: String,
    #[serde(default)]
    driver_age: String,
    driver_race: String,
    violation: String,
    search_conducted: String,
    #[serde(default)]
    search_type: String,
    stop_outcome: String,
    is_arrested: String,
    stop_duration: String,
    drugs_related_stop: String,
    vehicle_number: String,
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(value, "%m/%d/%Y"))
        .map_err(|_| format!("invalid stop_date `{value}`"))
}

fn parse_time(value: &str) -> Result<NaiveTime, String> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .map_err(|_| format!("invalid stop_time `{value}`"))
}

fn parse_flag(column: &str, value: &str) -> Result<bool, String> {
    value
        .parse::<YesNo>()
        .map(YesNo::is_yes)
        .map_err(|err| format!("{column}: {err}"))
}

/// Ages come either as integers or, from spreadsheet exports, as `24.0`/`NaN`.
fn parse_age(value: &str) -> Result<Option<i32>, String> {
    let value = value.trim();
    if value.is_empty() || value.eq_ignore_ascii_case("nan") {
        return Ok(None);
    }
    if let Ok(age) = value.parse::<i32>() {
        return Ok(Some(age));
    }
    match value.split_once('.') {
        Some((whole, fraction)) if fraction.chars().all(|c| c == '0') => whole
            .parse::<i32>()
            .map(Some)
            .map_err(|_| format!("invalid driver_age `{value}`")),
        _ => Err(format!("invalid driver_age `{value}`")),
    }
}

fn optional_text(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan") {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl TryFrom<RawStop> for NewTrafficStop {
    type Error = String;

    fn try_from(raw: RawStop) -> Result<Self, Self::Error> {
        Ok(Self {
            stop_date: parse_date(&raw.stop_date)?,
            stop_time: parse_time(&raw.stop_time)?,
            country_name: raw.country_name.trim().to_string(),
            driver_gender: raw.driver_gender.trim().to_string(),
            driver_age: parse_age(&raw.driver_age)?,
            driver_race: raw.driver_race.trim().to_string(),
            violation: raw.violation.trim().to_string(),
            search_conducted: parse_flag("search_conducted", &raw.search_conducted)?,
            search_type: optional_text(raw.search_type),
            stop_outcome: raw.stop_outcome.trim().to_string(),
            is_arrested: parse_flag("is_arrested", &raw.is_arrested)?,
            stop_duration: raw.stop_duration.trim().to_string(),
            drugs_related_stop: parse_flag("drugs_related_stop", &raw.drugs_related_stop)?,
            vehicle_number: raw.vehicle_number.trim().to_string(),
        })
    }
}

/// Reads every stop from a CSV source, failing on the first bad record.
pub fn read_traffic_stops<R: Read>(source: R) -> Result<Vec<NewTrafficStop>, ImportError> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::Headers).from_reader(source);
    let mut stops = Vec::new();

    for (idx, result) in reader.deserialize::<RawStop>().enumerate() {
        let raw = result?;
        let stop = NewTrafficStop::try_from(raw).map_err(|message| ImportError::InvalidRecord {
            record: idx as u64 + 1,
            message,
        })?;
        stops.push(stop);
    }

    Ok(stops)
}
