use std::collections::HashMap;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// One row of the traffic-stop log.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TrafficStop {
    pub id: i32,
    pub stop_date: NaiveDate,
    pub stop_time: NaiveTime,
    pub country_name: String,
    pub driver_gender: String,
    pub driver_age: Option<i32>,
    pub driver_race: String,
    pub violation: String,
    pub search_conducted: bool,
    pub search_type: Option<String>,
    pub stop_outcome: String,
    pub is_arrested: bool,
    pub stop_duration: String,
    pub drugs_related_stop: bool,
    pub vehicle_number: String,
}

impl TrafficStop {
    /// Column names of the data preview, in table order.
    pub const PREVIEW_COLUMNS: [&'static str; 14] = [
        "stop_date",
        "stop_time",
        "country_name",
        "driver_gender",
        "driver_age",
        "driver_race",
        "violation",
        "search_conducted",
        "search_type",
        "stop_outcome",
        "is_arrested",
        "stop_duration",
        "drugs_related_stop",
        "vehicle_number",
    ];

    /// Values of [`Self::PREVIEW_COLUMNS`] rendered as text.
    pub fn preview_cells(&self) -> Vec<String> {
        vec![
            self.stop_date.format("%Y-%m-%d").to_string(),
            self.stop_time.format("%H:%M:%S").to_string(),
            self.country_name.clone(),
            self.driver_gender.clone(),
            self.driver_age.map(|age| age.to_string()).unwrap_or_default(),
            self.driver_race.clone(),
            self.violation.clone(),
            self.search_conducted.to_string(),
            self.search_type.clone().unwrap_or_default(),
            self.stop_outcome.clone(),
            self.is_arrested.to_string(),
            self.stop_duration.clone(),
            self.drugs_related_stop.to_string(),
            self.vehicle_number.clone(),
        ]
    }
}

/// Traffic stop ready to be inserted by the importer.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NewTrafficStop {
    pub stop_date: NaiveDate,
    pub stop_time: NaiveTime,
    pub country_name: String,
    pub driver_gender: String,
    pub driver_age: Option<i32>,
    pub driver_race: String,
    pub violation: String,
    pub search_conducted: bool,
    pub search_type: Option<String>,
    pub stop_outcome: String,
    pub is_arrested: bool,
    pub stop_duration: String,
    pub drugs_related_stop: bool,
    pub vehicle_number: String,
}

/// Number of preview rows carrying a given violation.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct ViolationCount {
    pub violation: String,
    pub count: usize,
    /// Bar length in percent of the most frequent violation.
    pub bar_width: usize,
}

/// Counts violations across `stops`, most frequent first and ties by name.
pub fn count_violations(stops: &[TrafficStop]) -> Vec<ViolationCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for stop in stops {
        *counts.entry(stop.violation.as_str()).or_default() += 1;
    }

    let mut counts: Vec<ViolationCount> = counts
        .into_iter()
        .map(|(violation, count)| ViolationCount {
            violation: violation.to_string(),
            count,
            bar_width: 100,
        })
        .collect();
    counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.violation.cmp(&b.violation)));

    let max = counts.first().map(|c| c.count).unwrap_or(1);
    for item in &mut counts {
        item.bar_width = item.count * 100 / max;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop(id: i32, violation: &str) -> TrafficStop {
        TrafficStop {
            id,
            stop_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            stop_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            country_name: "Canada".to_string(),
            driver_gender: "M".to_string(),
            driver_age: Some(30),
            driver_race: "Asian".to_string(),
            violation: violation.to_string(),
            search_conducted: false,
            search_type: None,
            stop_outcome: "Warning".to_string(),
            is_arrested: false,
            stop_duration: "0-15 Min".to_string(),
            drugs_related_stop: false,
            vehicle_number: format!("V{id}"),
        }
    }

    #[test]
    fn count_violations_orders_by_frequency_then_name() {
        let stops = vec![
            stop(1, "Speeding"),
            stop(2, "Seatbelt"),
            stop(3, "Speeding"),
            stop(4, "DUI"),
        ];

        let counts = count_violations(&stops);

        assert_eq!(
            counts,
            vec![
                ViolationCount {
                    violation: "Speeding".to_string(),
                    count: 2,
                    bar_width: 100,
                },
                ViolationCount {
                    violation: "DUI".to_string(),
                    count: 1,
                    bar_width: 50,
                },
                ViolationCount {
                    violation: "Seatbelt".to_string(),
                    count: 1,
                    bar_width: 50,
                },
            ]
        );
    }

    #[test]
    fn preview_cells_follow_column_order() {
        let mut row = stop(7, "Speeding");
        row.search_type = None;

        let cells = row.preview_cells();

        assert_eq!(cells.len(), TrafficStop::PREVIEW_COLUMNS.len());
        assert_eq!(cells[0], "2020-01-01");
        assert_eq!(cells[1], "10:00:00");
        assert_eq!(cells[4], "30");
        assert_eq!(cells[8], "");
        assert_eq!(cells[13], "V7");
    }

    #[test]
    fn count_violations_of_empty_preview_is_empty() {
        assert!(count_violations(&[]).is_empty());
    }
}
