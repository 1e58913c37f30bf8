use chrono::{NaiveDate, NaiveTime};
use diesel::prelude::*;
use diesel::sql_types::{Nullable, Text};

use crate::domain::traffic_stop::{
    NewTrafficStop as DomainNewTrafficStop, TrafficStop as DomainTrafficStop,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::traffic_stops)]
/// Diesel model for [`crate::domain::traffic_stop::TrafficStop`].
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

#[derive(Insertable)]
#[diesel(table_name = crate::schema::traffic_stops)]
/// Insertable form of [`TrafficStop`].
pub struct NewTrafficStop<'a> {
    pub stop_date: NaiveDate,
    pub stop_time: NaiveTime,
    pub country_name: &'a str,
    pub driver_gender: &'a str,
    pub driver_age: Option<i32>,
    pub driver_race: &'a str,
    pub violation: &'a str,
    pub search_conducted: bool,
    pub search_type: Option<&'a str>,
    pub stop_outcome: &'a str,
    pub is_arrested: bool,
    pub stop_duration: &'a str,
    pub drugs_related_stop: bool,
    pub vehicle_number: &'a str,
}

/// Text-only row shape every insight query is projected onto.
///
/// Columns past the insight's own width are selected as `NULL`.
#[derive(Debug, QueryableByName)]
pub struct InsightRow {
    #[diesel(sql_type = Nullable<Text>)]
    pub c1: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    pub c2: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    pub c3: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    pub c4: Option<String>,
}

impl InsightRow {
    /// Keeps the first `width` values, turning SQL `NULL` into an empty string.
    pub fn into_values(self, width: usize) -> Vec<String> {
        [self.c1, self.c2, self.c3, self.c4]
            .into_iter()
            .take(width)
            .map(Option::unwrap_or_default)
            .collect()
    }
}

impl From<TrafficStop> for DomainTrafficStop {
    fn from(stop: TrafficStop) -> Self {
        Self {
            id: stop.id,
            stop_date: stop.stop_date,
            stop_time: stop.stop_time,
            country_name: stop.country_name,
            driver_gender: stop.driver_gender,
            driver_age: stop.driver_age,
            driver_race: stop.driver_race,
            violation: stop.violation,
            search_conducted: stop.search_conducted,
            search_type: stop.search_type,
            stop_outcome: stop.stop_outcome,
            is_arrested: stop.is_arrested,
            stop_duration: stop.stop_duration,
            drugs_related_stop: stop.drugs_related_stop,
            vehicle_number: stop.vehicle_number,
        }
    }
}

impl<'a> From<&'a DomainNewTrafficStop> for NewTrafficStop<'a> {
    fn from(stop: &'a DomainNewTrafficStop) -> Self {
        Self {
            stop_date: stop.stop_date,
            stop_time: stop.stop_time,
            country_name: stop.country_name.as_str(),
            driver_gender: stop.driver_gender.as_str(),
            driver_age: stop.driver_age,
            driver_race: stop.driver_race.as_str(),
            violation: stop.violation.as_str(),
            search_conducted: stop.search_conducted,
            search_type: stop.search_type.as_deref(),
            stop_outcome: stop.stop_outcome.as_str(),
            is_arrested: stop.is_arrested,
            stop_duration: stop.stop_duration.as_str(),
            drugs_related_stop: stop.drugs_related_stop,
            vehicle_number: stop.vehicle_number.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insight_row_truncates_to_width_and_blanks_nulls() {
        let row = InsightRow {
            c1: Some("India".to_string()),
            c2: None,
            c3: Some("7".to_string()),
            c4: None,
        };

        assert_eq!(row.into_values(3), vec!["India", "", "7"]);
    }

    #[test]
    fn domain_new_stop_converts_to_insertable() {
        let domain = DomainNewTrafficStop {
            stop_date: NaiveDate::from_ymd_opt(2021, 3, 4).unwrap(),
            stop_time: NaiveTime::from_hms_opt(1, 2, 3).unwrap(),
            country_name: "USA".to_string(),
            driver_gender: "F".to_string(),
            driver_age: None,
            driver_race: "Black".to_string(),
            violation: "Seatbelt".to_string(),
            search_conducted: true,
            search_type: Some("Vehicle Search".to_string()),
            stop_outcome: "Ticket".to_string(),
            is_arrested: false,
            stop_duration: "16-30 Min".to_string(),
            drugs_related_stop: false,
            vehicle_number: "NY1".to_string(),
        };

        let insertable = NewTrafficStop::from(&domain);

        assert_eq!(insertable.country_name, "USA");
        assert_eq!(insertable.search_type, Some("Vehicle Search"));
        assert_eq!(insertable.driver_age, None);
        assert!(insertable.search_conducted);
    }
}
