use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use validator::Validate;

use crate::domain::prediction::PoliceLogEntry;
use crate::domain::types::DriverAge;
use crate::forms::FormError;

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
/// Form data for a new police-log entry awaiting a prediction.
///
/// Every field is taken as text so that blank or missing inputs surface as
/// [`FormError`]s instead of extractor rejections.
pub struct PoliceLogForm {
    /// Date picker value (`YYYY-MM-DD`).
    #[validate(length(min = 1))]
    pub stop_date: String,
    /// Time picker value (`HH:MM` or `HH:MM:SS`).
    #[validate(length(min = 1))]
    pub stop_time: String,
    pub county_name: String,
    pub driver_gender: String,
    pub driver_age: String,
    pub driver_race: String,
    pub search_conducted: String,
    pub search_type: String,
    pub drug_related: String,
    pub stop_duration: String,
    pub vehicle_number: String,
}

/// Trims and strips markup from free-text input.
fn clean_text(value: &str) -> String {
    ammonia::clean(value.trim()).trim().to_string()
}

fn parse_stop_time(value: &str) -> Result<NaiveTime, FormError> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .map_err(|_| FormError::InvalidTime)
}

fn parse_driver_age(value: &str) -> Result<DriverAge, FormError> {
    let age: i32 = value.trim().parse().map_err(|_| FormError::InvalidAge)?;
    Ok(DriverAge::try_from(age)?)
}

impl TryFrom<PoliceLogForm> for PoliceLogEntry {
    type Error = FormError;

    fn try_from(form: PoliceLogForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let stop_date = NaiveDate::parse_from_str(form.stop_date.trim(), "%Y-%m-%d")
            .map_err(|_| FormError::InvalidDate)?;
        let stop_time = parse_stop_time(&form.stop_time)?;

        Ok(Self {
            stop_date,
            stop_time,
            county_name: clean_text(&form.county_name),
            driver_gender: form.driver_gender.parse()?,
            driver_age: parse_driver_age(&form.driver_age)?,
            driver_race: clean_text(&form.driver_race),
            search_conducted: form.search_conducted.parse()?,
            search_type: clean_text(&form.search_type),
            drug_related: form.drug_related.parse()?,
            stop_duration: form.stop_duration.parse()?,
            vehicle_number: clean_text(&form.vehicle_number),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{Gender, StopDurationBucket, TypeConstraintError, YesNo};

    fn form() -> PoliceLogForm {
        PoliceLogForm {
            stop_date: "2024-05-17".to_string(),
            stop_time: "21:05".to_string(),
            county_name: "  Kent ".to_string(),
            driver_gender: "female".to_string(),
            driver_age: "27".to_string(),
            driver_race: "Asian".to_string(),
            search_conducted: "Yes".to_string(),
            search_type: "<b>Frisk</b>".to_string(),
            drug_related: "No".to_string(),
            stop_duration: "16-30 Min".to_string(),
            vehicle_number: "KA01AB1234".to_string(),
        }
    }

    #[test]
    fn valid_form_becomes_entry() {
        let entry = PoliceLogEntry::try_from(form()).unwrap();

        assert_eq!(entry.stop_date, NaiveDate::from_ymd_opt(2024, 5, 17).unwrap());
        assert_eq!(entry.stop_time, NaiveTime::from_hms_opt(21, 5, 0).unwrap());
        assert_eq!(entry.county_name, "Kent");
        assert_eq!(entry.driver_gender, Gender::Female);
        assert_eq!(entry.driver_age.get(), 27);
        assert_eq!(entry.search_conducted, YesNo::Yes);
        assert_eq!(entry.search_type, "<b>Frisk</b>");
        assert_eq!(entry.drug_related, YesNo::No);
        assert_eq!(entry.stop_duration, StopDurationBucket::From16To30);
    }

    #[test]
    fn script_tags_are_removed_from_free_text() {
        let mut form = form();
        form.driver_race = "<script>alert('x')</script>Asian".to_string();

        let entry = PoliceLogEntry::try_from(form).unwrap();

        assert_eq!(entry.driver_race, "Asian");
    }

    #[test]
    fn age_outside_range_is_rejected() {
        let mut form = form();
        form.driver_age = "12".to_string();

        assert!(matches!(
            PoliceLogEntry::try_from(form),
            Err(FormError::Constraint(TypeConstraintError::AgeOutOfRange))
        ));
    }

    #[test]
    fn blank_or_non_numeric_age_is_rejected() {
        for age in ["", "  ", "twenty", "27.5"] {
            let mut form = form();
            form.driver_age = age.to_string();

            assert!(
                matches!(PoliceLogEntry::try_from(form), Err(FormError::InvalidAge)),
                "age `{age}` was accepted"
            );
        }
    }

    #[test]
    fn missing_select_values_are_rejected() {
        let mut form = form();
        form.stop_duration = String::new();

        assert!(matches!(
            PoliceLogEntry::try_from(form),
            Err(FormError::Constraint(TypeConstraintError::EmptyString))
        ));

        assert!(matches!(
            PoliceLogEntry::try_from(PoliceLogForm::default()),
            Err(FormError::Validation(_))
        ));
    }

    #[test]
    fn malformed_date_and_time_are_rejected() {
        let mut bad_date = form();
        bad_date.stop_date = "17/05/2024".to_string();
        assert!(matches!(
            PoliceLogEntry::try_from(bad_date),
            Err(FormError::InvalidDate)
        ));

        let mut bad_time = form();
        bad_time.stop_time = "9pm".to_string();
        assert!(matches!(
            PoliceLogEntry::try_from(bad_time),
            Err(FormError::InvalidTime)
        ));
    }

    #[test]
    fn unknown_duration_is_a_constraint_error() {
        let mut form = form();
        form.stop_duration = "forever".to_string();

        assert!(matches!(
            PoliceLogEntry::try_from(form),
            Err(FormError::Constraint(_))
        ));
    }
}
