//! Police-log entries and the randomly "predicted" stop result.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use crate::domain::types::{DriverAge, Gender, StopDurationBucket, YesNo};

/// Violations a prediction can name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "&'static str")]
pub enum PredictedViolation {
    Speeding,
    SignalViolation,
    Dui,
    EquipmentViolation,
}

impl PredictedViolation {
    pub const ALL: [PredictedViolation; 4] = [
        PredictedViolation::Speeding,
        PredictedViolation::SignalViolation,
        PredictedViolation::Dui,
        PredictedViolation::EquipmentViolation,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            PredictedViolation::Speeding => "speeding",
            PredictedViolation::SignalViolation => "signal violation",
            PredictedViolation::Dui => "DUI",
            PredictedViolation::EquipmentViolation => "equipment violation",
        }
    }
}

impl From<PredictedViolation> for &'static str {
    fn from(value: PredictedViolation) -> Self {
        value.as_str()
    }
}

/// Stop outcomes a prediction can name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PredictedOutcome {
    Warning,
    Citation,
    Arrest,
}

impl PredictedOutcome {
    pub const ALL: [PredictedOutcome; 3] = [
        PredictedOutcome::Warning,
        PredictedOutcome::Citation,
        PredictedOutcome::Arrest,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            PredictedOutcome::Warning => "warning",
            PredictedOutcome::Citation => "citation",
            PredictedOutcome::Arrest => "arrest",
        }
    }
}

/// A police-log entry submitted through the dashboard form.
///
/// Entries are only used to phrase the narrative; they are never stored.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PoliceLogEntry {
    pub stop_date: NaiveDate,
    pub stop_time: NaiveTime,
    pub county_name: String,
    pub driver_gender: Gender,
    pub driver_age: DriverAge,
    pub driver_race: String,
    pub search_conducted: YesNo,
    pub search_type: String,
    pub drug_related: YesNo,
    pub stop_duration: StopDurationBucket,
    pub vehicle_number: String,
}

/// Outcome shown in the prediction summary.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Prediction {
    pub violation: PredictedViolation,
    pub outcome: PredictedOutcome,
    pub narrative: String,
}

impl Prediction {
    pub fn new(
        entry: &PoliceLogEntry,
        violation: PredictedViolation,
        outcome: PredictedOutcome,
    ) -> Self {
        Self {
            violation,
            outcome,
            narrative: narrative(entry, violation, outcome),
        }
    }
}

/// Upper-cases the first character and lower-cases the rest.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Builds the one-paragraph stop narrative for `entry`.
pub fn narrative(
    entry: &PoliceLogEntry,
    violation: PredictedViolation,
    outcome: PredictedOutcome,
) -> String {
    let search_text = if entry.search_conducted.is_yes() {
        format!("A search was conducted ({})", entry.search_type)
    } else {
        "No search was conducted".to_string()
    };
    let drug_text = if entry.drug_related.is_yes() {
        "drug-related"
    } else {
        "not drug-related"
    };

    format!(
        "A {age}-year-old {gender} driver was stopped for {violation} at {time}. \
         {search_text}, and {pronoun} received a {outcome}. \
         The stop lasted {duration} and was {drug_text}.",
        age = entry.driver_age,
        gender = entry.driver_gender,
        violation = capitalize(violation.as_str()),
        time = entry.stop_time.format("%I:%M %p"),
        pronoun = entry.driver_gender.pronoun(),
        outcome = outcome.as_str(),
        duration = entry.stop_duration,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> PoliceLogEntry {
        PoliceLogEntry {
            stop_date: NaiveDate::from_ymd_opt(2024, 5, 17).unwrap(),
            stop_time: NaiveTime::from_hms_opt(21, 5, 0).unwrap(),
            county_name: "Kent".to_string(),
            driver_gender: Gender::Female,
            driver_age: DriverAge::new(27).unwrap(),
            driver_race: "Asian".to_string(),
            search_conducted: YesNo::Yes,
            search_type: "Frisk".to_string(),
            drug_related: YesNo::No,
            stop_duration: StopDurationBucket::From16To30,
            vehicle_number: "KA01AB1234".to_string(),
        }
    }

    #[test]
    fn capitalize_matches_sentence_case() {
        assert_eq!(capitalize("signal violation"), "Signal violation");
        assert_eq!(capitalize("DUI"), "Dui");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn narrative_with_search() {
        let text = narrative(&entry(), PredictedViolation::Speeding, PredictedOutcome::Citation);

        assert_eq!(
            text,
            "A 27-year-old female driver was stopped for Speeding at 09:05 PM. \
             A search was conducted (Frisk), and she received a citation. \
             The stop lasted 16-30 Min and was not drug-related."
        );
    }

    #[test]
    fn narrative_without_search() {
        let mut entry = entry();
        entry.driver_gender = Gender::Male;
        entry.search_conducted = YesNo::No;
        entry.drug_related = YesNo::Yes;
        entry.stop_time = NaiveTime::from_hms_opt(7, 30, 0).unwrap();

        let prediction = Prediction::new(&entry, PredictedViolation::Dui, PredictedOutcome::Arrest);

        assert_eq!(
            prediction.narrative,
            "A 27-year-old male driver was stopped for Dui at 07:30 AM. \
             No search was conducted, and he received a arrest. \
             The stop lasted 16-30 Min and was drug-related."
        );
    }
}
