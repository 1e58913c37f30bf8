//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce the closed vocabularies of the police-log form
//! (gender, yes/no answers, stop-duration buckets) and the accepted driver age
//! range, so that once a value reaches the domain layer it can be trusted.
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Youngest driver age accepted by the police-log form.
pub const MIN_DRIVER_AGE: i32 = 16;
/// Oldest driver age accepted by the police-log form.
pub const MAX_DRIVER_AGE: i32 = 100;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided value is not part of the accepted vocabulary.
    #[error("invalid value: {0}")]
    InvalidValue(String),
    /// Driver age fell outside of the accepted range.
    #[error("driver age must be between 16 and 100")]
    AgeOutOfRange,
}

/// Gender of the stopped driver as offered by the form.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub const fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    /// Subject pronoun used in the stop narrative.
    pub const fn pronoun(self) -> &'static str {
        match self {
            Gender::Male => "he",
            Gender::Female => "she",
        }
    }
}

impl FromStr for Gender {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            "" => Err(TypeConstraintError::EmptyString),
            other => Err(TypeConstraintError::InvalidValue(other.to_string())),
        }
    }
}

impl Display for Gender {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Answer to a Yes/No select box.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub const fn is_yes(self) -> bool {
        matches!(self, YesNo::Yes)
    }
}

impl FromStr for YesNo {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "yes" | "y" | "true" | "1" => Ok(YesNo::Yes),
            "no" | "n" | "false" | "0" => Ok(YesNo::No),
            "" => Err(TypeConstraintError::EmptyString),
            other => Err(TypeConstraintError::InvalidValue(other.to_string())),
        }
    }
}

/// Stop duration buckets recorded in the `stop_duration` column.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum StopDurationBucket {
    #[serde(rename = "0-15 Min")]
    UpTo15,
    #[serde(rename = "16-30 Min")]
    From16To30,
    #[serde(rename = "30+ Min")]
    Over30,
}

impl StopDurationBucket {
    pub const ALL: [StopDurationBucket; 3] = [
        StopDurationBucket::UpTo15,
        StopDurationBucket::From16To30,
        StopDurationBucket::Over30,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            StopDurationBucket::UpTo15 => "0-15 Min",
            StopDurationBucket::From16To30 => "16-30 Min",
            StopDurationBucket::Over30 => "30+ Min",
        }
    }
}

impl FromStr for StopDurationBucket {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|bucket| bucket.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| {
                if trimmed.is_empty() {
                    TypeConstraintError::EmptyString
                } else {
                    TypeConstraintError::InvalidValue(trimmed.to_string())
                }
            })
    }
}

impl Display for StopDurationBucket {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Driver age within the accepted range.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct DriverAge(i32);

impl DriverAge {
    pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
        if (MIN_DRIVER_AGE..=MAX_DRIVER_AGE).contains(&value) {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::AgeOutOfRange)
        }
    }

    pub const fn get(self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for DriverAge {
    type Error = TypeConstraintError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl Display for DriverAge {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_accepts_short_and_long_forms() {
        assert_eq!("M".parse::<Gender>(), Ok(Gender::Male));
        assert_eq!(" female ".parse::<Gender>(), Ok(Gender::Female));
        assert_eq!("".parse::<Gender>(), Err(TypeConstraintError::EmptyString));
        assert!(matches!(
            "other".parse::<Gender>(),
            Err(TypeConstraintError::InvalidValue(_))
        ));
    }

    #[test]
    fn yes_no_parses_form_and_csv_values() {
        assert_eq!("Yes".parse::<YesNo>(), Ok(YesNo::Yes));
        assert_eq!("FALSE".parse::<YesNo>(), Ok(YesNo::No));
        assert_eq!("1".parse::<YesNo>(), Ok(YesNo::Yes));
        assert!("maybe".parse::<YesNo>().is_err());
    }

    #[test]
    fn stop_duration_bucket_matches_labels() {
        for bucket in StopDurationBucket::ALL {
            assert_eq!(bucket.as_str().parse::<StopDurationBucket>(), Ok(bucket));
        }
        assert_eq!(
            "30+ min".parse::<StopDurationBucket>(),
            Ok(StopDurationBucket::Over30)
        );
        assert!("2 hours".parse::<StopDurationBucket>().is_err());
    }

    #[test]
    fn driver_age_enforces_bounds() {
        assert!(DriverAge::new(15).is_err());
        assert_eq!(DriverAge::new(16).map(DriverAge::get), Ok(16));
        assert_eq!(DriverAge::new(100).map(DriverAge::get), Ok(100));
        assert_eq!(DriverAge::new(101), Err(TypeConstraintError::AgeOutOfRange));
    }
}
