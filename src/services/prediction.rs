use rand::Rng;
use rand::seq::IndexedRandom;

use crate::domain::prediction::{PoliceLogEntry, PredictedOutcome, PredictedViolation, Prediction};
use crate::dto::prediction::PredictionPageData;
use crate::forms::prediction::PoliceLogForm;
use crate::services::{ServiceError, ServiceResult};

/// Picks a violation and an outcome uniformly at random.
///
/// There is no model behind this: the entry only feeds the narrative.
pub fn predict<G>(entry: &PoliceLogEntry, rng: &mut G) -> ServiceResult<Prediction>
where
    G: Rng + ?Sized,
{
    let violation = PredictedViolation::ALL
        .choose(rng)
        .copied()
        .ok_or_else(|| ServiceError::Internal("no violations to choose from".to_string()))?;
    let outcome = PredictedOutcome::ALL
        .choose(rng)
        .copied()
        .ok_or_else(|| ServiceError::Internal("no outcomes to choose from".to_string()))?;

    Ok(Prediction::new(entry, violation, outcome))
}

/// Validates the police-log form and produces a prediction for it.
pub fn predict_stop<G>(form: PoliceLogForm, rng: &mut G) -> ServiceResult<PredictionPageData>
where
    G: Rng + ?Sized,
{
    let entry = PoliceLogEntry::try_from(form).map_err(|err| {
        log::error!("Failed to validate police log form: {err}");
        ServiceError::Form(format!("Invalid police log entry: {err}"))
    })?;

    let prediction = predict(&entry, rng)?;
    log::info!(
        "Predicted {} / {} for vehicle {}",
        prediction.violation.as_str(),
        prediction.outcome.as_str(),
        entry.vehicle_number
    );

    Ok(PredictionPageData { entry, prediction })
}
