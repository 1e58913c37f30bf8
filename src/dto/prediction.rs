use crate::domain::prediction::{PoliceLogEntry, Prediction};

/// Data required to render the prediction summary.
#[derive(Debug)]
pub struct PredictionPageData {
    pub entry: PoliceLogEntry,
    pub prediction: Prediction,
}
