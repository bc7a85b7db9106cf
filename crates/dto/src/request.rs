use serde::Deserialize;
use serde::Serialize;

/// Measurements for a single flower, in centimeters. All fields are
/// required; there are no defaults and no range checks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PredictRequest {
    pub sepal_length: f64,
    pub sepal_width: f64,
    pub petal_length: f64,
    pub petal_width: f64,
}

impl From<PredictRequest> for [f64; 4] {
    fn from(req: PredictRequest) -> Self {
        [
            req.sepal_length,
            req.sepal_width,
            req.petal_length,
            req.petal_width,
        ]
    }
}
