use serde::Deserialize;
use serde::Serialize;

/// Successful prediction: one species label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    pub prediction: String,
}

/// Static greeting served at the root route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Greeting {
    pub message: String,
}
