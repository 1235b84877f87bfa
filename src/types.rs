use serde::{Deserialize, Serialize};

/// One row of already-encoded features. The caller is trusted to supply them
/// in the same column order the model was trained on.
#[derive(Debug, Deserialize)]
pub struct PredictionRequest {
    pub features: Vec<f32>,
}

#[derive(Debug, Serialize)]
pub struct PredictionResponse {
    pub prediction_code: i64,
    pub prediction_label: String,
    pub message: String,
}

impl PredictionResponse {
    pub fn new(code: i64, label: RiskLabel) -> Self {
        PredictionResponse {
            prediction_code: code,
            prediction_label: label.as_str().to_string(),
            message: "Prediction successful.".to_string(),
        }
    }
}

/// Error body shape shared by all failure responses.
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub detail: String,
}

impl ErrorDetail {
    pub fn new(detail: impl Into<String>) -> Self {
        ErrorDetail {
            detail: detail.into(),
        }
    }
}

/// The two classes the credit model emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLabel {
    Good,
    Bad,
}

impl RiskLabel {
    /// Maps a raw class code to its label. Codes outside {0, 1} have no
    /// label; the caller decides how to surface that.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(RiskLabel::Good),
            1 => Some(RiskLabel::Bad),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLabel::Good => "Good Credit Risk",
            RiskLabel::Bad => "Bad Credit Risk",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ModelInfo {
    pub input_arity: usize,
    pub labels: Vec<&'static str>,
    pub artifact_path: &'static str,
}
