//! Classifiers turn an uploaded image into a label and a confidence.

/// Raw classifier output, before the label is mapped to a diagnosis.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub label: String,
    /// Probability of `label`, 0.0 to 1.0.
    pub confidence: f64,
}

pub trait Classifier: Send + Sync {
    fn classify(&self, image: &[u8]) -> Prediction;
}

/// Answers every image with the same label. Stands in for a trained model
/// during local development.
#[derive(Debug, Clone)]
pub struct FixedLabel {
    label: String,
    confidence: f64,
}

impl FixedLabel {
    /// `confidence` is clamped to 0.0..=1.0.
    pub fn new(label: impl Into<String>, confidence: f64) -> Self {
        Self {
            label: label.into(),
            confidence: confidence.clamp(0.0, 1.0),
        }
    }
}

impl Classifier for FixedLabel {
    fn classify(&self, _image: &[u8]) -> Prediction {
        Prediction {
            label: self.label.clone(),
            confidence: self.confidence,
        }
    }
}
