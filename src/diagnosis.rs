//! Diagnosis payload and the label catalog behind it.
//!
//! A classifier label such as `Tomato___Septoria_leaf_spot` is read
//! case-insensitively with underscores as spaces; the first matching plant
//! and disease keyword wins.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Prediction response body. Every field is an opaque display string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnosis {
    #[serde(deserialize_with = "display_string")]
    pub plant: String,
    #[serde(deserialize_with = "display_string")]
    pub disease: String,
    #[serde(deserialize_with = "display_string")]
    pub confidence: String,
    #[serde(deserialize_with = "display_string")]
    pub cause: String,
    #[serde(deserialize_with = "display_string")]
    pub remedy: String,
}

// Accept any JSON scalar and keep its textual form.
fn display_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plant {
    Brinjal,
    BellPepper,
    Tomato,
    Unknown,
}

impl fmt::Display for Plant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Brinjal => "Brinjal",
            Self::BellPepper => "Bell Pepper",
            Self::Tomato => "Tomato",
            Self::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disease {
    Healthy,
    CercosporaLeafSpot,
    BacterialSpot,
    LeafMold,
    SeptoriaLeafSpot,
    PowderyMildew,
    Unknown,
}

impl Disease {
    /// Cause and remedy text for the disease.
    #[must_use]
    pub const fn details(self) -> (&'static str, &'static str) {
        match self {
            Self::CercosporaLeafSpot => (
                "Fungal disease caused by Cercospora species. Spreads in humid conditions.",
                "Remove infected leaves and spray fungicide like Mancozeb.",
            ),
            Self::BacterialSpot => (
                "Caused by Xanthomonas bacteria. Spread via water splash and tools.",
                "Use copper-based bactericide and disease-free seeds.",
            ),
            Self::LeafMold => (
                "Fungal disease due to high humidity and poor air circulation.",
                "Improve ventilation and apply recommended fungicides.",
            ),
            Self::SeptoriaLeafSpot => (
                "Fungal infection spread through rain splash.",
                "Remove affected leaves and spray fungicide.",
            ),
            Self::PowderyMildew => (
                "Fungal disease common in warm and dry weather.",
                "Apply sulfur-based fungicide and prune infected parts.",
            ),
            Self::Healthy => (
                "No disease detected.",
                "Maintain proper watering, nutrients, and sunlight.",
            ),
            Self::Unknown => (
                "Information not available.",
                "Consult agricultural expert.",
            ),
        }
    }
}

impl fmt::Display for Disease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Healthy => "Healthy",
            Self::CercosporaLeafSpot => "Cercospora Leaf Spot",
            Self::BacterialSpot => "Bacterial Spot",
            Self::LeafMold => "Leaf Mold",
            Self::SeptoriaLeafSpot => "Septoria Leaf Spot",
            Self::PowderyMildew => "Powdery Mildew",
            Self::Unknown => "Unknown Disease",
        };
        f.write_str(name)
    }
}

fn normalize(label: &str) -> String {
    label.replace('_', " ").to_lowercase()
}

/// Plant and disease named by a classifier label.
#[must_use]
pub fn parse_label(label: &str) -> (Plant, Disease) {
    let clean = normalize(label);

    let plant = if clean.contains("brinjal") {
        Plant::Brinjal
    } else if clean.contains("pepper") {
        Plant::BellPepper
    } else if clean.contains("tomato") {
        Plant::Tomato
    } else {
        Plant::Unknown
    };

    let disease = if clean.contains("healthy") || clean.contains("fresh") {
        Disease::Healthy
    } else if clean.contains("cercospora") {
        Disease::CercosporaLeafSpot
    } else if clean.contains("bacterial") {
        Disease::BacterialSpot
    } else if clean.contains("leaf mold") {
        Disease::LeafMold
    } else if clean.contains("septoria") {
        Disease::SeptoriaLeafSpot
    } else if clean.contains("powdery") {
        Disease::PowderyMildew
    } else {
        Disease::Unknown
    };

    (plant, disease)
}

/// Build the response for `label` predicted with `confidence` (0.0 to 1.0).
#[must_use]
pub fn diagnose(label: &str, confidence: f64) -> Diagnosis {
    let (plant, disease) = parse_label(label);
    let (cause, remedy) = disease.details();

    Diagnosis {
        plant: plant.to_string(),
        disease: disease.to_string(),
        confidence: format!("{:.2}%", confidence * 100.0),
        cause: cause.to_string(),
        remedy: remedy.to_string(),
    }
}
