//! The UI surface handlers render into.
//!
//! Handlers never print or navigate themselves; they call a [`View`]. The CLI
//! renders to the terminal, tests use [`RecordingView`].

use std::time::Duration;

use crate::{client::Upload, diagnosis::Diagnosis};

/// Delay between a successful sign-up and the redirect to the login page.
pub const SIGNUP_REDIRECT_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
    Error,
}

/// Message containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Signup,
    Login,
    Welcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Signup,
    Login,
    Predict,
}

impl Page {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Signup => "signup",
            Self::Login => "login",
            Self::Predict => "predict",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Redirect {
    pub page: Page,
    pub delay: Duration,
}

impl Redirect {
    #[must_use]
    pub const fn now(page: Page) -> Self {
        Self {
            page,
            delay: Duration::ZERO,
        }
    }

    #[must_use]
    pub const fn after(page: Page, delay: Duration) -> Self {
        Self { page, delay }
    }
}

/// Content of the prediction result area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultArea {
    Notice(String),
    Loading,
    Diagnosis(Diagnosis),
}

impl ResultArea {
    /// Plain-text rendering of the area.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Notice(text) => text.clone(),
            Self::Loading => "Analyzing image...".to_string(),
            Self::Diagnosis(d) => format!(
                "Prediction Result\n\
                 Plant: {}\n\
                 Disease: {}\n\
                 Confidence: {}\n\
                 Cause: {}\n\
                 Remedy: {}",
                d.plant, d.disease, d.confidence, d.cause, d.remedy
            ),
        }
    }
}

pub trait View {
    /// Replace the text of a message container.
    fn message(&mut self, region: Region, text: &str, tone: Tone);

    /// Show or hide the protected predict container.
    fn set_protected_visible(&mut self, visible: bool);

    /// Show a local preview of the selected file.
    fn preview(&mut self, upload: &Upload);

    /// Replace the content of the result area.
    fn result(&mut self, area: ResultArea);

    /// Bring the result area into view.
    fn reveal_result(&mut self) {}

    fn navigate(&mut self, redirect: Redirect);
}

/// A view that records every call.
#[derive(Debug, Default)]
pub struct RecordingView {
    pub messages: Vec<(Region, String, Tone)>,
    pub protected_visible: Option<bool>,
    pub previews: Vec<String>,
    pub results: Vec<ResultArea>,
    pub revealed: bool,
    pub redirects: Vec<Redirect>,
}

impl RecordingView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last message shown in `region`.
    #[must_use]
    pub fn last_message(&self, region: Region) -> Option<(&str, Tone)> {
        self.messages
            .iter()
            .rev()
            .find(|(r, _, _)| *r == region)
            .map(|(_, text, tone)| (text.as_str(), *tone))
    }

    /// Current rendering of the result area.
    #[must_use]
    pub fn result_text(&self) -> Option<String> {
        self.results.last().map(ResultArea::render)
    }
}

impl View for RecordingView {
    fn message(&mut self, region: Region, text: &str, tone: Tone) {
        self.messages.push((region, text.to_string(), tone));
    }

    fn set_protected_visible(&mut self, visible: bool) {
        self.protected_visible = Some(visible);
    }

    fn preview(&mut self, upload: &Upload) {
        self.previews.push(upload.file_name.clone());
    }

    fn result(&mut self, area: ResultArea) {
        self.results.push(area);
    }

    fn reveal_result(&mut self) {
        self.revealed = true;
    }

    fn navigate(&mut self, redirect: Redirect) {
        self.redirects.push(redirect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_diagnosis() {
        let area = ResultArea::Diagnosis(Diagnosis {
            plant: "Tomato".to_string(),
            disease: "Leaf Mold".to_string(),
            confidence: "88.10%".to_string(),
            cause: "Humidity".to_string(),
            remedy: "Ventilate".to_string(),
        });

        let text = area.render();
        assert!(text.starts_with("Prediction Result"));
        assert!(text.contains("Plant: Tomato"));
        assert!(text.contains("Disease: Leaf Mold"));
        assert!(text.contains("Confidence: 88.10%"));
        assert!(text.contains("Cause: Humidity"));
        assert!(text.contains("Remedy: Ventilate"));
    }

    #[test]
    fn test_last_message_per_region() {
        let mut view = RecordingView::new();
        view.message(Region::Login, "first", Tone::Error);
        view.message(Region::Signup, "other", Tone::Success);
        view.message(Region::Login, "second", Tone::Info);

        assert_eq!(view.last_message(Region::Login), Some(("second", Tone::Info)));
        assert_eq!(view.last_message(Region::Welcome), None);
    }
}
