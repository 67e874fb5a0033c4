//! Terminal rendering of the UI surface.

use crate::{
    client::Upload,
    view::{Page, Redirect, Region, ResultArea, Tone, View},
};
use console::{style, Emoji};
use tracing::debug;

static LOADING: Emoji<'_, '_> = Emoji("⏳ ", "");
static LEAF: Emoji<'_, '_> = Emoji("🌿 ", "");
static LOCK: Emoji<'_, '_> = Emoji("🔒 ", "");
static CHECK: Emoji<'_, '_> = Emoji("✅ ", "");
static CROSS: Emoji<'_, '_> = Emoji("❌ ", "");
static NONE: Emoji<'_, '_> = Emoji("", "");

/// Prints to stdout. Redirects are held until [`TerminalView::follow_redirect`].
#[derive(Debug, Default)]
pub struct TerminalView {
    pending: Option<Redirect>,
    authenticated: bool,
}

impl TerminalView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait out the pending redirect, then print the command for the next page.
    pub async fn follow_redirect(&mut self) {
        let Some(redirect) = self.pending.take() else {
            return;
        };

        debug!("redirecting to {} in {:?}", redirect.page.as_str(), redirect.delay);

        if !redirect.delay.is_zero() {
            tokio::time::sleep(redirect.delay).await;
        }

        let hint = match redirect.page {
            Page::Signup => "leafdoc signup --name <NAME> --email <EMAIL>",
            Page::Login => "leafdoc login --email <EMAIL>",
            Page::Predict => "leafdoc predict <IMAGE>",
        };
        println!("{} {}", style("Next:").dim(), style(hint).bold());
    }
}

impl View for TerminalView {
    fn message(&mut self, region: Region, text: &str, tone: Tone) {
        let prefix = match (region, self.authenticated) {
            (Region::Welcome, true) => &LEAF,
            (Region::Welcome, false) => &LOCK,
            _ => &NONE,
        };

        match tone {
            Tone::Info => println!("{prefix}{text}"),
            Tone::Success => println!("{prefix}{}", style(text).green()),
            Tone::Error => println!("{prefix}{}", style(text).red()),
        }
    }

    fn set_protected_visible(&mut self, visible: bool) {
        self.authenticated = visible;
    }

    fn preview(&mut self, upload: &Upload) {
        println!(
            "{}",
            style(format!(
                "Preview: {} ({}, {} bytes)",
                upload.file_name,
                upload.content_type,
                upload.bytes.len()
            ))
            .dim()
        );
    }

    fn result(&mut self, area: ResultArea) {
        match &area {
            ResultArea::Loading => println!("{LOADING}{}", area.render()),
            ResultArea::Notice(text) => println!("{CROSS}{}", style(text).red()),
            ResultArea::Diagnosis(_) => println!("{CHECK}{}", area.render()),
        }
    }

    fn navigate(&mut self, redirect: Redirect) {
        self.pending = Some(redirect);
    }
}
