//! One user's analysis and URL selection.

use std::time::{Duration, Instant};

use serde::Serialize;

use crate::analyzer::{Analysis, Reason, Severity, Source};
use crate::reduce::{
    apply_toggle, components, headline, reconstruct, Component, EnablementState, Headline, Toggle,
};

/// The latest successful analysis plus the enablement state derived from it.
#[derive(Debug, Clone)]
pub struct Session {
    analysis: Analysis,
    state: EnablementState,
    last_seen: Instant,
}

impl Session {
    /// Start a session with the default selection for `analysis`.
    pub fn new(analysis: Analysis) -> Self {
        let state = EnablementState::for_decomposition(&analysis.attributes);
        Self {
            analysis,
            state,
            last_seen: Instant::now(),
        }
    }

    pub fn analysis(&self) -> &Analysis {
        &self.analysis
    }

    pub fn state(&self) -> &EnablementState {
        &self.state
    }

    /// Mark the session as used just now.
    pub fn touch(&mut self) {
        self.last_seen = Instant::now();
    }

    /// Time since the session was last used.
    pub fn idle_for(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.last_seen)
    }

    /// Swap in a newer analysis.
    ///
    /// The selection is reset when the raw URL changed (or the new
    /// decomposition has a different number of labels); otherwise it is kept.
    /// Returns whether a reset happened.
    pub fn replace_analysis(&mut self, analysis: Analysis) -> bool {
        let reset = analysis.raw_url() != self.analysis.raw_url()
            || analysis.attributes.sub_domains.len() != self.state.sub_domain_enabled().len();

        if reset {
            self.state = EnablementState::for_decomposition(&analysis.attributes);
        }
        self.analysis = analysis;
        reset
    }

    /// Apply one toggle, replacing the state as a whole.
    pub fn toggle(&mut self, toggle: Toggle) -> &EnablementState {
        self.state = apply_toggle(&self.state, toggle);
        &self.state
    }

    /// The URL currently selected.
    pub fn candidate_url(&self) -> String {
        reconstruct(&self.analysis.attributes, &self.state)
    }

    pub fn view(&self) -> SessionView {
        let meta = self.analysis.meta;

        SessionView {
            url: self.analysis.raw_url().to_string(),
            candidate_url: self.candidate_url(),
            headline: headline(meta.is_valid, meta.is_public, meta.is_ipv4),
            allowed: self.analysis.is_allowed(),
            detections: self
                .analysis
                .detections()
                .map(|d| DetectionRow {
                    source: d.source,
                    reason: d.reason,
                    severity: d.reason.severity(),
                })
                .collect(),
            components: components(&self.analysis.attributes, &self.state),
            state: self.state.clone(),
        }
    }
}

/// Everything a client needs to render a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    /// The raw URL that was analyzed.
    pub url: String,
    pub candidate_url: String,
    pub headline: Option<Headline>,
    /// True when nothing flagged the URL.
    pub allowed: bool,
    pub detections: Vec<DetectionRow>,
    pub components: Vec<Component>,
    pub state: EnablementState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionRow {
    pub source: Source,
    pub reason: Reason,
    pub severity: Severity,
}
