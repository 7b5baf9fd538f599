//! Component enablement state machine.
//!
//! # Responsibilities
//! - Track which sub-domains, path and query are switched on
//! - Apply a toggle and cascade it so the hierarchy stays valid
//!
//! # Rules
//! - A query needs a path; a path needs every sub-domain
//! - Enabled sub-domains always form a suffix (root-ward run) of the labels
//!
//! # Design Decisions
//! - A toggle is evaluated in two stages: direct updates for the toggled part,
//!   then at most one sub-domain cascade shared by every part
//! - Path and query toggles carry no index, so their cascade starts at 0

use serde::{Deserialize, Serialize};

use crate::reduce::decomposition::UrlDecomposition;

/// On/off selection for every toggleable part of one decomposition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnablementState {
    sub_domain_enabled: Vec<bool>,
    path_enabled: bool,
    query_enabled: bool,
}

impl EnablementState {
    /// Default selection for a freshly analyzed URL: full hostname, no path,
    /// no query.
    pub fn for_decomposition(decomposition: &UrlDecomposition) -> Self {
        Self::with_sub_domains(decomposition.sub_domains.len())
    }

    /// Default selection for a hostname with `count` sub-domain labels.
    pub fn with_sub_domains(count: usize) -> Self {
        Self {
            sub_domain_enabled: vec![true; count],
            path_enabled: false,
            query_enabled: false,
        }
    }

    pub fn sub_domain_enabled(&self) -> &[bool] {
        &self.sub_domain_enabled
    }

    pub fn path_enabled(&self) -> bool {
        self.path_enabled
    }

    pub fn query_enabled(&self) -> bool {
        self.query_enabled
    }

    /// Whether the hierarchy rules hold for this selection.
    pub fn is_consistent(&self) -> bool {
        if self.query_enabled && !self.path_enabled {
            return false;
        }

        if self.path_enabled && !self.sub_domain_enabled.iter().all(|on| *on) {
            return false;
        }

        // Once a label is on, every label root-ward of it must be on too.
        self.sub_domain_enabled
            .windows(2)
            .all(|pair| !pair[0] || pair[1])
    }

    /// Return the state that results from applying `toggle`.
    pub fn toggled(&self, toggle: Toggle) -> Self {
        apply_toggle(self, toggle)
    }
}

/// A user request to switch one part on or off.
///
/// On the wire: `{"part": "subDomain" | "path" | "query", "enabled": bool,
/// "index": n}`. `index` is only read for sub-domains and defaults to 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "part", rename_all = "camelCase")]
pub enum Toggle {
    SubDomain {
        #[serde(default)]
        index: usize,
        enabled: bool,
    },
    Path {
        enabled: bool,
    },
    Query {
        enabled: bool,
    },
}

impl Toggle {
    /// The value the user asked for.
    pub fn enabled(&self) -> bool {
        match *self {
            Toggle::SubDomain { enabled, .. }
            | Toggle::Path { enabled }
            | Toggle::Query { enabled } => enabled,
        }
    }

    /// Label for logs and metrics.
    pub fn part_name(&self) -> &'static str {
        match self {
            Toggle::SubDomain { .. } => "subDomain",
            Toggle::Path { .. } => "path",
            Toggle::Query { .. } => "query",
        }
    }

    /// The sub-domain cascade this toggle triggers, if any.
    ///
    /// Switching a path or query on needs the full hostname above it, so it
    /// cascades as a sub-domain enable from the outermost label.
    pub fn cascade(&self) -> Option<Cascade> {
        match *self {
            Toggle::SubDomain { index, enabled } => Some(Cascade { index, enabled }),
            Toggle::Path { enabled: true } | Toggle::Query { enabled: true } => Some(Cascade {
                index: 0,
                enabled: true,
            }),
            Toggle::Path { enabled: false } | Toggle::Query { enabled: false } => None,
        }
    }

    fn apply_direct(&self, state: &mut EnablementState) {
        match *self {
            Toggle::Path { enabled } => {
                state.path_enabled = enabled;
                if !enabled {
                    state.query_enabled = false;
                }
            }
            Toggle::Query { enabled } => {
                state.query_enabled = enabled;
                if enabled {
                    state.path_enabled = true;
                }
            }
            Toggle::SubDomain { .. } => {}
        }
    }
}

/// A sub-domain change that propagates along the label sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cascade {
    pub index: usize,
    pub enabled: bool,
}

impl Cascade {
    /// Apply the cascade, clamping `index` to the label count.
    ///
    /// Enabling switches on `index..` (root-ward). Disabling switches off
    /// `..=index` (outward) and drops path and query with them.
    pub fn apply(self, state: &mut EnablementState) {
        let len = state.sub_domain_enabled.len();

        if self.enabled {
            let start = self.index.min(len);
            state.sub_domain_enabled[start..].fill(true);
        } else {
            state.query_enabled = false;
            state.path_enabled = false;

            let end = self.index.saturating_add(1).min(len);
            state.sub_domain_enabled[..end].fill(false);
        }
    }
}

/// Apply one toggle to `state`, returning the new state.
///
/// Never fails: any toggle on any consistent state yields a consistent state.
pub fn apply_toggle(state: &EnablementState, toggle: Toggle) -> EnablementState {
    let mut next = state.clone();

    toggle.apply_direct(&mut next);
    if let Some(cascade) = toggle.cascade() {
        cascade.apply(&mut next);
    }

    debug_assert!(
        !state.is_consistent() || next.is_consistent(),
        "toggle {:?} broke enablement invariants",
        toggle
    );
    next
}
