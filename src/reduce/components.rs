//! Render-ready list of URL parts.
//!
//! Rebuilt from the current state on every call; nothing here is cached
//! between toggles.

use serde::Serialize;

use crate::reduce::decomposition::UrlDecomposition;
use crate::reduce::enablement::{EnablementState, Toggle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ComponentKind {
    SubDomain,
    Domain,
    Path,
    Query,
}

impl ComponentKind {
    /// Short caption shown under the value.
    pub fn label(&self) -> &'static str {
        match self {
            ComponentKind::SubDomain => "sub",
            ComponentKind::Domain => "domain",
            ComponentKind::Path => "path",
            ComponentKind::Query => "query",
        }
    }
}

/// One URL part as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    pub kind: ComponentKind,
    pub label: &'static str,
    pub value: String,
    pub enabled: bool,
    pub fixed: bool,
    /// What clicking this part does; `None` for fixed parts.
    pub on_click: Option<Toggle>,
}

impl Component {
    fn toggleable(kind: ComponentKind, value: String, enabled: bool, toggle: Toggle) -> Self {
        Self {
            kind,
            label: kind.label(),
            value,
            enabled,
            fixed: false,
            on_click: Some(toggle),
        }
    }

    fn fixed(kind: ComponentKind, value: String) -> Self {
        Self {
            kind,
            label: kind.label(),
            value,
            enabled: true,
            fixed: true,
            on_click: None,
        }
    }
}

/// List every part of the URL in display order.
///
/// # Panics
///
/// Panics if `state` was not derived from `decomposition`.
pub fn components(decomposition: &UrlDecomposition, state: &EnablementState) -> Vec<Component> {
    assert_eq!(
        decomposition.sub_domains.len(),
        state.sub_domain_enabled().len(),
        "enablement state does not belong to this decomposition"
    );

    let mut parts = Vec::with_capacity(decomposition.sub_domains.len() + 3);

    for (index, (label, enabled)) in decomposition
        .sub_domains
        .iter()
        .zip(state.sub_domain_enabled())
        .enumerate()
    {
        parts.push(Component::toggleable(
            ComponentKind::SubDomain,
            format!("{}.", label),
            *enabled,
            Toggle::SubDomain {
                index,
                enabled: !enabled,
            },
        ));
    }

    parts.push(Component::fixed(
        ComponentKind::Domain,
        decomposition.root_domain.clone(),
    ));

    let path = decomposition.effective_path();
    if path == "/" {
        parts.push(Component::fixed(ComponentKind::Path, path.to_string()));
    } else {
        parts.push(Component::toggleable(
            ComponentKind::Path,
            path.to_string(),
            state.path_enabled(),
            Toggle::Path {
                enabled: !state.path_enabled(),
            },
        ));
    }

    if let Some(query) = decomposition.effective_query() {
        parts.push(Component::toggleable(
            ComponentKind::Query,
            format!("?{}", query),
            state.query_enabled(),
            Toggle::Query {
                enabled: !state.query_enabled(),
            },
        ));
    }

    parts
}
