//! Candidate URL reconstruction.

use crate::reduce::decomposition::UrlDecomposition;
use crate::reduce::enablement::EnablementState;

/// Build the URL selected by `state`.
///
/// The root domain is always present. A disabled path collapses to `/`, and
/// the query is only appended when it is enabled and non-empty.
///
/// # Panics
///
/// Panics if `state` was not derived from `decomposition` (the label counts
/// differ).
pub fn reconstruct(decomposition: &UrlDecomposition, state: &EnablementState) -> String {
    assert_eq!(
        decomposition.sub_domains.len(),
        state.sub_domain_enabled().len(),
        "enablement state does not belong to this decomposition"
    );

    let mut url = format!("{}://", decomposition.scheme);

    for (label, enabled) in decomposition
        .sub_domains
        .iter()
        .zip(state.sub_domain_enabled())
    {
        if *enabled {
            url.push_str(label);
            url.push('.');
        }
    }

    url.push_str(&decomposition.root_domain);

    if state.path_enabled() {
        url.push_str(decomposition.effective_path());
    } else {
        url.push('/');
    }

    if state.query_enabled() {
        if let Some(query) = decomposition.effective_query() {
            url.push('?');
            url.push_str(query);
        }
    }

    url
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reduce::enablement::Toggle;

    fn example() -> UrlDecomposition {
        UrlDecomposition {
            scheme: "http".into(),
            sub_domains: vec!["www".into(), "api".into()],
            root_domain: "example.com".into(),
            path: Some("/v1/status".into()),
            query: Some("id=5".into()),
        }
    }

    #[test]
    fn test_reduction_walkthrough() {
        let decomposition = example();
        let state = EnablementState::for_decomposition(&decomposition);
        assert_eq!(reconstruct(&decomposition, &state), "http://www.api.example.com/");

        let state = state.toggled(Toggle::Path { enabled: true });
        assert_eq!(reconstruct(&decomposition, &state), "http://www.api.example.com/v1/status");
        assert_eq!(state.sub_domain_enabled(), &[true, true]);
        assert!(state.path_enabled());

        let state = state.toggled(Toggle::Query { enabled: true });
        assert_eq!(reconstruct(&decomposition, &state), "http://www.api.example.com/v1/status?id=5");
        assert!(state.path_enabled());

        let state = state.toggled(Toggle::SubDomain { index: 0, enabled: false });
        assert_eq!(state.sub_domain_enabled(), &[false, true]);
        assert!(!state.path_enabled());
        assert!(!state.query_enabled());
        assert_eq!(reconstruct(&decomposition, &state), "http://api.example.com/");

        let state = state.toggled(Toggle::SubDomain { index: 1, enabled: false });
        assert_eq!(state.sub_domain_enabled(), &[false, false]);
        assert_eq!(reconstruct(&decomposition, &state), "http://example.com/");
    }

    #[test]
    fn test_disable_query_keeps_path() {
        let decomposition = example();
        let state = EnablementState::for_decomposition(&decomposition)
            .toggled(Toggle::Query { enabled: true })
            .toggled(Toggle::Query { enabled: false });

        assert_eq!(reconstruct(&decomposition, &state), "http://www.api.example.com/v1/status");
    }

    #[test]
    fn test_root_domain_only() {
        let decomposition = UrlDecomposition {
            scheme: "https".into(),
            sub_domains: vec![],
            root_domain: "example.org".into(),
            path: None,
            query: None,
        };
        let state = EnablementState::for_decomposition(&decomposition);
        assert_eq!(reconstruct(&decomposition, &state), "https://example.org/");

        // Nothing to append even when switched on.
        let state = state.toggled(Toggle::Query { enabled: true });
        assert_eq!(reconstruct(&decomposition, &state), "https://example.org/");
    }

    #[test]
    #[should_panic(expected = "does not belong")]
    fn test_mismatched_state_panics() {
        let decomposition = example();
        let state = EnablementState::with_sub_domains(3);
        reconstruct(&decomposition, &state);
    }
}
