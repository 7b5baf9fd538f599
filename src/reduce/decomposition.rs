//! Structural breakdown of an analyzed URL.

use serde::{Deserialize, Serialize};

/// The parts of a URL as reported by the analyzer.
///
/// Sub-domains are ordered outermost first: for `www.api.example.com` with
/// root domain `example.com` this is `["www", "api"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlDecomposition {
    pub scheme: String,

    #[serde(default)]
    pub sub_domains: Vec<String>,

    pub root_domain: String,

    /// Absent or empty means the URL has no path beyond `/`.
    #[serde(default)]
    pub path: Option<String>,

    /// Query string without the leading `?`.
    #[serde(default)]
    pub query: Option<String>,
}

impl UrlDecomposition {
    /// The path to emit when the path is switched on.
    pub fn effective_path(&self) -> &str {
        match self.path.as_deref() {
            Some(path) if !path.is_empty() => path,
            _ => "/",
        }
    }

    /// The query, if there is a non-empty one.
    pub fn effective_query(&self) -> Option<&str> {
        self.query.as_deref().filter(|q| !q.is_empty())
    }
}
