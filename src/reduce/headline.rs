//! Headline advisory derived from the analyzer's meta flags.

use serde::Serialize;

/// How prominently a headline should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeadlineSeverity {
    /// The URL cannot be used at all.
    Blocking,
    /// The URL is usable but suspicious.
    Warning,
}

/// A single advisory message about the analyzed URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Headline {
    pub message: &'static str,
    pub severity: HeadlineSeverity,
}

/// Pick the first matching advisory: invalid, then not public, then IPv4.
pub fn headline(is_valid: bool, is_public: bool, is_ipv4: bool) -> Option<Headline> {
    if !is_valid {
        Some(Headline {
            message: "This URL is not valid",
            severity: HeadlineSeverity::Blocking,
        })
    } else if !is_public {
        Some(Headline {
            message: "This URL is not publicly accessible",
            severity: HeadlineSeverity::Blocking,
        })
    } else if is_ipv4 {
        Some(Headline {
            message: "This URL appears to be an IP address",
            severity: HeadlineSeverity::Warning,
        })
    } else {
        None
    }
}
