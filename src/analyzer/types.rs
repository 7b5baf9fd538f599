//! Analyzer response types.
//!
//! Mirrors the JSON document returned by `GET /ui/api/analyze`. Only the
//! fields the UI consumes are modelled; anything else is ignored.

use serde::{Deserialize, Serialize};

use crate::reduce::UrlDecomposition;

/// A complete analysis of one URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub meta: AnalysisMeta,

    pub links: AnalysisLinks,

    /// Structural breakdown of the URL.
    pub attributes: UrlDecomposition,

    #[serde(default)]
    pub relationships: Relationships,
}

impl Analysis {
    /// The raw URL this analysis describes. Used as its identity.
    pub fn raw_url(&self) -> &str {
        &self.links.raw
    }

    pub fn detections(&self) -> impl Iterator<Item = &Detection> {
        self.relationships
            .detections
            .data
            .iter()
            .map(|record| &record.attributes)
    }

    /// A URL with no detections is already allowed.
    pub fn is_allowed(&self) -> bool {
        self.relationships.detections.data.is_empty()
    }
}

/// Classification flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisMeta {
    #[serde(rename = "isValid")]
    pub is_valid: bool,

    #[serde(rename = "isPublic")]
    pub is_public: bool,

    #[serde(rename = "isIPv4")]
    pub is_ipv4: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisLinks {
    pub raw: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationships {
    #[serde(default)]
    pub detections: DetectionList,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionList {
    #[serde(default)]
    pub data: Vec<DetectionRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionRecord {
    pub attributes: Detection,
}

/// One block list hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detection {
    pub source: Source,
    pub reason: Reason,
}

/// Where a rule hit came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", rename_all = "snake_case")]
pub enum Source {
    UrlHaus,
    BlockList,
    AllowList,
    Other,
}

impl From<String> for Source {
    fn from(value: String) -> Self {
        match value.trim() {
            "url_haus" => Source::UrlHaus,
            "block_list" => Source::BlockList,
            "allow_list" => Source::AllowList,
            _ => Source::Other,
        }
    }
}

/// Why a URL was flagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", rename_all = "kebab-case")]
pub enum Reason {
    /// Actively hostile content.
    Malicious,
    /// The content owner asked for a block.
    PublisherBlocked,
    MediaVideo,
    MediaAudio,
    MediaImage,
    MediaMixed,
    /// Highly interactive sites.
    HighIo,
    #[serde(rename = "not-explicitly-allowed")]
    NotAllowed,
    Other,
}

impl From<String> for Reason {
    fn from(value: String) -> Self {
        match value.trim() {
            "malicious" => Reason::Malicious,
            "publisher-blocked" => Reason::PublisherBlocked,
            "media-video" => Reason::MediaVideo,
            "media-audio" => Reason::MediaAudio,
            "media-image" => Reason::MediaImage,
            "media-mixed" => Reason::MediaMixed,
            "high-io" => Reason::HighIo,
            "not-explicitly-allowed" => Reason::NotAllowed,
            _ => Reason::Other,
        }
    }
}

impl Reason {
    pub fn severity(&self) -> Severity {
        match self {
            Reason::Malicious | Reason::PublisherBlocked => Severity::Mandatory,
            _ => Severity::Advisory,
        }
    }
}

/// How strictly a detection must be enforced. Ordered by strictness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Services may block at their discretion.
    Advisory,
    /// Every service must block.
    Mandatory,
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"{
        "meta": {"isValid": true, "isPublic": true, "isIPv4": false},
        "links": {"raw": "http://www.api.example.com/v1/status?id=5"},
        "attributes": {
            "scheme": "http",
            "subDomains": ["www", "api"],
            "rootDomain": "example.com",
            "path": "/v1/status",
            "query": "id=5"
        },
        "relationships": {
            "detections": {
                "data": [
                    {"type": "detection", "attributes": {"source": "url_haus", "reason": "malicious"}},
                    {"attributes": {"source": "custom", "reason": " media-video "}}
                ]
            }
        }
    }"#;

    #[test]
    fn test_parse_analysis() {
        let analysis: Analysis = serde_json::from_str(PAYLOAD).unwrap();

        assert_eq!(analysis.raw_url(), "http://www.api.example.com/v1/status?id=5");
        assert!(analysis.meta.is_valid);
        assert!(!analysis.meta.is_ipv4);
        assert_eq!(analysis.attributes.sub_domains, vec!["www", "api"]);
        assert!(!analysis.is_allowed());

        let detections: Vec<_> = analysis.detections().copied().collect();
        assert_eq!(
            detections,
            vec![
                Detection { source: Source::UrlHaus, reason: Reason::Malicious },
                Detection { source: Source::Other, reason: Reason::MediaVideo },
            ]
        );
    }

    #[test]
    fn test_missing_relationships_means_allowed() {
        let json = r#"{
            "meta": {"isValid": true, "isPublic": true, "isIPv4": false},
            "links": {"raw": "http://example.com"},
            "attributes": {"scheme": "http", "subDomains": [], "rootDomain": "example.com"}
        }"#;

        let analysis: Analysis = serde_json::from_str(json).unwrap();
        assert!(analysis.is_allowed());
    }

    #[test]
    fn test_reason_severity() {
        assert_eq!(Reason::Malicious.severity(), Severity::Mandatory);
        assert_eq!(Reason::PublisherBlocked.severity(), Severity::Mandatory);
        assert_eq!(Reason::NotAllowed.severity(), Severity::Advisory);
        assert_eq!(Reason::from("nonsense".to_string()), Reason::Other);
        assert!(Severity::Advisory < Severity::Mandatory);
    }

    #[test]
    fn test_serialize_uses_wire_names() {
        let detection = Detection { source: Source::BlockList, reason: Reason::NotAllowed };
        let json = serde_json::to_value(detection).unwrap();
        assert_eq!(json["source"], "block_list");
        assert_eq!(json["reason"], "not-explicitly-allowed");
    }
}
