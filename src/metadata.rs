use serde::Deserialize;

/// Per-result metadata attached to statuses returned by the search endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Metadata {
    pub result_type: Option<String>,
    pub iso_language_code: Option<String>,
    pub recent_retweets: Option<u64>,
}
