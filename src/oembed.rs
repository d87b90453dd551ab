use serde::Deserialize;

/// The oEmbed rendition of a status, as returned by the
/// `statuses/oembed.json` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OEmbed {
    pub author_name: Option<String>,
    pub author_url: Option<String>,
    pub cache_age: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub html: Option<String>,
    pub provider_name: Option<String>,
    pub provider_url: Option<String>,
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub url: Option<String>,
    pub version: Option<String>,
}
