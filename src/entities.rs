use serde::Deserialize;

use crate::media::Media;

/// The `entities` sub-mapping of a status payload: structured spans parsed
/// out of the status text, each carrying the character-offset pair it covers.
///
/// A status decoded without this mapping at all is distinguishable from one
/// that carries an empty mapping; [`Status`](crate::status::Status) raises an
/// advisory only in the former case.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Entities {
    #[serde(default)]
    pub hashtags: Vec<Hashtag>,
    #[serde(default)]
    pub urls: Vec<UrlEntity>,
    #[serde(default)]
    pub user_mentions: Vec<UserMention>,
    #[serde(default)]
    pub media: Vec<Media>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Hashtag {
    pub text: String,
    pub indices: (usize, usize),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UrlEntity {
    pub url: String,
    pub expanded_url: Option<String>,
    pub display_url: Option<String>,
    pub indices: (usize, usize),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserMention {
    pub id: Option<u64>,
    pub screen_name: String,
    pub name: Option<String>,
    pub indices: (usize, usize),
}
