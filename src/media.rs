use std::collections::HashMap;

use serde::Deserialize;

/// A media entity, polymorphic over the payload's `type` discriminator.
///
/// A discriminator this crate does not know decodes as [`Media::Unknown`]
/// rather than failing the enclosing status.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Media {
    Photo(Photo),
    Video(Video),
    AnimatedGif(AnimatedGif),
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Photo {
    pub id: Option<u64>,
    pub indices: Option<(usize, usize)>,
    pub media_url: Option<String>,
    pub media_url_https: Option<String>,
    pub url: Option<String>,
    pub display_url: Option<String>,
    pub expanded_url: Option<String>,
    #[serde(default)]
    pub sizes: HashMap<String, MediaSize>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Video {
    pub id: Option<u64>,
    pub indices: Option<(usize, usize)>,
    pub media_url: Option<String>,
    pub media_url_https: Option<String>,
    pub url: Option<String>,
    pub display_url: Option<String>,
    pub expanded_url: Option<String>,
    #[serde(default)]
    pub sizes: HashMap<String, MediaSize>,
    pub video_info: Option<VideoInfo>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnimatedGif {
    pub id: Option<u64>,
    pub indices: Option<(usize, usize)>,
    pub media_url: Option<String>,
    pub media_url_https: Option<String>,
    pub url: Option<String>,
    pub display_url: Option<String>,
    pub expanded_url: Option<String>,
    #[serde(default)]
    pub sizes: HashMap<String, MediaSize>,
    pub video_info: Option<VideoInfo>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct MediaSize {
    pub w: u32,
    pub h: u32,
    pub resize: Option<ResizeMode>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeMode {
    Crop,
    Fit,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VideoInfo {
    #[serde(default)]
    pub aspect_ratio: Vec<u32>,
    pub duration_millis: Option<u64>,
    #[serde(default)]
    pub variants: Vec<VideoVariant>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VideoVariant {
    pub bitrate: Option<u64>,
    pub content_type: Option<String>,
    pub url: String,
}
