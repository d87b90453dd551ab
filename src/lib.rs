//! Client-side data models for the Twitter REST API.
//!
//! This crate interprets already-decoded JSON payloads into typed values:
//! statuses with derived-field accessors, cursors for paginated list
//! endpoints, and the supporting user / entity / media / geo / place types.
//! It performs no transport work of its own except for the single
//! `statuses/oembed.json` call exposed through [`ApiClient`].
//!
//! ```
//! use suzume::Status;
//!
//! let status: Status = serde_json::from_value(serde_json::json!({
//!     "id": 28669546014_u64,
//!     "retweeted_status": {
//!         "id": 28561922516_u64,
//!         "text": "BOOSH",
//!         "user": {"id": 7505382, "screen_name": "sferik"},
//!     },
//! })).unwrap();
//! assert_eq!(status.full_text().as_deref(), Some("RT @sferik: BOOSH"));
//!
//! let (hashtags, advisory) = status.hashtags();
//! assert!(hashtags.is_empty());
//! advisory.unwrap().emit(); // routes the diagnostic to the log sink
//! ```

pub mod advisory;
pub mod api;
pub mod config;
pub mod cursor;
pub mod entities;
pub mod error;
pub mod geo;
pub mod media;
pub mod metadata;
pub mod oembed;
pub mod place;
pub mod status;
pub mod user;

pub use advisory::{Advisory, Feature};
pub use api::ApiClient;
pub use config::Config;
pub use cursor::Cursor;
pub use entities::{Entities, Hashtag, UrlEntity, UserMention};
pub use error::Error;
pub use geo::{Geo, Point};
pub use media::Media;
pub use metadata::Metadata;
pub use oembed::OEmbed;
pub use place::Place;
pub use status::Status;
pub use user::User;
