use std::hash::{Hash, Hasher};

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer};

use crate::{
    advisory::{Advisory, Feature},
    api::ApiClient,
    entities::{Entities, Hashtag, UrlEntity, UserMention},
    error::Error,
    geo::{Geo, Point},
    media::Media,
    metadata::Metadata,
    oembed::OEmbed,
    place::Place,
    user::User,
};

/// Timestamp format used by the API, e.g. `Mon Jul 16 12:59:01 +0000 2007`.
const TIMESTAMP_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

/// A single status (tweet) decoded from an API payload.
///
/// Raw fields are kept private; the public surface is the derived accessors,
/// which resolve fallback chains over the raw data and degrade to `None` or
/// an empty sequence when optional data is absent. Identity is the status id:
/// two statuses with the same id compare equal whatever else differs.
#[derive(Debug, Clone, Deserialize)]
pub struct Status {
    id: u64,
    text: Option<String>,
    from_user: Option<String>,
    created_at: Option<String>,
    #[serde(default, deserialize_with = "opt_count")]
    favoriters_count: Option<u64>,
    #[serde(default, deserialize_with = "opt_count")]
    repliers_count: Option<u64>,
    #[serde(default, deserialize_with = "opt_count")]
    retweeters_count: Option<u64>,
    #[serde(default, deserialize_with = "opt_count")]
    retweet_count: Option<u64>,
    entities: Option<Entities>,
    user: Option<User>,
    retweeted_status: Option<Box<Status>>,
    geo: Option<Geo>,
    place: Option<Place>,
    metadata: Option<Metadata>,
    favorited: Option<bool>,
    truncated: Option<bool>,
    source: Option<String>,
    in_reply_to_screen_name: Option<String>,
    in_reply_to_status_id: Option<u64>,
    in_reply_to_user_id: Option<u64>,
}

impl Status {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The raw status text, if the payload carried one.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// The status text with the retweet prefix restored: a retweet with a
    /// known author renders as `RT @{screen_name}: {retweeted text}`, an
    /// authorless retweet falls back to this status's own text.
    pub fn full_text(&self) -> Option<String> {
        if let Some(retweeted) = &self.retweeted_status {
            if let Some(screen_name) = retweeted.user.as_ref().and_then(|u| u.screen_name.as_deref())
            {
                return Some(format!(
                    "RT @{}: {}",
                    screen_name,
                    retweeted.text.as_deref().unwrap_or_default()
                ));
            }
        }
        self.text.clone()
    }

    /// Screen name of the author: the search API's `from_user` field when
    /// present, otherwise the nested user's screen name.
    pub fn from_user(&self) -> Option<&str> {
        self.from_user
            .as_deref()
            .or_else(|| self.user.as_ref().and_then(|u| u.screen_name.as_deref()))
    }

    /// Creation time parsed from the payload timestamp. `Ok(None)` when the
    /// field is absent; a malformed timestamp is a caller error and surfaces
    /// as [`Error::Timestamp`].
    pub fn created_at(&self) -> Result<Option<DateTime<FixedOffset>>, Error> {
        self.created_at
            .as_deref()
            .map(|raw| DateTime::parse_from_str(raw, TIMESTAMP_FORMAT).map_err(Error::from))
            .transpose()
    }

    pub fn favoriters_count(&self) -> Option<u64> {
        self.favoriters_count
    }

    pub fn repliers_count(&self) -> Option<u64> {
        self.repliers_count
    }

    /// Count of retweeters. The canonical `retweeters_count` field wins; the
    /// `retweet_count` alias is consulted only when it is absent.
    pub fn retweeters_count(&self) -> Option<u64> {
        self.retweeters_count.or(self.retweet_count)
    }

    /// The raw entities mapping. `None` means entities were never requested
    /// for this status, which is distinct from a present-but-empty mapping.
    pub fn entities(&self) -> Option<&Entities> {
        self.entities.as_ref()
    }

    pub fn hashtags(&self) -> (&[Hashtag], Option<Advisory>) {
        self.entity_slice(Feature::Hashtags, |e| &e.hashtags)
    }

    pub fn urls(&self) -> (&[UrlEntity], Option<Advisory>) {
        self.entity_slice(Feature::Urls, |e| &e.urls)
    }

    pub fn user_mentions(&self) -> (&[UserMention], Option<Advisory>) {
        self.entity_slice(Feature::UserMentions, |e| &e.user_mentions)
    }

    pub fn media(&self) -> (&[Media], Option<Advisory>) {
        self.entity_slice(Feature::Media, |e| &e.media)
    }

    /// The author, with this status back-filled as the user's `status` when
    /// this status has its own text. The back-filled copy has its `user`
    /// cleared so the reference does not recurse.
    pub fn user(&self) -> Option<User> {
        let mut user = self.user.clone()?;
        if self.text.is_some() {
            let mut backref = self.clone();
            backref.user = None;
            user.status = Some(Box::new(backref));
        }
        Some(user)
    }

    pub fn retweeted_status(&self) -> Option<&Status> {
        self.retweeted_status.as_deref()
    }

    /// The geo point, when the payload carries a `geo` mapping tagged
    /// `"Point"`. Any other tag resolves to `None`.
    pub fn geo(&self) -> Option<&Point> {
        match &self.geo {
            Some(Geo::Point(point)) => Some(point),
            _ => None,
        }
    }

    pub fn place(&self) -> Option<&Place> {
        self.place.as_ref()
    }

    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }

    pub fn favorited(&self) -> Option<bool> {
        self.favorited
    }

    pub fn truncated(&self) -> Option<bool> {
        self.truncated
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn in_reply_to_screen_name(&self) -> Option<&str> {
        self.in_reply_to_screen_name.as_deref()
    }

    pub fn in_reply_to_status_id(&self) -> Option<u64> {
        self.in_reply_to_status_id
    }

    pub fn in_reply_to_user_id(&self) -> Option<u64> {
        self.in_reply_to_user_id
    }

    /// Fetches the oEmbed rendition of this status through the given client.
    pub async fn oembed(&self, client: &ApiClient) -> Result<OEmbed, Error> {
        client.oembed(self.id).await
    }

    fn entity_slice<'a, T>(
        &'a self,
        feature: Feature,
        pick: fn(&'a Entities) -> &'a [T],
    ) -> (&'a [T], Option<Advisory>) {
        match &self.entities {
            Some(entities) => (pick(entities), None),
            None => (&[], Some(Advisory::missing_entities(feature))),
        }
    }
}

impl PartialEq for Status {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Status {}

impl Hash for Status {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Count fields arrive as either JSON strings or numbers depending on the
/// endpoint; both coerce to an integer.
fn opt_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u64),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Number(n)) => Ok(Some(n)),
        Some(Raw::Text(s)) => s.parse().map(Some).map_err(serde::de::Error::custom),
    }
}
