use std::hash::{Hash, Hasher};

use serde::Deserialize;

use crate::status::Status;

/// The author of a status. Identity is the user id: two users with the same
/// id compare equal whatever else differs between the payloads.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: u64,
    pub screen_name: Option<String>,
    pub name: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub followers_count: Option<u64>,
    pub friends_count: Option<u64>,
    pub statuses_count: Option<u64>,
    pub favourites_count: Option<u64>,
    pub verified: Option<bool>,
    pub protected: Option<bool>,
    pub profile_image_url: Option<String>,
    /// The user's most recent status, either embedded in the payload or
    /// back-filled by [`Status::user`] with the status it was read from.
    pub status: Option<Box<Status>>,
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for User {}

impl Hash for User {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
