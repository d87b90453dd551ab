use std::hash::{Hash, Hasher};

use serde::Deserialize;

/// A named location a status is associated with. Identity is the place id.
#[derive(Debug, Clone, Deserialize)]
pub struct Place {
    pub id: String,
    pub name: Option<String>,
    pub full_name: Option<String>,
    pub place_type: Option<String>,
    pub country: Option<String>,
    pub country_code: Option<String>,
    pub url: Option<String>,
}

impl PartialEq for Place {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Place {}

impl Hash for Place {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
