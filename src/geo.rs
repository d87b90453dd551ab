use serde::Deserialize;

/// The `geo` sub-mapping of a status, tagged by its `type` field. Only
/// `"Point"` is a kind this crate models; other tags decode as
/// [`Geo::Unknown`] and resolve to no point.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum Geo {
    Point(Point),
    #[serde(other)]
    Unknown,
}

/// A geographic point as reported by the client that posted the status.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Point {
    /// Latitude and longitude, in that order.
    pub coordinates: Option<(f64, f64)>,
}
