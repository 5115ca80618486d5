use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Insertion-ordered, duplicate-free collection used for every multi-valued field
pub type TagSet = IndexSet<String>;

/// Destination identifier as the supplier encoded it.
///
/// Some suppliers send a number, others a string. Comparisons go through the
/// string form (see [`DestinationId::as_key`]), so `5` and `"5"` match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DestinationId {
    Number(i64),
    Text(String),
}

impl DestinationId {
    /// String form used for filtering
    pub fn as_key(&self) -> String {
        self.to_string()
    }
}

impl Default for DestinationId {
    fn default() -> Self {
        DestinationId::Text(String::new())
    }
}

impl fmt::Display for DestinationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DestinationId::Number(n) => write!(f, "{}", n),
            DestinationId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for DestinationId {
    fn from(value: i64) -> Self {
        DestinationId::Number(value)
    }
}

impl From<&str> for DestinationId {
    fn from(value: &str) -> Self {
        DestinationId::Text(value.to_string())
    }
}

/// Location information for a hotel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amenities {
    pub general: TagSet,
    pub room: TagSet,
}

/// Image links grouped by what they show
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Images {
    pub rooms: TagSet,
    pub site: TagSet,
    pub amenities: TagSet,
}

/// Canonical hotel record every supplier maps into
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    pub id: String,
    pub destination_id: DestinationId,
    pub name: String,
    pub description: String,
    pub location: Location,
    pub amenities: Amenities,
    pub images: Images,
    pub booking_conditions: TagSet,
}

impl Hotel {
    /// Empty record for `id`, every other field at its default
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}
