use crate::merge::Catalog;
use crate::models::{Hotel, TagSet};

/// Token that stands for an empty id list on the command line
pub const NO_FILTER: &str = "none";

/// Selection criteria for [`Catalog::find`]. An empty list matches
/// everything; both lists must pass when both are set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HotelFilter {
    pub hotel_ids: TagSet,
    pub destination_ids: TagSet,
}

impl HotelFilter {
    pub fn new<H, D>(hotel_ids: H, destination_ids: D) -> Self
    where
        H: IntoIterator,
        H::Item: Into<String>,
        D: IntoIterator,
        D::Item: Into<String>,
    {
        Self {
            hotel_ids: hotel_ids.into_iter().map(Into::into).collect(),
            destination_ids: destination_ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn matches(&self, hotel: &Hotel) -> bool {
        let id_ok = self.hotel_ids.is_empty() || self.hotel_ids.contains(&hotel.id);
        let destination_ok = self.destination_ids.is_empty()
            || self.destination_ids.contains(&hotel.destination_id.as_key());
        id_ok && destination_ok
    }
}

impl Catalog {
    /// Hotels matching both id lists, in catalog order
    pub fn find<H, D>(&self, hotel_ids: H, destination_ids: D) -> Vec<&Hotel>
    where
        H: IntoIterator,
        H::Item: Into<String>,
        D: IntoIterator,
        D::Item: Into<String>,
    {
        self.filter(&HotelFilter::new(hotel_ids, destination_ids))
    }

    pub fn filter(&self, filter: &HotelFilter) -> Vec<&Hotel> {
        self.hotels()
            .iter()
            .filter(|hotel| filter.matches(hotel))
            .collect()
    }
}

/// Parse a command-line id list: `none` or comma-separated ids
pub fn parse_id_list(raw: &str) -> TagSet {
    let raw = raw.trim();
    if raw == NO_FILTER {
        return TagSet::new();
    }
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}
