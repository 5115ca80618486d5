use crate::models::{Amenities, DestinationId, Hotel, Images, Location, TagSet};
use crate::suppliers::traits::Supplier;
use crate::suppliers::types::{
    clean_text, coordinate, decode_dto, image_links, lenient, lenient_destination, lenient_id,
    lenient_list, lenient_strings, optional_text, tag_set, ImageRef,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

#[derive(Debug, Default, Deserialize)]
pub struct PatagoniaImages {
    #[serde(default, deserialize_with = "lenient_list")]
    pub rooms: Vec<ImageRef>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub amenities: Vec<ImageRef>,
}

/// Raw Patagonia record (flat, lowercase keys, `info` holds the description)
#[derive(Debug, Default, Deserialize)]
pub struct PatagoniaHotel {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_destination")]
    pub destination: Option<DestinationId>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "coordinate")]
    pub lat: Option<f64>,
    #[serde(default, deserialize_with = "coordinate")]
    pub lng: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub info: Option<String>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub amenities: Vec<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub images: PatagoniaImages,
}

impl From<PatagoniaHotel> for Hotel {
    fn from(raw: PatagoniaHotel) -> Self {
        Hotel {
            id: raw.id,
            destination_id: raw.destination.unwrap_or_default(),
            name: clean_text(raw.name),
            description: clean_text(raw.info),
            location: Location {
                address: optional_text(raw.address),
                city: None,
                country: None,
                lat: raw.lat,
                lng: raw.lng,
            },
            amenities: Amenities {
                general: tag_set(raw.amenities),
                room: TagSet::new(),
            },
            images: Images {
                rooms: image_links(raw.images.rooms),
                site: TagSet::new(),
                amenities: image_links(raw.images.amenities),
            },
            booking_conditions: TagSet::new(),
        }
    }
}

/// Supplier B
pub struct PatagoniaSupplier {
    endpoint: String,
}

impl PatagoniaSupplier {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Supplier for PatagoniaSupplier {
    fn identify(&self) -> &'static str {
        "patagonia"
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn normalize(&self, raw: Value) -> Hotel {
        let dto: PatagoniaHotel = decode_dto(self.identify(), raw);
        debug!("Normalizing patagonia hotel {}", dto.id);
        dto.into()
    }
}
