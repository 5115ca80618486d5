use crate::models::{Amenities, DestinationId, Hotel, Images, Location, TagSet};
use crate::suppliers::traits::Supplier;
use crate::suppliers::types::{
    clean_text, coordinate, decode_dto, lenient, lenient_destination, lenient_id, lenient_strings,
    optional_text, tag_set,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// Raw Acme record (PascalCase keys, flat location, no images)
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AcmeHotel {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_destination")]
    pub destination_id: Option<DestinationId>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "coordinate")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "coordinate")]
    pub longitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub facilities: Vec<String>,
}

impl From<AcmeHotel> for Hotel {
    fn from(raw: AcmeHotel) -> Self {
        Hotel {
            id: raw.id,
            destination_id: raw.destination_id.unwrap_or_default(),
            name: clean_text(raw.name),
            description: clean_text(raw.description),
            location: Location {
                address: optional_text(raw.address),
                city: optional_text(raw.city),
                country: optional_text(raw.country),
                lat: raw.latitude,
                lng: raw.longitude,
            },
            amenities: Amenities {
                general: tag_set(raw.facilities),
                room: TagSet::new(),
            },
            images: Images::default(),
            booking_conditions: TagSet::new(),
        }
    }
}

/// Supplier A
pub struct AcmeSupplier {
    endpoint: String,
}

impl AcmeSupplier {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Supplier for AcmeSupplier {
    fn identify(&self) -> &'static str {
        "acme"
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn normalize(&self, raw: Value) -> Hotel {
        let dto: AcmeHotel = decode_dto(self.identify(), raw);
        debug!("Normalizing acme hotel {}", dto.id);
        dto.into()
    }
}
