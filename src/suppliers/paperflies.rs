use crate::models::{Amenities, DestinationId, Hotel, Images, Location, TagSet};
use crate::suppliers::traits::Supplier;
use crate::suppliers::types::{
    clean_text, decode_dto, image_links, lenient, lenient_destination, lenient_id, lenient_list,
    lenient_strings, optional_text, tag_set, ImageRef,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

#[derive(Debug, Default, Deserialize)]
pub struct PaperfliesLocation {
    #[serde(default, deserialize_with = "lenient")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub country: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PaperfliesAmenities {
    #[serde(default, deserialize_with = "lenient_strings")]
    pub general: Vec<String>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub room: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PaperfliesImages {
    #[serde(default, deserialize_with = "lenient_list")]
    pub rooms: Vec<ImageRef>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub site: Vec<ImageRef>,
}

/// Raw Paperflies record (nested location/amenities, the only source of
/// booking conditions and room amenities)
#[derive(Debug, Default, Deserialize)]
pub struct PaperfliesHotel {
    #[serde(default, deserialize_with = "lenient_id")]
    pub hotel_id: String,
    #[serde(default, deserialize_with = "lenient_destination")]
    pub destination_id: Option<DestinationId>,
    #[serde(default, deserialize_with = "lenient")]
    pub hotel_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub location: PaperfliesLocation,
    #[serde(default, deserialize_with = "lenient")]
    pub details: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub amenities: PaperfliesAmenities,
    #[serde(default, deserialize_with = "lenient")]
    pub images: PaperfliesImages,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub booking_conditions: Vec<String>,
}

impl From<PaperfliesHotel> for Hotel {
    fn from(raw: PaperfliesHotel) -> Self {
        Hotel {
            id: raw.hotel_id,
            destination_id: raw.destination_id.unwrap_or_default(),
            name: clean_text(raw.hotel_name),
            description: clean_text(raw.details),
            location: Location {
                address: optional_text(raw.location.address),
                city: None,
                country: optional_text(raw.location.country),
                lat: None,
                lng: None,
            },
            amenities: Amenities {
                general: tag_set(raw.amenities.general),
                room: tag_set(raw.amenities.room),
            },
            images: Images {
                rooms: image_links(raw.images.rooms),
                site: image_links(raw.images.site),
                amenities: TagSet::new(),
            },
            booking_conditions: tag_set(raw.booking_conditions),
        }
    }
}

/// Supplier C
pub struct PaperfliesSupplier {
    endpoint: String,
}

impl PaperfliesSupplier {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Supplier for PaperfliesSupplier {
    fn identify(&self) -> &'static str {
        "paperflies"
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn normalize(&self, raw: Value) -> Hotel {
        let dto: PaperfliesHotel = decode_dto(self.identify(), raw);
        debug!("Normalizing paperflies hotel {}", dto.hotel_id);
        dto.into()
    }
}
