//! Reconciliation of per-supplier hotel records into one catalog.
//!
//! Records are folded in processing order into an insertion-ordered map
//! keyed by hotel id. The first record seen for an id is the base; later
//! records only fill empty `name`/`description` and extend the collections.
//! `location` and `destination_id` stay with the base record as a whole.

use crate::models::{Hotel, TagSet};
use indexmap::map::Entry;
use indexmap::IndexMap;
use tracing::debug;

/// Deduplicated hotels, in order of first appearance of each id
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    hotels: Vec<Hotel>,
}

impl Catalog {
    pub fn hotels(&self) -> &[Hotel] {
        &self.hotels
    }

    pub fn len(&self) -> usize {
        self.hotels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hotels.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Hotel> {
        self.hotels.iter().find(|hotel| hotel.id == id)
    }

    pub fn into_hotels(self) -> Vec<Hotel> {
        self.hotels
    }
}

/// Fold `hotels` into a catalog with one entry per id
pub fn reconcile<I>(hotels: I) -> Catalog
where
    I: IntoIterator<Item = Hotel>,
{
    let merged = hotels
        .into_iter()
        .fold(IndexMap::<String, Hotel>::new(), |mut acc, hotel| {
            match acc.entry(hotel.id.clone()) {
                Entry::Occupied(mut existing) => {
                    debug!("Merging duplicate contribution for hotel {}", hotel.id);
                    merge_into(existing.get_mut(), hotel);
                }
                Entry::Vacant(slot) => {
                    slot.insert(hotel);
                }
            }
            acc
        });

    Catalog {
        hotels: merged.into_values().collect(),
    }
}

/// Merge `incoming` into `existing` in place
pub fn merge_into(existing: &mut Hotel, incoming: Hotel) {
    fill_if_empty(&mut existing.name, incoming.name);
    fill_if_empty(&mut existing.description, incoming.description);

    union(&mut existing.amenities.general, incoming.amenities.general);
    union(&mut existing.amenities.room, incoming.amenities.room);
    union(&mut existing.images.rooms, incoming.images.rooms);
    union(&mut existing.images.site, incoming.images.site);
    union(&mut existing.images.amenities, incoming.images.amenities);
    union(&mut existing.booking_conditions, incoming.booking_conditions);
}

fn fill_if_empty(current: &mut String, incoming: String) {
    if current.is_empty() {
        *current = incoming;
    }
}

// IndexSet::extend keeps the position of values already present
fn union(current: &mut TagSet, incoming: TagSet) {
    current.extend(incoming);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DestinationId, Location};

    fn tags(values: &[&str]) -> TagSet {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn hotel(id: &str, name: &str, amenities: &[&str]) -> Hotel {
        let mut hotel = Hotel::new(id);
        hotel.name = name.to_string();
        hotel.amenities.general = tags(amenities);
        hotel
    }

    fn ids(catalog: &Catalog) -> Vec<&str> {
        catalog.hotels().iter().map(|h| h.id.as_str()).collect()
    }

    #[test]
    fn first_contribution_becomes_the_base_record() {
        let catalog = reconcile(vec![hotel("h1", "Base", &["wifi"])]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.hotels()[0], hotel("h1", "Base", &["wifi"]));
    }

    #[test]
    fn empty_name_is_filled_by_a_later_contribution() {
        let catalog = reconcile(vec![hotel("h1", "", &[]), hotel("h1", "X", &[])]);
        assert_eq!(catalog.hotels()[0].name, "X");
    }

    #[test]
    fn non_empty_name_is_never_overwritten() {
        let catalog = reconcile(vec![
            hotel("h1", "X", &[]),
            hotel("h1", "Y", &[]),
            hotel("h1", "", &[]),
        ]);
        assert_eq!(catalog.hotels()[0].name, "X");
    }

    #[test]
    fn description_follows_first_non_empty_rule() {
        let mut first = Hotel::new("h1");
        first.description = String::new();
        let mut second = Hotel::new("h1");
        second.description = "Sea view".to_string();
        let mut third = Hotel::new("h1");
        third.description = "Garden view".to_string();

        let catalog = reconcile(vec![first, second, third]);
        assert_eq!(catalog.hotels()[0].description, "Sea view");
    }

    #[test]
    fn collections_are_unioned_in_first_seen_order() {
        let catalog = reconcile(vec![
            hotel("h1", "A", &["wifi"]),
            hotel("h1", "", &["pool"]),
            hotel("h1", "", &["pool", "spa"]),
        ]);
        assert_eq!(
            catalog.hotels()[0].amenities.general,
            tags(&["wifi", "pool", "spa"])
        );
    }

    #[test]
    fn every_collection_field_is_unioned() {
        let mut base = Hotel::new("h1");
        base.images.rooms = tags(&["r1"]);
        base.booking_conditions = tags(&["No pets"]);

        let mut other = Hotel::new("h1");
        other.amenities.room = tags(&["tv"]);
        other.images.rooms = tags(&["r1", "r2"]);
        other.images.site = tags(&["s1"]);
        other.images.amenities = tags(&["a1"]);
        other.booking_conditions = tags(&["Check-in 3pm", "No pets"]);

        let merged = &reconcile(vec![base, other]).into_hotels()[0];
        assert_eq!(merged.amenities.room, tags(&["tv"]));
        assert_eq!(merged.images.rooms, tags(&["r1", "r2"]));
        assert_eq!(merged.images.site, tags(&["s1"]));
        assert_eq!(merged.images.amenities, tags(&["a1"]));
        assert_eq!(merged.booking_conditions, tags(&["No pets", "Check-in 3pm"]));
    }

    #[test]
    fn merging_the_same_contribution_twice_is_idempotent() {
        let mut full = hotel("h1", "A", &["wifi", "pool"]);
        full.images.site = tags(&["s1"]);
        full.booking_conditions = tags(&["No pets"]);

        let mut once = full.clone();
        merge_into(&mut once, full.clone());
        let mut twice = once.clone();
        merge_into(&mut twice, full.clone());

        assert_eq!(once, full);
        assert_eq!(twice, full);
    }

    #[test]
    fn location_and_destination_stay_with_the_base_record() {
        let mut base = Hotel::new("h1");
        base.destination_id = DestinationId::Number(5432);
        base.location = Location {
            address: Some("8 Sentosa Gateway".to_string()),
            ..Location::default()
        };

        let mut later = Hotel::new("h1");
        later.destination_id = DestinationId::Number(1);
        later.location = Location {
            address: Some("Elsewhere".to_string()),
            city: Some("Singapore".to_string()),
            country: Some("SG".to_string()),
            lat: Some(1.26),
            lng: Some(103.82),
        };

        let merged = &reconcile(vec![base.clone(), later]).into_hotels()[0];
        assert_eq!(merged.location, base.location);
        assert_eq!(merged.destination_id, DestinationId::Number(5432));
    }

    #[test]
    fn membership_is_order_independent_but_provenance_is_not() {
        let a = hotel("h1", "From A", &[]);
        let b = hotel("h2", "Only B", &[]);
        let c = hotel("h1", "From C", &[]);

        let forward = reconcile(vec![a.clone(), b.clone(), c.clone()]);
        let backward = reconcile(vec![c, b, a]);

        let mut forward_ids = ids(&forward);
        let mut backward_ids = ids(&backward);
        assert_eq!(forward_ids, vec!["h1", "h2"]);
        assert_eq!(backward_ids, vec!["h1", "h2"]);
        forward_ids.sort_unstable();
        backward_ids.sort_unstable();
        assert_eq!(forward_ids, backward_ids);

        assert_eq!(forward.get("h1").map(|h| h.name.as_str()), Some("From A"));
        assert_eq!(backward.get("h1").map(|h| h.name.as_str()), Some("From C"));
    }

    #[test]
    fn catalog_keeps_order_of_first_appearance() {
        let catalog = reconcile(vec![
            hotel("b", "", &[]),
            hotel("a", "", &[]),
            hotel("b", "", &[]),
            hotel("c", "", &[]),
        ]);
        assert_eq!(ids(&catalog), vec!["b", "a", "c"]);
    }

    #[test]
    fn empty_input_gives_empty_catalog() {
        assert!(reconcile(Vec::new()).is_empty());
    }
}
