// src/collisions/watch.rs

use chrono::NaiveDate;

use super::directory::PropertyDirectory;
use super::index::TurnoverIndex;
use crate::models::{PriorityWatch, Property, Reservation};

/// Name fragment identifying the priority property.
pub const PRIORITY_PROPERTY_MARKER: &str = "CASA AMPLIA";

pub fn watch_priority_property(
    reservations: &[Reservation],
    properties: &[Property],
    today: NaiveDate,
) -> PriorityWatch {
    watch_property_matching(PRIORITY_PROPERTY_MARKER, reservations, properties, today)
}

/// Next turnover (earliest date on or after `today`) at the property whose
/// display name contains `marker`.
pub fn watch_property_matching(
    marker: &str,
    reservations: &[Reservation],
    properties: &[Property],
    today: NaiveDate,
) -> PriorityWatch {
    let Some(property) = PropertyDirectory::new(properties).find_by_marker(marker) else {
        return PriorityWatch::unmatched();
    };

    let index = TurnoverIndex::for_property(reservations, &property.id);
    let next = reservations
        .iter()
        .filter(|r| r.property_id == property.id && r.check_out >= today)
        .filter_map(|r| index.incoming_for(r).map(|incoming| (r, incoming)))
        .min_by_key(|(outgoing, _)| outgoing.check_out);

    match next {
        Some((outgoing, incoming)) => PriorityWatch {
            property: Some(property.clone()),
            date: Some(outgoing.check_out),
            out_guest: Some(outgoing.clone()),
            in_guest: Some(incoming.clone()),
        },
        None => PriorityWatch::clear(property.clone()),
    }
}
