// src/collisions/index.rs

use chrono::NaiveDate;
use std::collections::HashMap;
use std::ptr;

use crate::models::Reservation;

type DayKey<'a> = (&'a str, NaiveDate);

/// Reservations bucketed by `(property_id, check_in)` and `(property_id, check_out)`.
///
/// Buckets keep the order in which reservations were fed in, so "first" always
/// means first in the source list.
#[derive(Debug, Default)]
pub struct TurnoverIndex<'a> {
    arrivals: HashMap<DayKey<'a>, Vec<&'a Reservation>>,
    departures: HashMap<DayKey<'a>, Vec<&'a Reservation>>,
}

impl<'a> TurnoverIndex<'a> {
    pub fn build<I>(reservations: I) -> Self
    where
        I: IntoIterator<Item = &'a Reservation>,
    {
        let mut index = Self::default();
        for r in reservations {
            index
                .arrivals
                .entry((r.property_id.as_str(), r.check_in))
                .or_default()
                .push(r);
            index
                .departures
                .entry((r.property_id.as_str(), r.check_out))
                .or_default()
                .push(r);
        }
        index
    }

    /// Index restricted to a single property.
    pub fn for_property(reservations: &'a [Reservation], property_id: &str) -> Self {
        Self::build(reservations.iter().filter(|r| r.property_id == property_id))
    }

    pub fn first_arrival(&self, property_id: &str, day: NaiveDate) -> Option<&'a Reservation> {
        self.arrivals
            .get(&(property_id, day))
            .and_then(|bucket| bucket.first().copied())
    }

    pub fn first_departure(&self, property_id: &str, day: NaiveDate) -> Option<&'a Reservation> {
        self.departures
            .get(&(property_id, day))
            .and_then(|bucket| bucket.first().copied())
    }

    /// The first *other* stay at the same property that starts the day `outgoing` ends.
    pub fn incoming_for(&self, outgoing: &Reservation) -> Option<&'a Reservation> {
        self.arrivals
            .get(&(outgoing.property_id.as_str(), outgoing.check_out))?
            .iter()
            .copied()
            .find(|r| !ptr::eq(*r, outgoing))
    }

    pub fn is_turnover(&self, outgoing: &Reservation) -> bool {
        self.incoming_for(outgoing).is_some()
    }
}
