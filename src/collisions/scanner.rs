// src/collisions/scanner.rs

use chrono::NaiveDate;
use std::collections::BTreeMap;

use super::index::TurnoverIndex;
use crate::models::{CriticalDay, Reservation};

/// How many critical days the portfolio view shows.
pub const CRITICAL_DAYS_LIMIT: usize = 4;

/// Soonest turnover days from `today` on, across every property.
pub fn scan_portfolio_collisions(reservations: &[Reservation], today: NaiveDate) -> Vec<CriticalDay> {
    scan_portfolio_collisions_with_limit(reservations, today, CRITICAL_DAYS_LIMIT)
}

pub fn scan_portfolio_collisions_with_limit(
    reservations: &[Reservation],
    today: NaiveDate,
    limit: usize,
) -> Vec<CriticalDay> {
    let index = TurnoverIndex::build(reservations);

    // date -> properties turning over that day, in order of first appearance
    let mut by_day: BTreeMap<NaiveDate, Vec<&str>> = BTreeMap::new();
    for r in reservations.iter().filter(|r| index.is_turnover(r)) {
        let props = by_day.entry(r.check_out).or_default();
        if !props.contains(&r.property_id.as_str()) {
            props.push(&r.property_id);
        }
    }

    by_day
        .range(today..)
        .take(limit)
        .map(|(date, props)| CriticalDay {
            date: *date,
            count: props.len(),
            property_ids: props.iter().map(|p| p.to_string()).collect(),
        })
        .collect()
}
