use chrono::NaiveDate;

use crate::config::AppConfig;
use crate::models::{Property, Reservation};
use crate::AppState;

pub fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap_or_else(|e| panic!("bad test date {s}: {e}"))
}

pub fn res(id: &str, property_id: &str, guest: &str, check_in: &str, check_out: &str) -> Reservation {
    Reservation {
        id: id.into(),
        property_id: property_id.into(),
        guest_name: guest.into(),
        check_in: day(check_in),
        check_out: day(check_out),
        check_in_time: None,
        check_out_time: None,
    }
}

pub fn portfolio() -> (Vec<Property>, Vec<Reservation>) {
    let properties = vec![
        Property { id: "p1".into(), name: "Casa Amplia".into(), internal_name: None },
        Property { id: "p2".into(), name: "Beach Loft".into(), internal_name: Some("BL-2".into()) },
        Property { id: "p3".into(), name: "Old Town Studio".into(), internal_name: None },
    ];
    let reservations = vec![
        res("r1", "p1", "Ana", "2024-06-01", "2024-06-10"),
        res("r2", "p1", "Luis", "2024-06-10", "2024-06-15"),
        res("r3", "p2", "Marta", "2024-06-04", "2024-06-10"),
        res("r4", "p2", "Jon", "2024-06-10", "2024-06-11"),
        res("r5", "p3", "Eva", "2024-06-02", "2024-06-05"),
    ];
    (properties, reservations)
}

/// App state without a database, seeded with `portfolio()`.
pub fn seeded_state() -> AppState {
    let state = AppState::new(AppConfig::default(), None);
    let (properties, reservations) = portfolio();
    state.store.replace(properties, reservations);
    state
}
