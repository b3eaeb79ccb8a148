// src/collisions/detail.rs

use chrono::NaiveDate;

use super::directory::PropertyDirectory;
use super::index::TurnoverIndex;
use crate::models::{Collision, CollisionDetail, Property, Reservation};

/// Outgoing/incoming guest pair on `date` for each of `property_ids`, in the
/// order given. Missing properties or guests stay `None`.
pub fn expand_collision_detail<S: AsRef<str>>(
    date: NaiveDate,
    property_ids: &[S],
    reservations: &[Reservation],
    properties: &[Property],
) -> CollisionDetail {
    let directory = PropertyDirectory::new(properties);
    let index = TurnoverIndex::build(reservations);

    let collisions = property_ids
        .iter()
        .map(|pid| {
            let pid = pid.as_ref();
            Collision {
                property_id: pid.to_string(),
                property_name: directory.display_name(pid).to_string(),
                out_guest: index.first_departure(pid, date).cloned(),
                in_guest: index.first_arrival(pid, date).cloned(),
            }
        })
        .collect();

    CollisionDetail { date, collisions }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{day, portfolio};
    use crate::collisions::{scan_portfolio_collisions, watch_priority_property};
    use crate::models::{DEFAULT_CHECK_IN_TIME, DEFAULT_CHECK_OUT_TIME};

    #[test]
    fn expands_every_requested_property_in_order() {
        let (props, list) = portfolio();
        let detail = expand_collision_detail(day("2024-06-10"), &["p2", "p1"], &list, &props);
        assert_eq!(detail.date, day("2024-06-10"));
        let names: Vec<_> = detail.collisions.iter().map(|c| c.property_name.as_str()).collect();
        assert_eq!(names, vec!["BL-2", "Casa Amplia"]);
        let first = &detail.collisions[0];
        assert_eq!(first.out_guest.as_ref().map(|r| r.guest_name.as_str()), Some("Marta"));
        assert_eq!(first.in_guest.as_ref().map(|r| r.guest_name.as_str()), Some("Jon"));
        assert_eq!(
            first.out_guest.as_ref().map(|r| r.check_out_time_or_default()),
            Some(DEFAULT_CHECK_OUT_TIME)
        );
        assert_eq!(
            first.in_guest.as_ref().map(|r| r.check_in_time_or_default()),
            Some(DEFAULT_CHECK_IN_TIME)
        );
    }

    #[test]
    fn explicit_times_override_defaults() {
        let (props, mut list) = portfolio();
        list[0].check_out_time = Some("10:00".into());
        list[1].check_in_time = Some("16:30".into());
        let detail = expand_collision_detail(day("2024-06-10"), &["p1"], &list, &props);
        let entry = &detail.collisions[0];
        assert_eq!(entry.out_guest.as_ref().map(|r| r.check_out_time_or_default()), Some("10:00"));
        assert_eq!(entry.in_guest.as_ref().map(|r| r.check_in_time_or_default()), Some("16:30"));
    }

    #[test]
    fn reexpanding_is_idempotent() {
        let (props, list) = portfolio();
        let ids = ["p1", "p2", "ghost"];
        assert_eq!(
            expand_collision_detail(day("2024-06-10"), &ids, &list, &props),
            expand_collision_detail(day("2024-06-10"), &ids, &list, &props)
        );
    }

    #[test]
    fn missing_outgoing_guest_is_not_a_failure() {
        let (props, list) = portfolio();
        let detail = expand_collision_detail(day("2024-06-15"), &["p1"], &list, &props);
        let entry = &detail.collisions[0];
        assert!(entry.in_guest.is_none());
        assert_eq!(entry.out_guest.as_ref().map(|r| r.id.as_str()), Some("r2"));

        let detail = expand_collision_detail(day("2024-06-01"), &["p1"], &list, &props);
        assert!(detail.collisions[0].out_guest.is_none());
        assert!(detail.collisions[0].in_guest.is_some());
    }

    #[test]
    fn unknown_property_gets_sentinel_name() {
        let (props, list) = portfolio();
        let detail = expand_collision_detail(day("2024-06-10"), &["ghost".to_string()], &list, &props);
        assert_eq!(detail.collisions[0].property_name, "Unknown");
        assert!(detail.collisions[0].out_guest.is_none());
    }

    #[test]
    fn expands_scanner_and_watch_selections() {
        let (props, list) = portfolio();
        let today = day("2024-06-01");

        let critical = &scan_portfolio_collisions(&list, today)[0];
        let detail = expand_collision_detail(critical.date, &critical.property_ids, &list, &props);
        assert_eq!(detail.collisions.len(), critical.count);

        let watch = watch_priority_property(&list, &props, today);
        let (Some(date), Some(property)) = (watch.date, watch.property.as_ref()) else {
            panic!("expected a turnover at the priority property");
        };
        let single = expand_collision_detail(date, &[property.id.as_str()], &list, &props);
        assert_eq!(single.collisions[0].out_guest, watch.out_guest);
        assert_eq!(single.collisions[0].in_guest, watch.in_guest);
    }
}
