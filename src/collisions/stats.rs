// src/collisions/stats.rs

use chrono::NaiveDate;

use crate::models::{DailyStats, Reservation};

/// Headline counts for a single day. Every departure is a cleaning.
pub fn daily_stats(reservations: &[Reservation], date: NaiveDate) -> DailyStats {
    let check_outs = reservations.iter().filter(|r| r.check_out == date).count();
    let check_ins = reservations.iter().filter(|r| r.check_in == date).count();
    DailyStats {
        date,
        cleanings: check_outs,
        check_ins,
        check_outs,
        total_reservations: reservations.len(),
    }
}
