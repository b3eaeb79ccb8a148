// src/collisions/mod.rs
//
// Turnover detection: pure functions over a reservation/property snapshot.

mod detail;
mod directory;
mod index;
mod scanner;
mod stats;
mod watch;

pub use detail::expand_collision_detail;
pub use directory::{PropertyDirectory, UNKNOWN_PROPERTY};
pub use index::TurnoverIndex;
pub use scanner::{scan_portfolio_collisions, scan_portfolio_collisions_with_limit, CRITICAL_DAYS_LIMIT};
pub use stats::daily_stats;
pub use watch::{watch_priority_property, watch_property_matching, PRIORITY_PROPERTY_MARKER};
