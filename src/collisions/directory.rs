// src/collisions/directory.rs

use std::collections::HashMap;

use crate::models::Property;

pub const UNKNOWN_PROPERTY: &str = "Unknown";

fn norm(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Lookup over a property list: by id, and by normalized display name.
///
/// Name matches are resolved over entries sorted by id, so the winner does not
/// depend on the order the store handed the list over in.
#[derive(Debug)]
pub struct PropertyDirectory<'a> {
    by_id: HashMap<&'a str, &'a Property>,
    by_name: Vec<(String, &'a Property)>,
}

impl<'a> PropertyDirectory<'a> {
    pub fn new(properties: &'a [Property]) -> Self {
        let mut by_id = HashMap::with_capacity(properties.len());
        for p in properties {
            by_id.entry(p.id.as_str()).or_insert(p);
        }

        let mut by_name: Vec<(String, &'a Property)> = by_id
            .values()
            .map(|p| (norm(p.display_name()), *p))
            .collect();
        by_name.sort_by(|a, b| a.1.id.cmp(&b.1.id));

        Self { by_id, by_name }
    }

    pub fn get(&self, id: &str) -> Option<&'a Property> {
        self.by_id.get(id).copied()
    }

    pub fn display_name(&self, id: &str) -> &'a str {
        self.get(id).map_or(UNKNOWN_PROPERTY, Property::display_name)
    }

    /// Case-insensitive substring match of `marker` against display names.
    /// A blank marker matches nothing.
    pub fn find_by_marker(&self, marker: &str) -> Option<&'a Property> {
        let needle = norm(marker);
        if needle.is_empty() {
            return None;
        }
        self.by_name
            .iter()
            .find(|(name, _)| name.contains(&needle))
            .map(|(_, p)| *p)
    }
}
