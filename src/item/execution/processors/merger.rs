//! Metadata merge rules shared by both join modes.

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::item::execution::utils::StringComparator;
use crate::item::types::Item;

/// Delimiter between aggregated values in a group-join output item.
pub const GROUP_VALUE_SEPARATOR: char = ';';

/// Copies and aggregates right-side metadata into join output items
pub struct MetadataMerger;

impl MetadataMerger {
    /// Whether `name` is excluded from merging (exact string match).
    pub fn is_excluded(name: &str, exclude: &HashSet<String>) -> bool {
        // Fast path: most joins exclude nothing
        !exclude.is_empty() && exclude.contains(name)
    }

    /// Equi-join output: a clone of `left` with the non-excluded custom
    /// metadata of `right` written over it. Right values win on name
    /// collision; a colliding name keeps the position and casing it already
    /// has on the left.
    pub fn overlay(left: &Item, right: &Item, exclude: &HashSet<String>) -> Item {
        let mut merged = left.clone();
        for (name, value) in right.custom_metadata() {
            if Self::is_excluded(name, exclude) {
                continue;
            }
            merged.set_metadata(name, value);
        }
        merged
    }

    /// Group-join output: a clone of `left` with one entry per non-excluded
    /// custom metadata name appearing in at least one match.
    ///
    /// Names are collected in first-seen order across the matches (deduplicated
    /// ignoring case, first-seen casing kept); each entry's value is that
    /// name's values across the matches, in match order, joined with
    /// [`GROUP_VALUE_SEPARATOR`]. With no matches `left` passes through
    /// unchanged.
    pub fn aggregate(left: &Item, matches: &[&Item], exclude: &HashSet<String>) -> Item {
        let mut gathered: IndexMap<String, String> = IndexMap::new();
        for matched in matches {
            for (name, value) in matched.custom_metadata() {
                if Self::is_excluded(name, exclude) {
                    continue;
                }
                let position = gathered
                    .keys()
                    .position(|seen| StringComparator::equals_ignore_case(seen, name));
                match position {
                    Some(index) => {
                        if let Some((_, joined)) = gathered.get_index_mut(index) {
                            joined.push(GROUP_VALUE_SEPARATOR);
                            joined.push_str(value);
                        }
                    }
                    None => {
                        gathered.insert(name.to_string(), value.to_string());
                    }
                }
            }
        }

        let mut merged = left.clone();
        for (name, joined) in gathered {
            merged.set_metadata(name, joined);
        }
        merged
    }
}
