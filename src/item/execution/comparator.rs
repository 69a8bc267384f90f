//! Composite ordering over items.
//!
//! Builds a single total ordering function from a list of
//! [`OrderInstruction`]s: instructions are evaluated left to right and the
//! first non-tie decides.

use std::cmp::Ordering;

use crate::item::ast::{CaseSensitivity, OrderDirection, OrderInstruction};
use crate::item::execution::utils::StringComparator;
use crate::item::types::Item;

/// Comparator chaining per-key comparisons over item metadata
pub struct ItemComparator;

impl ItemComparator {
    /// Compare two items under an instruction list.
    ///
    /// For each instruction the items' metadata values for that key are
    /// compared with the instruction's case sensitivity; a descending
    /// instruction reverses its result. The first non-equal comparison wins;
    /// if every instruction ties the items are equal.
    ///
    /// A missing metadata value compares as an empty string so the function
    /// stays total; sort validation rejects such inputs before sorting.
    pub fn compare(a: &Item, b: &Item, instructions: &[OrderInstruction]) -> Ordering {
        for instruction in instructions {
            let left = a.metadata(&instruction.key).unwrap_or("");
            let right = b.metadata(&instruction.key).unwrap_or("");

            let comparison = match instruction.case_sensitivity {
                CaseSensitivity::Sensitive => StringComparator::compare_ordinal(left, right),
                CaseSensitivity::Insensitive => {
                    StringComparator::compare_ordinal_ignore_case(left, right)
                }
            };

            if comparison != Ordering::Equal {
                return match instruction.direction {
                    OrderDirection::Asc => comparison,
                    OrderDirection::Desc => comparison.reverse(),
                };
            }
        }

        Ordering::Equal
    }
}
