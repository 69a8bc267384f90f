//! Join Processor
//!
//! Matches items across two collections on configured key metadata and
//! merges metadata into the output, in one of two modes:
//!
//! - **equi**: one output item per matching (left, right) pair, in left-then-
//!   right encounter order; unmatched left items emit nothing
//! - **group**: exactly one output item per left item, aggregating the
//!   metadata of all its matches
//!
//! Key values are compared with ordinal string equality. A missing join key
//! on either side aborts the whole join with empty output.

use log::debug;

use crate::item::ast::{JoinMode, JoinSide, JoinSpec};
use crate::item::execution::processors::merger::MetadataMerger;
use crate::item::execution::processors::validation::JoinKeyValidator;
use crate::item::execution::processors::ProcessorOutcome;
use crate::item::execution::utils::StringComparator;
use crate::item::types::Item;

/// Processor for equi-join and group-join operations
pub struct JoinProcessor;

impl JoinProcessor {
    /// Join two item collections under `spec`.
    ///
    /// Both sides are validated for join-key presence first (left side, then
    /// right); the first failing side aborts the join and the outcome carries
    /// empty output plus the validation error.
    pub fn process(left: Vec<Item>, right: Vec<Item>, spec: &JoinSpec) -> ProcessorOutcome {
        let mut outcome = ProcessorOutcome::default();

        if let Err(error) = JoinKeyValidator::validate(&left, spec.left_key_name(), JoinSide::Left)
        {
            outcome.record(error);
            return outcome;
        }
        if let Err(error) =
            JoinKeyValidator::validate(&right, spec.right_key_name(), JoinSide::Right)
        {
            outcome.record(error);
            return outcome;
        }

        debug!(
            "joining {} left x {} right item(s) on '{}' = '{}'",
            left.len(),
            right.len(),
            spec.left_key_name(),
            spec.right_key_name()
        );
        outcome.items = match spec.mode {
            JoinMode::Equi => Self::equi_join(&left, &right, spec),
            JoinMode::Group => Self::group_join(&left, &right, spec),
        };
        outcome
    }

    /// One output item per key-equal (left, right) pair.
    ///
    /// Left items are walked in original order; for a fixed left item its
    /// matches appear in the right side's original order.
    fn equi_join(left: &[Item], right: &[Item], spec: &JoinSpec) -> Vec<Item> {
        let mut joined = Vec::new();
        for left_item in left {
            let left_value = left_item.metadata(spec.left_key_name()).unwrap_or_default();
            for right_item in right {
                let right_value = right_item
                    .metadata(spec.right_key_name())
                    .unwrap_or_default();
                if StringComparator::equals_ordinal(left_value, right_value) {
                    joined.push(MetadataMerger::overlay(
                        left_item,
                        right_item,
                        &spec.exclude_metadata,
                    ));
                }
            }
        }
        joined
    }

    /// Exactly one output item per left item, matches aggregated.
    fn group_join(left: &[Item], right: &[Item], spec: &JoinSpec) -> Vec<Item> {
        left.iter()
            .map(|left_item| {
                let left_value = left_item.metadata(spec.left_key_name()).unwrap_or_default();
                let matches: Vec<&Item> = right
                    .iter()
                    .filter(|right_item| {
                        let right_value = right_item
                            .metadata(spec.right_key_name())
                            .unwrap_or_default();
                        StringComparator::equals_ordinal(left_value, right_value)
                    })
                    .collect();
                MetadataMerger::aggregate(left_item, &matches, &spec.exclude_metadata)
            })
            .collect()
    }
}
