//! Pre-execution validation for sort and join inputs.
//!
//! Validators inspect a batch and report the first problem as a structured
//! error; they never mutate the collections they check.

use crate::item::ast::{JoinSide, OrderInstruction};
use crate::item::error::{ItemError, ItemResult};
use crate::item::execution::utils::StringComparator;
use crate::item::types::Item;

/// Validation for ordering instruction lists and the items they sort
pub struct SortKeyValidator;

impl SortKeyValidator {
    /// Reject instruction lists whose keys collide ignoring case.
    ///
    /// Reports the first key that repeats, scanning left to right.
    pub fn check_distinct_keys(instructions: &[OrderInstruction]) -> ItemResult<()> {
        for (index, instruction) in instructions.iter().enumerate() {
            let collides = instructions[..index]
                .iter()
                .any(|prior| StringComparator::equals_ignore_case(&prior.key, &instruction.key));
            if collides {
                return Err(ItemError::DuplicateSortKey {
                    key: instruction.key.clone(),
                });
            }
        }
        Ok(())
    }

    /// Reject batches where any item lacks metadata for any instruction key.
    ///
    /// Keys are checked in instruction order; the first key any item is
    /// missing is reported together with how many items lack it. `Identity`
    /// is always present.
    pub fn check_metadata_present(
        items: &[Item],
        instructions: &[OrderInstruction],
    ) -> ItemResult<()> {
        for instruction in instructions {
            let count = items
                .iter()
                .filter(|item| !item.has_metadata(&instruction.key))
                .count();
            if count > 0 {
                return Err(ItemError::MissingSortMetadata {
                    key: instruction.key.clone(),
                    count,
                });
            }
        }
        Ok(())
    }
}

/// Validation for join key presence on one input side
pub struct JoinKeyValidator;

impl JoinKeyValidator {
    /// Confirm every item on `side` carries metadata for `key`.
    pub fn validate(items: &[Item], key: &str, side: JoinSide) -> ItemResult<()> {
        let count = items.iter().filter(|item| !item.has_metadata(key)).count();
        if count > 0 {
            return Err(ItemError::MissingJoinKey {
                side,
                key: key.to_string(),
                count,
            });
        }
        Ok(())
    }
}
