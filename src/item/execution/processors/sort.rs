//! Sorting Processor
//!
//! Implements multi-key sorting of item collections driven by ordering
//! directives. Validation failures abort the sort and return the input
//! sequence untouched; a malformed directive only drops itself.

use log::debug;

use crate::item::execution::comparator::ItemComparator;
use crate::item::execution::processors::validation::SortKeyValidator;
use crate::item::execution::processors::ProcessorOutcome;
use crate::item::parser::OrderSpecParser;
use crate::item::types::Item;

/// Processor for multi-key sort operations
pub struct SortProcessor;

impl SortProcessor {
    /// Sort items according to ordering directives.
    ///
    /// # Arguments
    ///
    /// * `items` - Items to sort
    /// * `directives` - Raw ordering directives (`"key [c][asc|desc]"`);
    ///   empty means ascending case-insensitive identity order
    ///
    /// # Returns
    ///
    /// A [`ProcessorOutcome`] whose `items` are:
    /// - empty for empty input (success, nothing parsed or validated);
    /// - the input untouched when instruction keys collide ignoring case or
    ///   an item lacks metadata for an instruction key (the error is
    ///   recorded);
    /// - sorted by the surviving instructions otherwise. Malformed
    ///   directives are recorded and dropped without aborting the sort, so
    ///   the outcome can carry both sorted items and errors.
    ///
    /// Ties may appear in any relative order: the underlying sort is not
    /// stable and callers must not depend on input order among items that
    /// compare equal under every instruction.
    pub fn process(mut items: Vec<Item>, directives: &[String]) -> ProcessorOutcome {
        let mut outcome = ProcessorOutcome::default();
        if items.is_empty() {
            return outcome;
        }

        let (instructions, parse_errors) = OrderSpecParser::parse_all(directives);
        for error in parse_errors {
            outcome.record(error);
        }

        if let Err(error) = SortKeyValidator::check_distinct_keys(&instructions) {
            outcome.record(error);
            outcome.items = items;
            return outcome;
        }
        if let Err(error) = SortKeyValidator::check_metadata_present(&items, &instructions) {
            outcome.record(error);
            outcome.items = items;
            return outcome;
        }

        debug!(
            "sorting {} item(s) by {} ordering key(s)",
            items.len(),
            instructions.len()
        );
        items.sort_unstable_by(|a, b| ItemComparator::compare(a, b, &instructions));
        outcome.items = items;
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::error::ItemError;

    fn identities(outcome: &ProcessorOutcome) -> Vec<&str> {
        outcome.items.iter().map(|item| item.identity()).collect()
    }

    #[test]
    fn test_empty_input_is_a_successful_empty_output() {
        let outcome = SortProcessor::process(Vec::new(), &["Size upward".to_string()]);
        assert!(outcome.is_success());
        assert!(outcome.items.is_empty());
    }

    #[test]
    fn test_no_directives_sorts_by_identity() {
        let items: Vec<Item> = ["3", "8", "1", "5", "2", "2", "7", "6", "4"]
            .iter()
            .map(|identity| Item::new(*identity))
            .collect();

        let outcome = SortProcessor::process(items, &[]);
        assert!(outcome.is_success());
        assert_eq!(
            identities(&outcome),
            vec!["1", "2", "2", "3", "4", "5", "6", "7", "8"]
        );
    }

    #[test]
    fn test_multi_key_mixed_direction() {
        let items = vec![
            Item::with_metadata("a", [("Group", "2"), ("Rank", "1")]),
            Item::with_metadata("b", [("Group", "1"), ("Rank", "1")]),
            Item::with_metadata("c", [("Group", "1"), ("Rank", "3")]),
        ];

        let directives = vec!["Group".to_string(), "Rank desc".to_string()];
        let outcome = SortProcessor::process(items, &directives);
        assert!(outcome.is_success());
        assert_eq!(identities(&outcome), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_case_sensitive_identity_order() {
        let items: Vec<Item> = ["aaa", "BBB", "AAA", "bbb"].iter().map(|identity| Item::new(*identity)).collect();

        let outcome = SortProcessor::process(items, &["Identity c".to_string()]);
        assert!(outcome.is_success());
        assert_eq!(identities(&outcome), vec!["AAA", "BBB", "aaa", "bbb"]);
    }

    #[test]
    fn test_case_sensitive_descending_identity_order() {
        let items: Vec<Item> = ["aaa", "BBB", "AAA", "bbb"].iter().map(|identity| Item::new(*identity)).collect();

        let outcome = SortProcessor::process(items, &["Identity cdesc".to_string()]);
        assert!(outcome.is_success());
        assert_eq!(identities(&outcome), vec!["bbb", "aaa", "BBB", "AAA"]);
    }

    #[test]
    fn test_duplicate_keys_abort_without_reordering() {
        let items = vec![
            Item::with_metadata("z", [("Size", "2")]),
            Item::with_metadata("a", [("Size", "1")]),
        ];

        let directives = vec!["Size".to_string(), "size desc".to_string()];
        let outcome = SortProcessor::process(items, &directives);

        assert!(!outcome.is_success());
        assert!(matches!(
            outcome.errors[0],
            ItemError::DuplicateSortKey { .. }
        ));
        // Input order untouched
        assert_eq!(identities(&outcome), vec!["z", "a"]);
    }

    #[test]
    fn test_missing_metadata_aborts_the_whole_sort() {
        let items = vec![
            Item::with_metadata("z", [("Size", "2")]),
            Item::new("a"),
        ];

        let outcome = SortProcessor::process(items, &["Size".to_string()]);
        assert!(!outcome.is_success());
        assert_eq!(
            outcome.errors,
            vec![ItemError::MissingSortMetadata {
                key: "Size".to_string(),
                count: 1
            }]
        );
        assert_eq!(identities(&outcome), vec!["z", "a"]);
    }

    #[test]
    fn test_malformed_directive_is_dropped_but_sort_continues() {
        let items = vec![
            Item::with_metadata("b", [("Size", "2")]),
            Item::with_metadata("a", [("Size", "1")]),
        ];

        let directives = vec!["Size upward".to_string(), "Identity".to_string()];
        let outcome = SortProcessor::process(items, &directives);

        // The bad directive is reported, the surviving one still sorts
        assert!(!outcome.is_success());
        assert_eq!(outcome.errors.len(), 1);
        assert_eq!(identities(&outcome), vec!["a", "b"]);
    }
}
