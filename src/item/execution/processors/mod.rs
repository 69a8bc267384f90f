//! Processors for item collection operations
//!
//! This module contains the batch processors exposed by the crate:
//! - Sorting (multi-key, mixed direction, mixed case sensitivity)
//! - Joining (equi and group modes, with metadata exclusion)
//! - Validation shared by both

pub mod join;
pub mod merger;
pub mod sort;
pub mod validation;

pub use join::JoinProcessor;
pub use sort::SortProcessor;

use log::log;

use crate::item::error::ItemError;
use crate::item::types::Item;

/// Best-effort result of one processor invocation.
///
/// Processors never panic or abort: they return whatever output the operation
/// could produce together with the structured errors raised along the way.
/// Each recorded error is also emitted on the `log` facade at its severity,
/// so callers may either inspect [`ProcessorOutcome::errors`] or watch the
/// log channel.
#[derive(Debug, Default)]
pub struct ProcessorOutcome {
    /// Output items (possibly empty, possibly the unmodified input on an
    /// aborted sort)
    pub items: Vec<Item>,
    /// Errors raised while producing `items`, in detection order
    pub errors: Vec<ItemError>,
}

impl ProcessorOutcome {
    /// Log an error at its severity and keep it in the outcome.
    pub(crate) fn record(&mut self, error: ItemError) {
        log!(error.severity(), "{}", error);
        self.errors.push(error);
    }

    /// Overall success: no errors were recorded during the invocation.
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}
