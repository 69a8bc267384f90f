//! Execution layer: comparators and batch processors for item collections.

pub mod comparator;
pub mod processors;
pub mod utils;

pub use comparator::ItemComparator;
pub use processors::{JoinProcessor, ProcessorOutcome, SortProcessor};
