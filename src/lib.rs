//! # itemflow
//!
//! In-memory relational operators over collections of named records
//! ("items"), each carrying an identity string and an ordered set of
//! string metadata.
//!
//! ## Features
//!
//! - **Multi-Key Sorting**: sort an item collection by any number of metadata
//!   keys, each with its own direction and case sensitivity, driven by a
//!   compact directive mini-language (`"Size desc"`, `"Identity cdesc"`)
//! - **Equi-Join**: one output item per matching (left, right) pair, with the
//!   right item's metadata overlaid onto the left item's
//! - **Group-Join**: exactly one output item per left item, aggregating the
//!   metadata of all matching right items
//! - **Metadata Exclusion**: names listed in a join's exclude set never reach
//!   the output items
//! - **Structured Errors**: every failure is a typed [`ItemError`] carrying
//!   the offending key, side, and count, surfaced both in the returned
//!   outcome and on the `log` facade
//!
//! ## Quick Start
//!
//! ```rust
//! use itemflow::{Item, JoinSpec, JoinProcessor, SortProcessor};
//!
//! let items = vec![
//!     Item::with_metadata("b.txt", [("Size", "200")]),
//!     Item::with_metadata("a.txt", [("Size", "900")]),
//! ];
//!
//! let sorted = SortProcessor::process(items, &["Size desc".to_string()]);
//! assert!(sorted.is_success());
//! assert_eq!(sorted.items[0].identity(), "a.txt");
//!
//! let customers = vec![Item::with_metadata("C1", [("Region", "east")])];
//! let orders = vec![Item::with_metadata("O1", [("CustomerId", "C1")])];
//! let spec = JoinSpec::new()
//!     .right_key("CustomerId")
//!     .exclude("CustomerId");
//! let joined = JoinProcessor::process(customers, orders, &spec);
//! assert_eq!(joined.items.len(), 1);
//! ```
//!
//! All operations are synchronous and act on fully materialized collections;
//! processors hold no state between calls.

pub mod item;

// Re-export the main API
pub use item::ast::{
    CaseSensitivity, JoinMode, JoinSide, JoinSpec, OrderDirection, OrderInstruction,
};
pub use item::error::{ItemError, ItemResult};
pub use item::execution::{ItemComparator, JoinProcessor, ProcessorOutcome, SortProcessor};
pub use item::parser::OrderSpecParser;
pub use item::types::Item;
