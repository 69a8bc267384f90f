// Relational item operators for itemflow
// Provides multi-key sorting and equi/group joins over metadata-carrying items

pub mod ast;
pub mod error;
pub mod execution;
pub mod parser;
pub mod types;

// Re-export main API
pub use ast::{CaseSensitivity, JoinMode, JoinSide, JoinSpec, OrderDirection, OrderInstruction};
pub use error::{ItemError, ItemResult};
pub use execution::{ItemComparator, JoinProcessor, ProcessorOutcome, SortProcessor};
pub use parser::OrderSpecParser;
pub use types::{Item, IDENTITY_NAME};

// Version and feature info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const FEATURES: &[&str] = &[
    "multi_key_sort",       // any number of ordering keys, first difference wins
    "order_directives",     // "key [c][asc|desc]" mini-language
    "case_sensitivity",     // ordinal vs ordinal-ignore-case per key
    "equi_join",            // one output item per matching pair
    "group_join",           // one output item per left item, matches aggregated
    "metadata_exclusion",   // exclude set applied to every metadata merge
    "structured_errors",    // typed errors with key/side/count fields
];
