//! Structured error types for item operations.
//!
//! Every failure an operator can raise is a typed [`ItemError`] variant
//! carrying named fields (offending key, side, count) rather than a
//! preassembled message string. Errors are non-fatal: processors collect them
//! into the returned outcome and emit them on the `log` facade, and the
//! caller decides overall success by checking whether anything was recorded.

use log::Level;
use thiserror::Error;

use crate::item::ast::JoinSide;

/// Result alias for operations that fail with a single [`ItemError`].
pub type ItemResult<T> = Result<T, ItemError>;

/// Errors raised by sorting and joining item collections.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ItemError {
    /// Two ordering instructions share a key, ignoring case. The whole sort
    /// is rejected and the input order is returned untouched.
    #[error("duplicate ordering key '{key}': ordering keys must be distinct ignoring case")]
    DuplicateSortKey { key: String },

    /// One or more items lack metadata required by an ordering key. The
    /// whole sort is rejected and the input order is returned untouched.
    #[error("{count} item(s) have no '{key}' metadata required for ordering")]
    MissingSortMetadata { key: String, count: usize },

    /// A directive carried an unrecognized trailing option token. Only that
    /// directive is dropped; the remaining directives still apply.
    #[error("unrecognized ordering option '{option}' in directive '{directive}'")]
    MalformedOrderOption { directive: String, option: String },

    /// One or more items on the named side lack the configured join key.
    /// The whole join is rejected with empty output.
    #[error("{count} {side} item(s) have no '{key}' metadata required for the join")]
    MissingJoinKey {
        side: JoinSide,
        key: String,
        count: usize,
    },
}

impl ItemError {
    /// Severity at which the error is emitted on the log channel.
    pub fn severity(&self) -> Level {
        Level::Error
    }
}
