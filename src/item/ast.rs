//! Configuration values driving sort and join execution.
//!
//! These are immutable per-call values: callers build an instruction list or
//! a [`JoinSpec`] once per invocation and hand it to a processor. Nothing in
//! this module retains state between calls.

use std::collections::HashSet;
use std::fmt;

use crate::item::types::IDENTITY_NAME;

/// Sort direction for an ordering key
#[derive(Debug, Clone, PartialEq)]
pub enum OrderDirection {
    Asc,
    Desc,
}

impl Default for OrderDirection {
    fn default() -> Self {
        OrderDirection::Asc
    }
}

/// How an ordering key compares its metadata values
#[derive(Debug, Clone, PartialEq)]
pub enum CaseSensitivity {
    /// Locale-independent, case-insensitive comparison
    Insensitive,
    /// Exact ordinal comparison
    Sensitive,
}

impl Default for CaseSensitivity {
    fn default() -> Self {
        CaseSensitivity::Insensitive
    }
}

/// One ordering key: which metadata name to compare, in which direction,
/// with which case sensitivity.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderInstruction {
    /// Metadata name whose values are compared
    pub key: String,
    pub direction: OrderDirection,
    pub case_sensitivity: CaseSensitivity,
}

impl OrderInstruction {
    /// Ascending, case-insensitive instruction for `key`.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: OrderDirection::default(),
            case_sensitivity: CaseSensitivity::default(),
        }
    }

    pub fn descending(mut self) -> Self {
        self.direction = OrderDirection::Desc;
        self
    }

    pub fn case_sensitive(mut self) -> Self {
        self.case_sensitivity = CaseSensitivity::Sensitive;
        self
    }
}

/// The instruction applied when no directives are supplied: ascending,
/// case-insensitive identity order.
impl Default for OrderInstruction {
    fn default() -> Self {
        Self::new(IDENTITY_NAME)
    }
}

/// Which join input an error refers to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JoinSide {
    Left,
    Right,
}

impl fmt::Display for JoinSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JoinSide::Left => write!(f, "left"),
            JoinSide::Right => write!(f, "right"),
        }
    }
}

/// Join execution mode
#[derive(Debug, Clone, PartialEq)]
pub enum JoinMode {
    /// One output item per matching (left, right) pair; unmatched left items
    /// emit nothing
    Equi,
    /// Exactly one output item per left item, aggregating all matches
    /// (including none)
    Group,
}

impl Default for JoinMode {
    fn default() -> Self {
        JoinMode::Equi
    }
}

/// Configuration for one join invocation.
///
/// Defaults join both sides on their identity strings in equi mode with
/// nothing excluded.
///
/// # Example
///
/// ```rust
/// use itemflow::JoinSpec;
///
/// let spec = JoinSpec::new()
///     .right_key("CustomerId")
///     .exclude("CustomerId")
///     .group();
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JoinSpec {
    left_key: Option<String>,
    right_key: Option<String>,
    /// Metadata names skipped from every merge into an output item
    pub exclude_metadata: HashSet<String>,
    pub mode: JoinMode,
}

impl JoinSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Metadata name matched on the left side (defaults to `Identity`).
    pub fn left_key(mut self, key: impl Into<String>) -> Self {
        self.left_key = Some(key.into());
        self
    }

    /// Metadata name matched on the right side (defaults to `Identity`).
    pub fn right_key(mut self, key: impl Into<String>) -> Self {
        self.right_key = Some(key.into());
        self
    }

    /// Add a metadata name to the exclude set.
    pub fn exclude(mut self, name: impl Into<String>) -> Self {
        self.exclude_metadata.insert(name.into());
        self
    }

    /// Switch from equi mode to group mode.
    pub fn group(mut self) -> Self {
        self.mode = JoinMode::Group;
        self
    }

    /// The effective left-side key name.
    pub fn left_key_name(&self) -> &str {
        self.left_key.as_deref().unwrap_or(IDENTITY_NAME)
    }

    /// The effective right-side key name.
    pub fn right_key_name(&self) -> &str {
        self.right_key.as_deref().unwrap_or(IDENTITY_NAME)
    }
}
