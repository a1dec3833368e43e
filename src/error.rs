//! error: ошибки библиотеки.

use thiserror::Error;

use crate::util::escape_key;

pub type Result<T> = std::result::Result<T, KeySpanError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeySpanError {
    /// Caller passed a degenerate range (`start >= end`).
    #[error("invalid span: start {} must be less than end {}", escape_key(.start), escape_key(.end))]
    InvalidSpan { start: Vec<u8>, end: Vec<u8> },

    #[error("no-split table '{set}': span #{index} has start >= end")]
    InvalidTableSpan { set: &'static str, index: usize },

    #[error("no-split table '{set}': span #{index} overlaps or precedes span #{prev}")]
    UnsortedTable {
        set: &'static str,
        index: usize,
        prev: usize,
    },

    #[error("no-split table '{set}' differs from schema regeneration at span #{index}")]
    SchemaMismatch { set: &'static str, index: usize },

    #[error("invalid config value for {name}: '{value}'")]
    InvalidConfig { name: &'static str, value: String },

    #[error("invalid key argument '{arg}': {reason}")]
    InvalidKeyArg { arg: String, reason: String },

    #[error("unknown span set '{0}' (expected 'default' or 'without-meta2-splits')")]
    UnknownSet(String),

    #[error("span set not selected: set meta2_splits explicitly (env KEYSPAN_META2_SPLITS)")]
    SetNotSelected,
}
