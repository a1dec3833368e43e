//! registry: реестр no-split спанов и граничных ключей.
//!
//! Раскладка:
//! - table.rs : сгенерированные статические таблицы (см. schema::generate)
//! - query.rs : запросы: contains / is_protected_split_key / spans_overlapping
//!
//! Таблицы - `static` данные процесса: без мутаций, без teardown, читаются из
//! любого числа потоков без синхронизации. Проверка инвариантов (start < end,
//! отсортированность без пересечений) выполняется один раз через OnceLock.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use log::debug;

use crate::config::RegistryConfig;
use crate::consts;
use crate::error::{KeySpanError, Result};
use crate::span::Span;

mod query;
pub mod table;

pub use query::{
    contains, contains_linear, find_containing, is_protected_split_key,
    is_protected_split_key_linear, overlapping_range, position_containing, spans_overlapping,
};

/// First key not in the local key subspace (`0x02`).
#[inline]
pub fn local_max() -> &'static [u8] {
    consts::LOCAL_MAX
}

/// First key past the meta2 addressing subspace (`0x03 0xff 0xff`).
#[inline]
pub fn meta2_key_max() -> &'static [u8] {
    consts::META2_KEY_MAX
}

/// Which no-split table to consult.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpanSet {
    /// Meta addressing span is `["", 0x03)`: meta2 itself may be split.
    NoSplitSpans,
    /// Meta addressing span is `["", 0x04)`: no split anywhere in meta1/meta2.
    NoSplitSpansWithoutMeta2Splits,
}

impl SpanSet {
    pub const ALL: [SpanSet; 2] = [SpanSet::NoSplitSpans, SpanSet::NoSplitSpansWithoutMeta2Splits];

    /// Index of the meta addressing span inside both tables.
    pub const META_SPAN_INDEX: usize = 0;

    /// Maps the splitter's "are meta2 ranges allowed to split" switch onto a table.
    pub fn for_meta2_splits(meta2_splits: bool) -> Self {
        if meta2_splits {
            SpanSet::NoSplitSpans
        } else {
            SpanSet::NoSplitSpansWithoutMeta2Splits
        }
    }

    pub fn spans(self) -> &'static [Span<'static>] {
        match self {
            SpanSet::NoSplitSpans => &table::NO_SPLIT_SPANS,
            SpanSet::NoSplitSpansWithoutMeta2Splits => &table::NO_SPLIT_SPANS_WITHOUT_META2_SPLITS,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SpanSet::NoSplitSpans => "default",
            SpanSet::NoSplitSpansWithoutMeta2Splits => "without-meta2-splits",
        }
    }

    pub fn meta2_splits(self) -> bool {
        matches!(self, SpanSet::NoSplitSpans)
    }

    /// Result of the one-time table check (cached for the process lifetime).
    pub fn validated(self) -> Result<()> {
        static DEFAULT: OnceLock<Result<()>> = OnceLock::new();
        static WITHOUT_META2: OnceLock<Result<()>> = OnceLock::new();
        let cell = match self {
            SpanSet::NoSplitSpans => &DEFAULT,
            SpanSet::NoSplitSpansWithoutMeta2Splits => &WITHOUT_META2,
        };
        cell.get_or_init(|| {
            let res = validate(self.name(), self.spans());
            debug!(
                "registry: validated no-split table '{}' ({} spans): {}",
                self.name(),
                self.spans().len(),
                if res.is_ok() { "ok" } else { "FAILED" }
            );
            res
        })
        .clone()
    }
}

impl fmt::Display for SpanSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SpanSet {
    type Err = KeySpanError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" | "no-split-spans" => Ok(SpanSet::NoSplitSpans),
            "without-meta2-splits" | "no-split-spans-without-meta2-splits" => {
                Ok(SpanSet::NoSplitSpansWithoutMeta2Splits)
            }
            _ => Err(KeySpanError::UnknownSet(s.to_string())),
        }
    }
}

/// Check `start < end` for every span and `prev.end <= next.start` between neighbours.
pub fn validate(set: &'static str, spans: &[Span<'_>]) -> Result<()> {
    for (i, s) in spans.iter().enumerate() {
        if !s.is_valid() {
            return Err(KeySpanError::InvalidTableSpan { set, index: i });
        }
        if i > 0 && spans[i - 1].end > s.start {
            return Err(KeySpanError::UnsortedTable {
                set,
                index: i,
                prev: i - 1,
            });
        }
    }
    Ok(())
}

/// Handle bound to one span set, chosen from configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Registry {
    set: SpanSet,
}

impl Registry {
    /// Bind to `cfg`'s selection; fails if no set was selected.
    /// With `verify_on_init` the table invariants are checked (once per process).
    pub fn open(cfg: &RegistryConfig) -> Result<Self> {
        let set = cfg.span_set()?;
        if cfg.verify_on_init {
            set.validated()?;
        }
        Ok(Self { set })
    }

    pub fn with_set(set: SpanSet) -> Self {
        Self { set }
    }

    pub fn set(&self) -> SpanSet {
        self.set
    }

    pub fn spans(&self) -> &'static [Span<'static>] {
        self.set.spans()
    }

    pub fn local_max(&self) -> &'static [u8] {
        local_max()
    }

    pub fn meta2_key_max(&self) -> &'static [u8] {
        meta2_key_max()
    }

    pub fn contains(&self, key: &[u8]) -> bool {
        contains(self.set, key)
    }

    pub fn find_containing(&self, key: &[u8]) -> Option<&'static Span<'static>> {
        find_containing(self.set, key)
    }

    pub fn is_protected_split_key(&self, key: &[u8]) -> bool {
        is_protected_split_key(self.set, key)
    }

    pub fn spans_overlapping(
        &self,
        candidate: Span<'_>,
    ) -> Result<std::slice::Iter<'static, Span<'static>>> {
        spans_overlapping(self.set, candidate)
    }
}
