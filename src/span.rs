//! span: полуинтервал ключей [start, end) и порядок байтовых строк.
//!
//! Порядок везде один: unsigned lexicographic по сырым байтам, более короткий
//! префикс меньше (ровно `Ord` для `[u8]`). Никаких locale/signed сравнений.

use std::fmt;

use crate::error::{KeySpanError, Result};
use crate::util::escape_key;

/// Half-open key interval `[start, end)` borrowing its bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Span<'a> {
    pub start: &'a [u8],
    pub end: &'a [u8],
}

impl<'a> Span<'a> {
    /// Unchecked constructor, usable in `static` tables.
    pub const fn new(start: &'a [u8], end: &'a [u8]) -> Self {
        Self { start, end }
    }

    /// Checked constructor: rejects `start >= end` as an invalid argument.
    pub fn try_new(start: &'a [u8], end: &'a [u8]) -> Result<Self> {
        let s = Self { start, end };
        s.check()?;
        Ok(s)
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.start < self.end
    }

    pub fn check(&self) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(KeySpanError::InvalidSpan {
                start: self.start.to_vec(),
                end: self.end.to_vec(),
            })
        }
    }

    /// `start <= key < end`
    #[inline]
    pub fn contains(&self, key: &[u8]) -> bool {
        self.start <= key && key < self.end
    }

    /// `start < key < end`: a split at this key would cut the span in two.
    #[inline]
    pub fn contains_strictly(&self, key: &[u8]) -> bool {
        self.start < key && key < self.end
    }

    /// Both spans are half-open, so touching bounds do not overlap.
    #[inline]
    pub fn overlaps(&self, other: &Span<'_>) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for Span<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", escape_key(self.start), escape_key(self.end))
    }
}

/// Owned counterpart of [`Span`]; produced by schema regeneration.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct OwnedSpan {
    pub start: Vec<u8>,
    pub end: Vec<u8>,
}

impl OwnedSpan {
    pub fn as_span(&self) -> Span<'_> {
        Span::new(&self.start, &self.end)
    }
}

impl fmt::Display for OwnedSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_span().fmt(f)
    }
}

/// Smallest key that sorts after every key carrying `prefix`.
///
/// Trailing 0xff bytes are dropped and the last remaining byte is incremented.
/// An empty or all-0xff prefix has no such bound; it is returned unchanged.
pub fn prefix_end(prefix: &[u8]) -> Vec<u8> {
    match prefix.iter().rposition(|&b| b != 0xff) {
        Some(i) => {
            let mut out = prefix[..=i].to_vec();
            out[i] += 1;
            out
        }
        None => prefix.to_vec(),
    }
}
