//! registry/query: запросы к no-split таблицам.
//!
//! Таблицы отсортированы по start и не пересекаются, поэтому концы тоже
//! отсортированы: бинарный поиск по start (contains) и по end (overlaps).
//! Линейные варианты оставлены для сверки в тестах и отладки; результаты обязаны совпадать.

use std::ops::Range;
use std::slice;

use crate::error::Result;
use crate::span::Span;

use super::SpanSet;

/// Index of the span with the greatest `start <= key`, if that span also has `key < end`.
pub fn position_containing(set: SpanSet, key: &[u8]) -> Option<usize> {
    let spans = set.spans();
    // число спанов с start <= key
    let n = spans.partition_point(|s| s.start <= key);
    if n > 0 && key < spans[n - 1].end {
        Some(n - 1)
    } else {
        None
    }
}

pub fn find_containing(set: SpanSet, key: &[u8]) -> Option<&'static Span<'static>> {
    position_containing(set, key).map(|i| &set.spans()[i])
}

/// `true` iff `start <= key < end` for some span of `set`.
#[inline]
pub fn contains(set: SpanSet, key: &[u8]) -> bool {
    position_containing(set, key).is_some()
}

pub fn contains_linear(set: SpanSet, key: &[u8]) -> bool {
    set.spans().iter().any(|s| s.contains(key))
}

/// `true` iff `start < key < end` for some span: splitting here would sever the span.
/// A split exactly at a span's start or end is allowed.
pub fn is_protected_split_key(set: SpanSet, key: &[u8]) -> bool {
    match find_containing(set, key) {
        Some(s) => s.start != key,
        None => false,
    }
}

pub fn is_protected_split_key_linear(set: SpanSet, key: &[u8]) -> bool {
    set.spans().iter().any(|s| s.contains_strictly(key))
}

/// Index range (into `set.spans()`) of the spans intersecting `[start, end)`.
/// `start >= end` is an invalid argument.
pub fn overlapping_range(set: SpanSet, candidate: Span<'_>) -> Result<Range<usize>> {
    candidate.check()?;
    let spans = set.spans();
    // первый спан, который заканчивается после candidate.start
    let first = spans.partition_point(|s| s.end <= candidate.start);
    // спаны с start >= candidate.end уже не пересекаются; first <= last, т.к. start < end
    let last = spans.partition_point(|s| s.start < candidate.end);
    Ok(first..last)
}

/// Protected spans intersecting the candidate range `[start, end)`, in ascending order.
///
/// The returned iterator is lazy and borrows only the static table, so calling
/// again with the same input yields the same sequence. `start >= end` is an
/// invalid argument.
pub fn spans_overlapping(
    set: SpanSet,
    candidate: Span<'_>,
) -> Result<slice::Iter<'static, Span<'static>>> {
    let range = overlapping_range(set, candidate)?;
    Ok(set.spans()[range].iter())
}
