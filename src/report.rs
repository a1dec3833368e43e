//! report: сериализуемые отчёты для отладочных инструментов (`keyspan --json`).
//!
//! Ключи выводятся дважды: hex (точно) и escaped (читаемо).

use serde::Serialize;

use crate::error::Result;
use crate::registry::{self, SpanSet};
use crate::schema::{self, subsystem_at};
use crate::span::Span;
use crate::util::{escape_key, to_hex};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct KeyView {
    pub hex: String,
    pub escaped: String,
}

impl KeyView {
    pub fn of(key: &[u8]) -> Self {
        Self {
            hex: to_hex(key),
            escaped: escape_key(key),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SpanReport {
    pub index: usize,
    pub subsystem: Option<&'static str>,
    pub start: KeyView,
    pub end: KeyView,
}

impl SpanReport {
    /// Row `index` of `set`; None when the set has no such row.
    pub fn at(set: SpanSet, index: usize) -> Option<Self> {
        set.spans().get(index).map(|s| Self::of(index, s))
    }

    fn of(index: usize, s: &Span<'_>) -> Self {
        Self {
            index,
            subsystem: subsystem_at(index).map(|x| x.name()),
            start: KeyView::of(s.start),
            end: KeyView::of(s.end),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BoundsReport {
    pub local_max: KeyView,
    pub meta2_key_max: KeyView,
}

pub fn bounds() -> BoundsReport {
    BoundsReport {
        local_max: KeyView::of(registry::local_max()),
        meta2_key_max: KeyView::of(registry::meta2_key_max()),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SetReport {
    pub set: &'static str,
    pub meta2_splits: bool,
    pub spans: Vec<SpanReport>,
}

pub fn dump(set: SpanSet) -> SetReport {
    SetReport {
        set: set.name(),
        meta2_splits: set.meta2_splits(),
        spans: set
            .spans()
            .iter()
            .enumerate()
            .map(|(i, s)| SpanReport::of(i, s))
            .collect(),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct KeyReport {
    pub set: &'static str,
    pub key: KeyView,
    pub contains: bool,
    pub protected_split_key: bool,
    /// Span that contains the key, if any.
    pub span: Option<SpanReport>,
}

pub fn classify_key(set: SpanSet, key: &[u8]) -> KeyReport {
    let span = registry::position_containing(set, key).and_then(|i| SpanReport::at(set, i));
    KeyReport {
        set: set.name(),
        key: KeyView::of(key),
        contains: span.is_some(),
        protected_split_key: registry::is_protected_split_key(set, key),
        span,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct OverlapReport {
    pub set: &'static str,
    pub start: KeyView,
    pub end: KeyView,
    pub overlapping: Vec<SpanReport>,
}

pub fn overlaps(set: SpanSet, candidate: Span<'_>) -> Result<OverlapReport> {
    let overlapping = registry::overlapping_range(set, candidate)?
        .filter_map(|i| SpanReport::at(set, i))
        .collect();
    Ok(OverlapReport {
        set: set.name(),
        start: KeyView::of(candidate.start),
        end: KeyView::of(candidate.end),
        overlapping,
    })
}

#[derive(Debug, Clone, Serialize)]
pub struct VerifyEntry {
    pub set: &'static str,
    pub invariants_ok: bool,
    pub matches_schema: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct VerifyReport {
    pub ok: bool,
    pub sets: Vec<VerifyEntry>,
}

/// Validate both tables and compare them with a fresh schema regeneration.
pub fn verify() -> VerifyReport {
    let sets: Vec<VerifyEntry> = SpanSet::ALL
        .iter()
        .map(|&set| {
            let inv = set.validated();
            let regen = schema::verify_set(set);
            let error = inv
                .as_ref()
                .err()
                .or(regen.as_ref().err())
                .map(|e| e.to_string());
            VerifyEntry {
                set: set.name(),
                invariants_ok: inv.is_ok(),
                matches_schema: regen.is_ok(),
                error,
            }
        })
        .collect();
    VerifyReport {
        ok: sets.iter().all(|e| e.invariants_ok && e.matches_schema),
        sets,
    }
}
