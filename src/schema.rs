//! schema: единственный источник истины для no-split таблиц.
//!
//! Каждая зарезервированная подсистема описывается через префиксы из consts;
//! generate() материализует таблицу в порядке возрастания start. registry/table.rs
//! является результатом generate() и сверяется с ним в тестах (и командой `keyspan verify`).

use log::debug;

use crate::consts::{
    META2_PREFIX, META_MAX, NODE_LIVENESS_SUFFIX, SYSTEM_CONFIG_TABLE_DATA_MAX,
    SYSTEM_CONFIG_TABLE_DATA_MIN, SYSTEM_PREFIX,
};
use crate::error::{KeySpanError, Result};
use crate::registry::SpanSet;
use crate::span::{prefix_end, OwnedSpan};

/// Store subsystems whose keys must never be split across two ranges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReservedSubsystem {
    MetaAddressing,
    NodeLiveness,
    SystemConfig,
}

impl ReservedSubsystem {
    /// Ascending by the start of the span each one produces.
    pub const ALL: [ReservedSubsystem; 3] = [
        ReservedSubsystem::MetaAddressing,
        ReservedSubsystem::NodeLiveness,
        ReservedSubsystem::SystemConfig,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ReservedSubsystem::MetaAddressing => "meta-addressing",
            ReservedSubsystem::NodeLiveness => "node-liveness",
            ReservedSubsystem::SystemConfig => "system-config",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ReservedSubsystem::MetaAddressing => {
                "range addressing records; all meta1 records live in the first range"
            }
            ReservedSubsystem::NodeLiveness => "node liveness heartbeats; kept in a single range",
            ReservedSubsystem::SystemConfig => "system config tables; gossiped as one range",
        }
    }

    /// Span protected for this subsystem. Only the meta addressing span depends on `meta2_splits`.
    pub fn span(self, meta2_splits: bool) -> OwnedSpan {
        match self {
            ReservedSubsystem::MetaAddressing => OwnedSpan {
                start: Vec::new(),
                end: if meta2_splits {
                    META2_PREFIX.to_vec()
                } else {
                    META_MAX.to_vec()
                },
            },
            ReservedSubsystem::NodeLiveness => {
                let mut prefix = SYSTEM_PREFIX.to_vec();
                prefix.extend_from_slice(NODE_LIVENESS_SUFFIX);
                let end = prefix_end(&prefix);
                OwnedSpan { start: prefix, end }
            }
            ReservedSubsystem::SystemConfig => OwnedSpan {
                start: SYSTEM_CONFIG_TABLE_DATA_MIN.to_vec(),
                end: SYSTEM_CONFIG_TABLE_DATA_MAX.to_vec(),
            },
        }
    }
}

/// Materialize the no-split table for the given meta2 split policy.
pub fn generate(meta2_splits: bool) -> Vec<OwnedSpan> {
    ReservedSubsystem::ALL
        .iter()
        .map(|s| s.span(meta2_splits))
        .collect()
}

/// Subsystem owning the span at `index` of either table.
pub fn subsystem_at(index: usize) -> Option<ReservedSubsystem> {
    ReservedSubsystem::ALL.get(index).copied()
}

/// Compare a compiled-in table against a fresh regeneration.
pub fn verify_set(set: SpanSet) -> Result<()> {
    let fresh = generate(set.meta2_splits());
    let table = set.spans();
    let n = fresh.len().max(table.len());
    for i in 0..n {
        let same = match (table.get(i), fresh.get(i)) {
            (Some(t), Some(f)) => *t == f.as_span(),
            _ => false,
        };
        if !same {
            return Err(KeySpanError::SchemaMismatch {
                set: set.name(),
                index: i,
            });
        }
    }
    debug!("schema: table '{}' matches regeneration ({} spans)", set.name(), n);
    Ok(())
}
