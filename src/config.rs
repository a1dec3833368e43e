//! Centralized configuration for the no-split registry.
//!
//! Goals:
//! - One place for the span-set selection instead of scattering env lookups.
//! - No implicit default for the selection: the meta2 split policy belongs to the
//!   range splitter, so it must be set explicitly (env or builder).
//!
//! Env:
//! - KEYSPAN_META2_SPLITS = 1|true|on|yes  -> NoSplitSpans
//!                          0|false|off|no -> NoSplitSpansWithoutMeta2Splits
//! - KEYSPAN_VERIFY_ON_INIT = 0|1 (default 1): check table invariants in Registry::open

use std::fmt;

use crate::consts::{ENV_META2_SPLITS, ENV_VERIFY_ON_INIT};
use crate::error::{KeySpanError, Result};
use crate::registry::SpanSet;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Whether the splitter may split meta2 ranges. None = not decided yet.
    /// Env: KEYSPAN_META2_SPLITS
    pub meta2_splits: Option<bool>,

    /// Validate table invariants when a Registry is opened.
    /// Env: KEYSPAN_VERIFY_ON_INIT (default true)
    pub verify_on_init: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            meta2_splits: None,
            verify_on_init: true,
        }
    }
}

fn parse_bool(name: &'static str, v: &str) -> Result<bool> {
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Ok(true),
        "0" | "false" | "off" | "no" => Ok(false),
        _ => Err(KeySpanError::InvalidConfig {
            name,
            value: v.to_string(),
        }),
    }
}

impl RegistryConfig {
    /// Load configuration from environment variables.
    /// Unlike a silent fallback, a malformed value is an error.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as from_env, but with an injectable lookup (tests, embedding hosts).
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(v) = lookup(ENV_META2_SPLITS) {
            if !v.trim().is_empty() {
                cfg.meta2_splits = Some(parse_bool(ENV_META2_SPLITS, &v)?);
            }
        }

        if let Some(v) = lookup(ENV_VERIFY_ON_INIT) {
            if !v.trim().is_empty() {
                cfg.verify_on_init = parse_bool(ENV_VERIFY_ON_INIT, &v)?;
            }
        }

        Ok(cfg)
    }

    pub fn with_meta2_splits(mut self, on: bool) -> Self {
        self.meta2_splits = Some(on);
        self
    }

    /// Select by set directly (equivalent to the matching meta2_splits value).
    pub fn with_span_set(mut self, set: SpanSet) -> Self {
        self.meta2_splits = Some(set.meta2_splits());
        self
    }

    pub fn with_verify_on_init(mut self, on: bool) -> Self {
        self.verify_on_init = on;
        self
    }

    /// The selected table; SetNotSelected when meta2_splits was never decided.
    pub fn span_set(&self) -> Result<SpanSet> {
        self.meta2_splits
            .map(SpanSet::for_meta2_splits)
            .ok_or(KeySpanError::SetNotSelected)
    }
}

impl fmt::Display for RegistryConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RegistryConfig {{ meta2_splits: {}, verify_on_init: {} }}",
            self.meta2_splits
                .map(|v| v.to_string())
                .unwrap_or_else(|| "unset".to_string()),
            self.verify_on_init,
        )
    }
}

/// Lightweight builder producing a RegistryConfig.
#[derive(Clone, Debug, Default)]
pub struct RegistryBuilder {
    cfg: RegistryConfig,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from env (errors on malformed values).
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            cfg: RegistryConfig::from_env()?,
        })
    }

    pub fn meta2_splits(mut self, on: bool) -> Self {
        self.cfg.meta2_splits = Some(on);
        self
    }

    pub fn span_set(mut self, set: SpanSet) -> Self {
        self.cfg.meta2_splits = Some(set.meta2_splits());
        self
    }

    pub fn verify_on_init(mut self, on: bool) -> Self {
        self.cfg.verify_on_init = on;
        self
    }

    pub fn build(self) -> RegistryConfig {
        self.cfg
    }
}
