use anyhow::{Context, Result};

use keyspan::{cli, RegistryConfig, SpanSet};

/// --set wins; env is only consulted when it is absent.
pub fn resolve_set(set: Option<String>) -> Result<SpanSet> {
    let cfg = match set {
        Some(_) => RegistryConfig::default(),
        None => RegistryConfig::from_env().context("read registry config from env")?,
    };
    cli::resolve_set(set.as_deref(), &cfg).context("select span set (--set or KEYSPAN_META2_SPLITS)")
}

pub fn print_json<T: serde::Serialize>(v: &T) -> Result<()> {
    println!("{}", serde_json::to_string(v)?);
    Ok(())
}
