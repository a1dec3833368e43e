use std::collections::HashMap;

use anyhow::Result;

use keyspan::{KeySpanError, Registry, RegistryBuilder, RegistryConfig, SpanSet};

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| map.get(name).cloned()
}

#[test]
fn default_config_has_no_selection() {
    let cfg = RegistryConfig::default();
    assert_eq!(cfg.meta2_splits, None);
    assert!(cfg.verify_on_init);
    assert_eq!(cfg.span_set(), Err(KeySpanError::SetNotSelected));
    assert!(matches!(Registry::open(&cfg), Err(KeySpanError::SetNotSelected)));
    assert!(cfg.to_string().contains("meta2_splits: unset"));
}

#[test]
fn env_selects_span_set() -> Result<()> {
    let cfg = RegistryConfig::from_lookup(lookup_from(&[("KEYSPAN_META2_SPLITS", "yes")]))?;
    assert_eq!(cfg.span_set()?, SpanSet::NoSplitSpans);

    let cfg = RegistryConfig::from_lookup(lookup_from(&[
        ("KEYSPAN_META2_SPLITS", " OFF "),
        ("KEYSPAN_VERIFY_ON_INIT", "0"),
    ]))?;
    assert_eq!(cfg.span_set()?, SpanSet::NoSplitSpansWithoutMeta2Splits);
    assert!(!cfg.verify_on_init);

    // пустое значение == не задано
    let cfg = RegistryConfig::from_lookup(lookup_from(&[("KEYSPAN_META2_SPLITS", "")]))?;
    assert_eq!(cfg.meta2_splits, None);
    Ok(())
}

#[test]
fn malformed_env_value_is_an_error() {
    let res = RegistryConfig::from_lookup(lookup_from(&[("KEYSPAN_META2_SPLITS", "maybe")]));
    assert_eq!(
        res,
        Err(KeySpanError::InvalidConfig {
            name: "KEYSPAN_META2_SPLITS",
            value: "maybe".to_string()
        })
    );
}

#[test]
fn builder_and_fluent_setters_agree() -> Result<()> {
    let a = RegistryBuilder::new()
        .span_set(SpanSet::NoSplitSpansWithoutMeta2Splits)
        .verify_on_init(false)
        .build();
    let b = RegistryConfig::default()
        .with_meta2_splits(false)
        .with_verify_on_init(false);
    assert_eq!(a, b);
    assert_eq!(
        RegistryConfig::default().with_span_set(SpanSet::NoSplitSpans),
        RegistryBuilder::new().meta2_splits(true).build()
    );
    Ok(())
}

#[test]
fn registry_open_binds_selected_set() -> Result<()> {
    let cfg = RegistryBuilder::new().meta2_splits(true).build();
    let r = Registry::open(&cfg)?;
    assert_eq!(r.set(), SpanSet::NoSplitSpans);
    assert_eq!(r.spans().len(), 3);

    assert!(r.contains(b"\x88"));
    assert!(!r.is_protected_split_key(b"\x88"));
    assert!(r.is_protected_split_key(b"\x90"));
    assert!(!r.contains(b"\x03\x00"));
    assert_eq!(r.find_containing(b"\x90").map(|s| s.end), Some(&b"\x93"[..]));
    assert_eq!(r.spans_overlapping(keyspan::Span::new(b"\x03", b"\x89"))?.count(), 2);

    let r2 = Registry::open(&RegistryBuilder::new().meta2_splits(false).build())?;
    assert!(r2.contains(b"\x03\x00"));
    Ok(())
}
