use anyhow::Result;

use keyspan::consts::{LOCAL_PREFIX, META1_PREFIX, META2_PREFIX, META_MAX};
use keyspan::schema::{generate, subsystem_at, verify_set, ReservedSubsystem};
use keyspan::{local_max, meta2_key_max, prefix_end, Span, SpanSet};

#[test]
fn compiled_tables_match_fresh_regeneration() -> Result<()> {
    for set in SpanSet::ALL {
        let fresh = generate(set.meta2_splits());
        let table = set.spans();
        assert_eq!(fresh.len(), table.len(), "set {}", set);
        for (i, (t, f)) in table.iter().zip(fresh.iter()).enumerate() {
            assert_eq!(*t, f.as_span(), "set {} span #{} drifted from schema", set, i);
        }
        verify_set(set)?;
    }
    Ok(())
}

#[test]
fn bounds_derive_from_prefixes() {
    assert_eq!(prefix_end(LOCAL_PREFIX), local_max().to_vec());

    let mut m2 = META2_PREFIX.to_vec();
    m2.extend_from_slice(b"\xff\xff");
    assert_eq!(m2.as_slice(), meta2_key_max());

    // meta1 заканчивается там, где начинается meta2
    assert_eq!(prefix_end(META1_PREFIX), META2_PREFIX.to_vec());

    // конец всей meta-области = конец meta-спана без meta2 splits
    assert_eq!(prefix_end(META2_PREFIX), META_MAX.to_vec());
    assert_eq!(prefix_end(meta2_key_max()), META_MAX.to_vec());
}

#[test]
fn regeneration_toggles_only_meta_span() {
    let on = generate(true);
    let off = generate(false);
    assert_eq!(on.len(), off.len());

    let diffs: Vec<usize> = (0..on.len()).filter(|&i| on[i] != off[i]).collect();
    assert_eq!(diffs, vec![SpanSet::META_SPAN_INDEX]);

    let i = SpanSet::META_SPAN_INDEX;
    assert_eq!(on[i].start, off[i].start);
    assert_eq!(on[i].as_span(), Span::new(b"", b"\x03"));
    assert_eq!(off[i].as_span(), Span::new(b"", b"\x04"));
}

#[test]
fn subsystems_line_up_with_table_rows() {
    assert_eq!(subsystem_at(0), Some(ReservedSubsystem::MetaAddressing));
    assert_eq!(subsystem_at(1), Some(ReservedSubsystem::NodeLiveness));
    assert_eq!(subsystem_at(2), Some(ReservedSubsystem::SystemConfig));
    assert_eq!(subsystem_at(3), None);

    let liveness = ReservedSubsystem::NodeLiveness.span(true);
    assert_eq!(liveness.start, b"\x04\x00liveness-".to_vec());
    assert_eq!(liveness.end, b"\x04\x00liveness.".to_vec());

    for s in ReservedSubsystem::ALL {
        assert!(!s.description().is_empty());
        assert_eq!(s.span(true) == s.span(false), s != ReservedSubsystem::MetaAddressing);
    }
}
