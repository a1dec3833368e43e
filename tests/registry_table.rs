use anyhow::Result;

use keyspan::registry::{self, validate};
use keyspan::{local_max, meta2_key_max, Span, SpanSet};

#[test]
fn bounds_are_fixed_constants() {
    assert_eq!(local_max(), b"\x02");
    assert_eq!(meta2_key_max(), b"\x03\xff\xff");
    // Accessors на Registry отдают те же байты
    let r = keyspan::Registry::with_set(SpanSet::NoSplitSpans);
    assert_eq!(r.local_max(), local_max());
    assert_eq!(r.meta2_key_max(), meta2_key_max());
}

#[test]
fn every_span_has_start_before_end() {
    for set in SpanSet::ALL {
        for (i, s) in set.spans().iter().enumerate() {
            assert!(s.start < s.end, "set {} span #{} {} has start >= end", set, i, s);
        }
    }
}

#[test]
fn spans_are_ascending_and_disjoint() {
    for set in SpanSet::ALL {
        let spans = set.spans();
        for w in spans.windows(2) {
            assert!(
                w[0].end <= w[1].start,
                "set {}: {} overlaps or follows {}",
                set,
                w[0],
                w[1]
            );
        }
    }
}

#[test]
fn validated_is_ok_for_both_tables() -> Result<()> {
    for set in SpanSet::ALL {
        set.validated()?;
        // повторный вызов берёт закешированный результат
        set.validated()?;
    }
    Ok(())
}

#[test]
fn validate_rejects_broken_tables() {
    let degenerate = [Span::new(b"\x05", b"\x05")];
    assert!(matches!(
        validate("t", &degenerate),
        Err(keyspan::KeySpanError::InvalidTableSpan { index: 0, .. })
    ));

    let overlapping = [Span::new(b"", b"\x05"), Span::new(b"\x04", b"\x06")];
    assert!(matches!(
        validate("t", &overlapping),
        Err(keyspan::KeySpanError::UnsortedTable { index: 1, prev: 0, .. })
    ));

    let descending = [Span::new(b"\x88", b"\x93"), Span::new(b"", b"\x03")];
    assert!(validate("t", &descending).is_err());

    // касание концов допустимо
    let touching = [Span::new(b"", b"\x03"), Span::new(b"\x03", b"\x04")];
    assert!(validate("t", &touching).is_ok());
}

#[test]
fn sets_differ_only_in_meta_span_end() {
    let a = SpanSet::NoSplitSpans.spans();
    let b = SpanSet::NoSplitSpansWithoutMeta2Splits.spans();
    assert_eq!(a.len(), b.len());

    let meta = SpanSet::META_SPAN_INDEX;
    for i in 0..a.len() {
        if i == meta {
            assert_eq!(a[i].start, b[i].start, "meta span start must be identical");
            assert_eq!(a[i].end, b"\x03");
            assert_eq!(b[i].end, b"\x04");
        } else {
            assert_eq!(a[i], b[i], "span #{} must be byte-identical in both sets", i);
        }
    }

    // Собираем b из a заменой единственного конца: должно получиться ровно b
    let mut rebuilt: Vec<Span<'_>> = a.to_vec();
    rebuilt[meta].end = b"\x04";
    assert_eq!(rebuilt.as_slice(), b);
}

#[test]
fn span_set_names_round_trip() -> Result<()> {
    for set in SpanSet::ALL {
        let parsed: SpanSet = set.name().parse()?;
        assert_eq!(parsed, set);
    }
    assert!("meta2".parse::<SpanSet>().is_err());
    assert_eq!(SpanSet::for_meta2_splits(true), SpanSet::NoSplitSpans);
    assert_eq!(
        SpanSet::for_meta2_splits(false),
        SpanSet::NoSplitSpansWithoutMeta2Splits
    );
    Ok(())
}

#[test]
fn tables_are_shared_across_threads() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let set = SpanSet::ALL[i % 2];
                set.validated().is_ok() && registry::contains(set, b"\x90")
            })
        })
        .collect();
    for h in handles {
        assert!(h.join().unwrap_or(false));
    }
}
