// Regenerated from schema::generate(); do not edit by hand.
// Граничные ключи (LOCAL_MAX, META2_KEY_MAX) живут в consts, здесь только спаны.
// Проверяется тестом tests/schema_regen.rs.

use crate::span::Span;

pub static NO_SPLIT_SPANS: [Span<'static>; 3] = [
    Span::new(b"", b"\x03"),
    Span::new(
        b"\x04\x00\x6c\x69\x76\x65\x6e\x65\x73\x73\x2d",
        b"\x04\x00\x6c\x69\x76\x65\x6e\x65\x73\x73\x2e",
    ),
    Span::new(b"\x88", b"\x93"),
];

pub static NO_SPLIT_SPANS_WITHOUT_META2_SPLITS: [Span<'static>; 3] = [
    Span::new(b"", b"\x04"),
    Span::new(
        b"\x04\x00\x6c\x69\x76\x65\x6e\x65\x73\x73\x2d",
        b"\x04\x00\x6c\x69\x76\x65\x6e\x65\x73\x73\x2e",
    ),
    Span::new(b"\x88", b"\x93"),
];
