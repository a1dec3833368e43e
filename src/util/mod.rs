//! util: общие утилиты форматирования ключей.
//!
//! Содержит:
//! - to_hex() / from_hex(): ключ в нижнем регистре hex без разделителей и обратно.
//! - escape_key(): читаемое представление ключа в кавычках ("\x04\x00liveness-").
//!
//! Ключи: произвольные байты, поэтому UTF-8 здесь не предполагается.

use std::fmt::Write as _;

/// Lowercase hex, no separators. Empty key -> "".
pub fn to_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .fold(String::with_capacity(bytes.len() * 2), |mut s, b| {
            // запись в String не падает
            let _ = write!(s, "{:02x}", b);
            s
        })
}

/// Inverse of [`to_hex`]; accepts upper- and lowercase digits.
/// Err carries a human-readable reason (odd length / bad digit position).
pub fn from_hex(s: &str) -> Result<Vec<u8>, String> {
    let digits = s.trim().as_bytes();
    if digits.len() % 2 != 0 {
        return Err(format!("odd number of hex digits ({})", digits.len()));
    }
    let nibble = |pos: usize| -> Result<u8, String> {
        (digits[pos] as char)
            .to_digit(16)
            .map(|d| d as u8)
            .ok_or_else(|| format!("invalid hex at pos {}", pos))
    };
    (0..digits.len())
        .step_by(2)
        .map(|i| -> Result<u8, String> { Ok(nibble(i)? << 4 | nibble(i + 1)?) })
        .collect()
}

/// Quoted, escaped rendering of a raw key: printable ASCII as-is, everything else as `\xNN`.
pub fn escape_key(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() + 2);
    out.push('"');
    for &b in bytes {
        match b {
            b'"' => out.push_str("\\\""),
            b'\\' => out.push_str("\\\\"),
            0x20..=0x7e => out.push(b as char),
            _ => out.push_str(&format!("\\x{:02x}", b)),
        }
    }
    out.push('"');
    out
}
