//! cli: библиотечная часть `keyspan`: разбор ключей-аргументов, выбор таблицы, коды выхода.
//!
//! Бинарь (src/bin/keyspan) только печатает; всё, что определяет поведение, живёт здесь.
//!
//! Синтаксис ключа:
//! - "hex:<digits>"  сырые байты
//! - "-" или ""      пустой ключ (начало keyspace)
//! - иначе           UTF-8 литерал как есть
//!
//! Коды выхода: 0 ok / splittable, 1 ошибка или verify FAIL, 2 protected split key.

use crate::config::RegistryConfig;
use crate::error::{KeySpanError, Result};
use crate::registry::SpanSet;
use crate::report::{self, KeyReport, VerifyReport};
use crate::util::from_hex;

pub const EXIT_OK: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
/// split-check: the key lies strictly inside a protected span. Not an error.
pub const EXIT_PROTECTED: i32 = 2;

pub fn parse_key_arg(arg: &str) -> Result<Vec<u8>> {
    if arg.is_empty() || arg == "-" {
        return Ok(Vec::new());
    }
    match arg.strip_prefix("hex:") {
        Some(hx) => from_hex(hx).map_err(|reason| KeySpanError::InvalidKeyArg {
            arg: arg.to_string(),
            reason,
        }),
        None => Ok(arg.as_bytes().to_vec()),
    }
}

/// Explicit --set wins; otherwise the selection carried by `cfg` (env KEYSPAN_META2_SPLITS).
pub fn resolve_set(set: Option<&str>, cfg: &RegistryConfig) -> Result<SpanSet> {
    match set {
        Some(name) => name.parse(),
        None => cfg.span_set(),
    }
}

pub fn split_check_exit_code(r: &KeyReport) -> i32 {
    if r.protected_split_key {
        EXIT_PROTECTED
    } else {
        EXIT_OK
    }
}

pub fn verify_exit_code(r: &VerifyReport) -> i32 {
    if r.ok {
        EXIT_OK
    } else {
        EXIT_FAILURE
    }
}

/// Parse `key_arg` and classify it against `set`; returns the report and the exit code.
pub fn split_check(set: SpanSet, key_arg: &str) -> Result<(KeyReport, i32)> {
    let key = parse_key_arg(key_arg)?;
    let r = report::classify_key(set, &key);
    let code = split_check_exit_code(&r);
    Ok((r, code))
}
