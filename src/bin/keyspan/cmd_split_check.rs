use anyhow::Result;
use log::info;

use keyspan::cli;

use super::util::{print_json, resolve_set};

/// CLI: split-check. Защищённый ключ - не ошибка: splitter должен выбрать другой ключ или отложить split.
pub fn exec(key: String, set: Option<String>, json: bool) -> Result<i32> {
    let set = resolve_set(set)?;
    let (r, code) = cli::split_check(set, &key)?;

    if json {
        print_json(&r)?;
    } else if r.protected_split_key {
        let s = r.span.as_ref();
        println!(
            "PROTECTED {} (strictly inside {} [{}, {}))",
            r.key.escaped,
            s.and_then(|s| s.subsystem).unwrap_or("-"),
            s.map(|s| s.start.escaped.as_str()).unwrap_or(""),
            s.map(|s| s.end.escaped.as_str()).unwrap_or(""),
        );
    } else {
        println!("SPLITTABLE {}", r.key.escaped);
    }

    if code == cli::EXIT_PROTECTED {
        info!("split-check: key {} is protected in set '{}'", r.key.hex, r.set);
    }
    Ok(code)
}
