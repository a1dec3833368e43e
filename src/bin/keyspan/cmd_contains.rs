use anyhow::Result;

use keyspan::cli::parse_key_arg;
use keyspan::report;

use super::util::{print_json, resolve_set};

/// CLI: contains: попадает ли ключ в какой-либо защищённый спан [start, end).
pub fn exec(key: String, set: Option<String>, json: bool) -> Result<()> {
    let set = resolve_set(set)?;
    let k = parse_key_arg(&key)?;
    let r = report::classify_key(set, &k);
    if json {
        return print_json(&r);
    }
    match &r.span {
        Some(s) => println!(
            "CONTAINED {} in #{} {} [{}, {})",
            r.key.escaped,
            s.index,
            s.subsystem.unwrap_or("-"),
            s.start.escaped,
            s.end.escaped
        ),
        None => println!("NOT CONTAINED {}", r.key.escaped),
    }
    Ok(())
}
