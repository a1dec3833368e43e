use anyhow::{Context, Result};

use keyspan::cli::parse_key_arg;
use keyspan::{report, Span};

use super::util::{print_json, resolve_set};

pub fn exec(start: String, end: String, set: Option<String>, json: bool) -> Result<()> {
    let set = resolve_set(set)?;
    let s = parse_key_arg(&start)?;
    let e = parse_key_arg(&end)?;
    let r = report::overlaps(set, Span::new(&s, &e)).context("overlaps")?;

    if json {
        return print_json(&r);
    }
    if r.overlapping.is_empty() {
        println!("(no protected spans in [{}, {}))", r.start.escaped, r.end.escaped);
    } else {
        for sp in &r.overlapping {
            println!(
                "#{} {:<16} [{}, {})",
                sp.index,
                sp.subsystem.unwrap_or("-"),
                sp.start.escaped,
                sp.end.escaped
            );
        }
    }
    Ok(())
}
