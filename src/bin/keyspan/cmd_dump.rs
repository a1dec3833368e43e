use anyhow::Result;

use keyspan::report::{self, SetReport};
use keyspan::SpanSet;

use super::util::{print_json, resolve_set};

pub fn exec(set: Option<String>, json: bool) -> Result<()> {
    // Без --set печатаем обе таблицы (env здесь не нужен: dump ничего не решает за splitter)
    let sets: Vec<SpanSet> = match set {
        Some(name) => vec![resolve_set(Some(name))?],
        None => SpanSet::ALL.to_vec(),
    };
    let reports: Vec<SetReport> = sets.into_iter().map(report::dump).collect();

    if json {
        return print_json(&reports);
    }
    for r in &reports {
        println!("{} (meta2_splits={}):", r.set, r.meta2_splits);
        for s in &r.spans {
            println!(
                "  #{} {:<16} [{}, {})",
                s.index,
                s.subsystem.unwrap_or("-"),
                s.start.escaped,
                s.end.escaped
            );
        }
    }
    Ok(())
}
