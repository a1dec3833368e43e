use anyhow::Result;
use log::{error, info};

use keyspan::{cli, report};

use super::util::print_json;

/// Exit 0 when both tables are well-formed and match the schema, 1 otherwise.
pub fn exec(json: bool) -> Result<i32> {
    let r = report::verify();
    if json {
        print_json(&r)?;
    } else {
        for e in &r.sets {
            println!(
                "{:<22} invariants={} schema={}{}",
                e.set,
                if e.invariants_ok { "ok" } else { "FAIL" },
                if e.matches_schema { "ok" } else { "FAIL" },
                e.error.as_ref().map(|s| format!("  ({s})")).unwrap_or_default()
            );
        }
    }
    let code = cli::verify_exit_code(&r);
    if code == cli::EXIT_OK {
        info!("verify: all no-split tables ok");
    } else {
        error!("verify: no-split tables do not match the schema");
    }
    Ok(code)
}
