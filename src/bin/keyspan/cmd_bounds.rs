use anyhow::Result;

use keyspan::report;

pub fn exec(json: bool) -> Result<()> {
    let b = report::bounds();
    if json {
        return super::util::print_json(&b);
    }
    println!("LocalMax     {}  (hex {})", b.local_max.escaped, b.local_max.hex);
    println!("Meta2KeyMax  {}  (hex {})", b.meta2_key_max.escaped, b.meta2_key_max.hex);
    Ok(())
}
