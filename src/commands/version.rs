//! Version command

use anyhow::Result;

use crate::ui::views::version::render_version;

pub fn cmd_version(json: bool) -> Result<()> {
    let version = env!("CARGO_PKG_VERSION");
    if json {
        crate::ui::json::emit(serde_json::json!({
            "event": "version",
            "command": "version",
            "version": version,
        }))?;
    } else {
        println!("{}", render_version(version));
    }
    Ok(())
}
