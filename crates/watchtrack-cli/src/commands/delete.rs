use super::{print_summary, AppContext};
use crate::output::Output;
use color_eyre::Result;
use serde_json::json;

pub fn run_delete(id: &str, ctx: &AppContext, output: &Output) -> Result<()> {
    let mut ledger = ctx.open_ledger()?;
    let title = ledger.get(id).map(|s| s.title.clone());
    let removed = ledger.delete(id)?;

    if output.is_human() {
        match title {
            Some(title) if removed => output.success(format!("Deleted '{}' ({})", title, id)),
            _ => output.info(format!("No session with id {}", id)),
        }
    } else {
        output.json(&json!({ "type": "deleted", "id": id, "removed": removed }));
    }

    print_summary(&ledger, output);
    Ok(())
}
