use super::{print_summary, prompts, AppContext};
use crate::output::Output;
use color_eyre::Result;
use serde_json::json;

const CONFIRM_PROMPT: &str = "Are you sure you want to clear all history? This cannot be undone.";

pub fn run_clear(yes: bool, ctx: &AppContext, output: &Output) -> Result<()> {
    if !yes {
        if !prompts::is_interactive() {
            output.error("Refusing to clear history without confirmation. Pass --yes to proceed.");
            return Err(color_eyre::eyre::eyre!("Clear requires confirmation"));
        }
        if !prompts::prompt_yes_no(CONFIRM_PROMPT, Some(false))? {
            output.info("Clear cancelled, history unchanged");
            return Ok(());
        }
    }

    let mut ledger = ctx.open_ledger()?;
    let count = ledger.clear_all()?;

    if output.is_human() {
        output.success(format!("Cleared {} session(s)", count));
    } else {
        output.json(&json!({ "type": "cleared", "count": count }));
    }

    print_summary(&ledger, output);
    Ok(())
}
