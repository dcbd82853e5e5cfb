use super::{print_summary, AppContext};
use crate::output::Output;
use color_eyre::Result;

pub fn run_summary(ctx: &AppContext, output: &Output) -> Result<()> {
    let ledger = ctx.open_ledger()?;
    print_summary(&ledger, output);
    Ok(())
}
