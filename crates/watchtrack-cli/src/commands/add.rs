use super::{print_summary, prompts, AppContext};
use crate::output::Output;
use crate::render;
use chrono::{Local, NaiveDate, Utc};
use color_eyre::Result;
use serde_json::json;
use watchtrack_models::{Action, SessionDraft, User};

pub struct AddArgs {
    pub title: Option<String>,
    pub user: Option<User>,
    pub kind: Option<String>,
    pub date: Option<NaiveDate>,
    pub hours: Option<u32>,
    pub minutes: Option<u32>,
    pub subtract: bool,
}

pub fn run_add(args: AddArgs, ctx: &AppContext, output: &Output) -> Result<()> {
    tracing::debug!("Add command started");
    let interactive = prompts::is_interactive() && output.is_human();
    let defaults = &ctx.config.defaults;

    let title = match args.title {
        Some(title) => title,
        None if interactive => prompts::prompt_string("Title", None)?,
        None => String::new(),
    };

    let user = match args.user {
        Some(user) => user,
        None if interactive => prompts::prompt_user(defaults.user)?,
        None => defaults.user,
    };

    // Ask for the duration only when neither part was given on the command line
    let (hours, minutes) = match (args.hours, args.minutes) {
        (None, None) if interactive => (
            prompts::prompt_number("Hours", 0)?,
            prompts::prompt_number("Minutes", 0)?,
        ),
        (hours, minutes) => (hours.unwrap_or(0), minutes.unwrap_or(0)),
    };

    let draft = SessionDraft {
        title: title.trim().to_string(),
        user,
        kind: args.kind.unwrap_or_else(|| defaults.kind.clone()),
        date: args.date.unwrap_or_else(|| Local::now().date_naive()),
        hours,
        minutes,
        action: if args.subtract { Action::Subtract } else { Action::Add },
    };

    if let Err(e) = draft.validate() {
        output.error(e.to_string());
        return Err(color_eyre::eyre::eyre!("{}", e));
    }

    let mut ledger = ctx.open_ledger()?;
    let session = ledger.record(draft, Utc::now())?.clone();

    if output.is_human() {
        let verb = if session.is_deduction() { "Deducted" } else { "Added" };
        output.success(format!(
            "{} {} for {}: {} (id {})",
            verb,
            session.format_duration().trim_end(),
            session.user.display_name(),
            session.title,
            session.id
        ));
    } else {
        output.json(&json!({ "type": "added", "session": render::session_json(&session) }));
    }

    print_summary(&ledger, output);
    Ok(())
}
