use super::AppContext;
use crate::output::Output;
use crate::render;
use color_eyre::Result;
use serde_json::{json, Value};
use watchtrack_models::{Session, User};

pub fn run_history(user: Option<User>, ctx: &AppContext, output: &Output) -> Result<()> {
    let ledger = ctx.open_ledger()?;
    let sessions: Vec<Session> = match user {
        Some(user) => ledger.sessions_for(user).cloned().collect(),
        None => ledger.sessions().to_vec(),
    };

    if output.is_human() {
        output.println(render::history_table(&sessions));
    } else {
        let items: Vec<Value> = sessions.iter().map(render::session_json).collect();
        output.json(&json!({ "type": "history", "sessions": items }));
    }
    Ok(())
}
