use comfy_table::{modifiers, presets, Attribute, Cell, Color, Table};
use serde_json::{json, Value};
use watchtrack_core::UserTotal;
use watchtrack_models::{Session, TimeUnit, User};

pub const EMPTY_HISTORY: &str = "No watching history yet.";

fn new_table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_header(
        header
            .iter()
            .map(|h| Cell::new(h).add_attribute(Attribute::Bold))
            .collect::<Vec<_>>(),
    );
    table
}

fn badge_color(user: User) -> Color {
    match user {
        User::Lior => Color::Blue,
        User::Ethan => Color::Green,
    }
}

/// One row per session, newest first, or the empty-state message
pub fn history_table(sessions: &[Session]) -> String {
    if sessions.is_empty() {
        return EMPTY_HISTORY.to_string();
    }

    let mut table = new_table(&["ID", "Title", "User", "Date", "Type", "Duration"]);
    for session in sessions {
        let duration = Cell::new(session.format_duration());
        let duration = if session.is_deduction() {
            duration.fg(Color::Red)
        } else {
            duration
        };

        table.add_row(vec![
            Cell::new(&session.id).fg(Color::DarkGrey),
            Cell::new(&session.title),
            Cell::new(session.user.badge()).fg(badge_color(session.user)),
            Cell::new(session.date.to_string()),
            Cell::new(session.kind_label()),
            duration,
        ]);
    }
    table.to_string()
}

/// Days / hours / minutes per user. The minus sign sits on the most
/// significant non-zero unit and negative rows are highlighted.
pub fn summary_table(totals: &[UserTotal]) -> String {
    let mut table = new_table(&["User", "Days", "Hours", "Minutes"]);
    for entry in totals {
        let negative = entry.total.is_negative;
        let name = if negative {
            format!("{} (negative)", entry.user.display_name())
        } else {
            entry.user.display_name().to_string()
        };

        let mut row = vec![Cell::new(name).fg(badge_color(entry.user))];
        for unit in [TimeUnit::Days, TimeUnit::Hours, TimeUnit::Minutes] {
            let cell = Cell::new(entry.total.display_unit(unit));
            row.push(if negative { cell.fg(Color::Red) } else { cell });
        }
        table.add_row(row);
    }
    table.to_string()
}

pub fn session_json(session: &Session) -> Value {
    let mut value = serde_json::to_value(session).unwrap_or(Value::Null);
    if let Value::Object(map) = &mut value {
        map.insert("display_duration".to_string(), json!(session.format_duration()));
    }
    value
}

pub fn summary_json(totals: &[UserTotal]) -> Value {
    Value::Array(
        totals
            .iter()
            .map(|entry| {
                json!({
                    "user": entry.user,
                    "days": entry.total.days,
                    "hours": entry.total.hours,
                    "minutes": entry.total.minutes,
                    "is_negative": entry.total.is_negative,
                    "signed_unit": entry.total.signed_unit(),
                })
            })
            .collect(),
    )
}
