use color_eyre::Result;
use dialoguer::{Confirm, Input, Select};
use std::io::IsTerminal;
use watchtrack_models::User;

/// Prompts are only shown when a person is at the keyboard
pub fn is_interactive() -> bool {
    std::io::stdin().is_terminal() && std::io::stdout().is_terminal()
}

/// Prompt for a string value with optional default
pub fn prompt_string(prompt: &str, default: Option<&str>) -> Result<String> {
    let mut input_builder = Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true);

    if let Some(default_value) = default {
        input_builder = input_builder.default(default_value.to_string());
    }

    input_builder.interact_text().map_err(|e| color_eyre::eyre::eyre!("Failed to read input: {}", e))
}

/// Prompt for yes/no with optional default
pub fn prompt_yes_no(prompt: &str, default: Option<bool>) -> Result<bool> {
    let mut confirm_builder = Confirm::new().with_prompt(prompt);

    if let Some(default_value) = default {
        confirm_builder = confirm_builder.default(default_value);
    }

    confirm_builder
        .interact()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to read confirmation: {}", e))
}

/// Prompt for a non-negative number, re-asking until the input parses
pub fn prompt_number(prompt: &str, default: u32) -> Result<u32> {
    Input::<u32>::new()
        .with_prompt(prompt)
        .default(default)
        .interact_text()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to read input: {}", e))
}

/// Pick one of the tracked users
pub fn prompt_user(default: User) -> Result<User> {
    let labels: Vec<&str> = User::ALL.iter().map(|u| u.display_name()).collect();
    let default_index = User::ALL.iter().position(|u| *u == default).unwrap_or(0);

    let index = Select::new()
        .with_prompt("Who watched?")
        .items(&labels)
        .default(default_index)
        .interact()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to read selection: {}", e))?;

    Ok(User::ALL[index])
}
