use super::AppContext;
use crate::output::Output;
use crate::ConfigCommands;
use color_eyre::Result;
use comfy_table::{modifiers, presets, Attribute, Cell, Table};
use serde_json::json;
use watchtrack_config::Config;

pub fn run_config(cmd: ConfigCommands, ctx: &AppContext, output: &Output) -> Result<()> {
    match cmd {
        ConfigCommands::Show => show_config(ctx, output),
        ConfigCommands::Init { force } => init_config(force, ctx, output),
        ConfigCommands::Path => show_paths(ctx, output),
    }
}

fn show_config(ctx: &AppContext, output: &Output) -> Result<()> {
    let config_file = ctx.paths.config_file();
    let config = &ctx.config;
    let blob_file = ctx.paths.data_dir().join(format!("{}.json", config.storage.blob_key));

    if output.is_human() {
        if !config_file.exists() {
            output.warn(format!(
                "No configuration file at {}, using defaults. Run 'watchtrack config init' to create one.",
                config_file.display()
            ));
        }

        let mut table = Table::new();
        table.set_header(vec![
            Cell::new("Setting").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);
        table.load_preset(presets::UTF8_FULL);
        table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
        table.add_row(vec!["Config file".to_string(), config_file.display().to_string()]);
        table.add_row(vec!["Sessions file".to_string(), blob_file.display().to_string()]);
        table.add_row(vec!["storage.blob_key".to_string(), config.storage.blob_key.clone()]);
        table.add_row(vec![
            "storage.on_corrupt".to_string(),
            format!("{:?}", config.storage.on_corrupt).to_lowercase(),
        ]);
        table.add_row(vec!["defaults.user".to_string(), config.defaults.user.to_string()]);
        table.add_row(vec!["defaults.kind".to_string(), config.defaults.kind.clone()]);
        table.add_row(vec!["logging.file".to_string(), config.logging.file.to_string()]);
        output.println(table.to_string());
    } else {
        output.json(&json!({
            "config_file": config_file.display().to_string(),
            "config_file_exists": config_file.exists(),
            "sessions_file": blob_file.display().to_string(),
            "storage": {
                "blob_key": config.storage.blob_key,
                "on_corrupt": config.storage.on_corrupt,
                "data_dir": ctx.paths.data_dir().display().to_string(),
            },
            "defaults": {
                "user": config.defaults.user,
                "kind": config.defaults.kind,
            },
            "logging": {
                "file": config.logging.file,
                "log_file": ctx.paths.log_file().display().to_string(),
            },
        }));
    }
    Ok(())
}

fn init_config(force: bool, ctx: &AppContext, output: &Output) -> Result<()> {
    let config_file = ctx.paths.config_file();
    if config_file.exists() && !force {
        output.warn(format!(
            "Configuration already exists at {}. Use --force to overwrite it with defaults.",
            config_file.display()
        ));
        return Ok(());
    }

    ctx.paths
        .ensure_directories()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to create configuration directories: {}", e))?;
    Config::default()
        .save_to_file(&config_file)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to write config to {}: {}", config_file.display(), e))?;

    output.success(format!("Wrote default configuration to {}", config_file.display()));
    Ok(())
}

fn show_paths(ctx: &AppContext, output: &Output) -> Result<()> {
    if output.is_human() {
        output.println(format!("config: {}", ctx.paths.config_file().display()));
        output.println(format!("data:   {}", ctx.paths.data_dir().display()));
        output.println(format!("logs:   {}", ctx.paths.log_dir().display()));
    } else {
        output.json(&json!({
            "config_file": ctx.paths.config_file().display().to_string(),
            "data_dir": ctx.paths.data_dir().display().to_string(),
            "log_dir": ctx.paths.log_dir().display().to_string(),
        }));
    }
    Ok(())
}
