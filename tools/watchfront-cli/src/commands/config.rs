//! Configuration management commands.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig, CONFIG_FILE_NAMES};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Get { key } => get_config(&key, ctx),
        ConfigCommand::Set { key, value } => set_config(&key, &value, ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    ctx.output.info("");
    ctx.output.info("[service]");
    ctx.output.kv("base_url", &ctx.config.service.base_url);
    ctx.output
        .kv("timeout_secs", &ctx.config.service.timeout_secs.to_string());
    if let Some(url) = &ctx.base_url {
        ctx.output.kv("base_url (--base-url)", url);
    }

    ctx.output.info("");
    ctx.output.info("[catalog]");
    ctx.output
        .kv("page_size", &ctx.config.catalog.page_size.to_string());

    ctx.output.info("");
    ctx.output.info("[search]");
    ctx.output
        .kv("min_query_len", &ctx.config.search.min_query_len.to_string());

    Ok(())
}

fn get_config(key: &str, ctx: &Context) -> Result<()> {
    let value = get_config_value(&ctx.config, key)?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "key": key, "value": value }));
    } else {
        println!("{}", value);
    }

    Ok(())
}

fn set_config(key: &str, value: &str, ctx: &Context) -> Result<()> {
    let config_path = find_config_file(ctx)?;
    let path = config_path.to_string_lossy().to_string();

    let mut config = CliConfig::load(&path)?;
    set_config_value(&mut config, key, value)?;
    config.save(&path)?;

    ctx.output.success(&format!("Set {} = {}", key, value));

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_FILE_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let mut errors: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    if let Err(e) = ctx.storefront_config().validate() {
        errors.push(e.to_string());
    }

    if ctx.config.service.base_url.starts_with("http://")
        && !ctx.config.service.base_url.contains("localhost")
        && !ctx.config.service.base_url.contains("127.0.0.1")
    {
        warnings.push("service.base_url uses plain http for a remote host".to_string());
    }

    if ctx.config.catalog.page_size > 200 {
        warnings.push(format!(
            "catalog.page_size {} is large for a terminal listing",
            ctx.config.catalog.page_size
        ));
    }

    if ctx.config.search.min_query_len == 1 {
        warnings.push("search.min_query_len = 1 opens suggestions on every keystroke".to_string());
    }

    // Print results
    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}

fn get_config_value(config: &CliConfig, key: &str) -> Result<String> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["service", "base_url"] => Ok(format!("\"{}\"", config.service.base_url)),
        ["service", "timeout_secs"] => Ok(config.service.timeout_secs.to_string()),
        ["catalog", "page_size"] => Ok(config.catalog.page_size.to_string()),
        ["search", "min_query_len"] => Ok(config.search.min_query_len.to_string()),
        _ => bail!("Unknown config key: {}", key),
    }
}

fn set_config_value(config: &mut CliConfig, key: &str, value: &str) -> Result<()> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["service", "base_url"] => config.service.base_url = value.to_string(),
        ["service", "timeout_secs"] => config.service.timeout_secs = value.parse()?,
        ["catalog", "page_size"] => config.catalog.page_size = value.parse()?,
        ["search", "min_query_len"] => config.search.min_query_len = value.parse()?,
        _ => bail!("Unknown config key: {}", key),
    }

    Ok(())
}

fn find_config_file(ctx: &Context) -> Result<PathBuf> {
    if let Some(path) = &ctx.config_path {
        return Ok(path.clone());
    }
    for name in &CONFIG_FILE_NAMES {
        let path = ctx.cwd.join(name);
        if path.exists() {
            return Ok(path);
        }
    }
    bail!("No config file found. Run `watchfront config init` to create one.")
}
