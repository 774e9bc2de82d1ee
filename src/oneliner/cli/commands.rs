//! Per-command handlers: parse, call the API, print.
//!
//! Destructive operations ask for confirmation on stdin unless `--yes` was
//! given. Any error bubbles up to `main`, which prints it and exits 1.

use super::print::{
    print_definition, print_messages, print_names, print_script, print_source_reminder,
};
use super::setup::{Cli, Commands};
use clap::Parser;
use colored::Colorize;
use one_liner::api::{CmdMessage, CmdResult};
use one_liner::commands::helpers::derive_name;
use one_liner::error::{OneLinerError, Result};
use one_liner::init::{initialize, OneLinerContext};
use one_liner::shell::{ensure_sourced, home_dir, Shell};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = initialize(cli.alias_file.clone(), cli.interpreter.clone())?;
    let yes = cli.yes;

    match cli.command {
        Commands::Init {
            filepath,
            init_contents,
            no_shell,
        } => handle_init(&mut ctx, filepath, init_contents, no_shell),
        Commands::Create { name, filepath } => handle_create(&mut ctx, name, &filepath),
        Commands::Override { name, filepath } => handle_override(&mut ctx, name, &filepath, yes),
        Commands::Rename { old, new } => handle_rename(&mut ctx, &old, &new),
        Commands::Print { name } => handle_print(&ctx, &name),
        Commands::Dump { name, filepath } => handle_dump(&ctx, &name, filepath, yes),
        Commands::List => handle_list(&ctx),
        Commands::Delete { name } => handle_delete(&mut ctx, &name, yes),
        Commands::Fix => handle_fix(&mut ctx),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn handle_init(
    ctx: &mut OneLinerContext,
    filepath: Option<PathBuf>,
    init_contents: Option<String>,
    no_shell: bool,
) -> Result<()> {
    println!("Initializing...");
    let script = match (filepath, init_contents) {
        (Some(path), _) => fs::read(&path).map_err(|e| {
            OneLinerError::Api(format!("Cannot read script {}: {}", path.display(), e))
        })?,
        (None, Some(contents)) if !contents.is_empty() => contents.into_bytes(),
        _ => {
            return Err(OneLinerError::Api(
                "one-liner script contents are required for init; pass --filepath or --init-contents"
                    .into(),
            ))
        }
    };

    let result = ctx.api.init(&script)?;
    print_messages(&result.messages);

    if !no_shell {
        let messages = bootstrap_shell(&ctx.config.alias_file)?;
        print_messages(&messages);
    }

    println!("All set. You can start using one-liner after sourcing.");
    print_source_reminder(&ctx.config.alias_file);
    Ok(())
}

fn bootstrap_shell(alias_file: &Path) -> Result<Vec<CmdMessage>> {
    let shell_var = std::env::var("SHELL").unwrap_or_default();
    let Some(shell) = Shell::from_path(&shell_var) else {
        return Ok(vec![CmdMessage::warning(format!(
            "Unsupported shell '{}'; add `source {}` to your shell profile yourself. Supported shells are: bash and zsh",
            shell_var,
            alias_file.display()
        ))]);
    };

    let rc_file = shell.rc_file(&home_dir()?);
    let message = if ensure_sourced(&rc_file, alias_file)? {
        CmdMessage::success(format!("Added `source {}` to {}", alias_file.display(), rc_file.display()))
    } else {
        CmdMessage::info(format!("{} already sources the alias file", rc_file.display()))
    };
    Ok(vec![message])
}

fn handle_create(ctx: &mut OneLinerContext, name: Option<String>, filepath: &Path) -> Result<()> {
    let result = ctx.api.create(name.as_deref(), filepath)?;
    finish_mutation(ctx, &result);
    Ok(())
}

fn handle_override(
    ctx: &mut OneLinerContext,
    name: Option<String>,
    filepath: &Path,
    yes: bool,
) -> Result<()> {
    let target = match &name {
        Some(name) => name.clone(),
        None => derive_name(filepath)?,
    };
    if !ctx.api.exists(&target)? {
        return Err(OneLinerError::NotFound(target));
    }
    if !confirm(&format!("Override alias '{}'?", target), yes)? {
        print_messages(&[CmdMessage::info("Operation cancelled.")]);
        return Ok(());
    }

    let result = ctx.api.override_alias(Some(target.as_str()), filepath)?;
    finish_mutation(ctx, &result);
    Ok(())
}

fn handle_rename(ctx: &mut OneLinerContext, old: &str, new: &str) -> Result<()> {
    let result = ctx.api.rename(old, new)?;
    finish_mutation(ctx, &result);
    Ok(())
}

fn handle_print(ctx: &OneLinerContext, name: &str) -> Result<()> {
    let result = ctx.api.print(name)?;
    if let Some(line) = &result.definition {
        print_definition(line);
    }
    Ok(())
}

fn handle_dump(
    ctx: &OneLinerContext,
    name: &str,
    filepath: Option<PathBuf>,
    yes: bool,
) -> Result<()> {
    let Some(path) = filepath else {
        println!("filepath is not specified, dumping to the terminal\n");
        let result = ctx.api.export(name, None, false)?;
        if let Some(script) = &result.script {
            print_script(script);
        }
        return Ok(());
    };

    let result = match ctx.api.export(name, Some(&path), false) {
        Err(OneLinerError::DestinationExists(existing)) => {
            let prompt = format!("{} already exists. Overwrite?", existing.display());
            if !confirm(&prompt, yes)? {
                print_messages(&[CmdMessage::warning(
                    "Override protection: this file already exists!",
                )]);
                return Ok(());
            }
            ctx.api.export(name, Some(&existing), true)?
        }
        other => other?,
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &OneLinerContext) -> Result<()> {
    let result = ctx.api.list()?;
    print_names(&result.names);
    Ok(())
}

fn handle_delete(ctx: &mut OneLinerContext, name: &str, yes: bool) -> Result<()> {
    if !ctx.api.exists(name)? {
        return Err(OneLinerError::NotFound(name.to_string()));
    }
    if !confirm(&format!("Delete alias '{}'?", name), yes)? {
        print_messages(&[CmdMessage::info("Operation cancelled.")]);
        return Ok(());
    }

    let result = ctx.api.delete(name)?;
    finish_mutation(ctx, &result);
    Ok(())
}

fn handle_fix(ctx: &mut OneLinerContext) -> Result<()> {
    let result = ctx.api.fix()?;
    print_messages(&result.messages);
    Ok(())
}

fn finish_mutation(ctx: &OneLinerContext, result: &CmdResult) {
    print_messages(&result.messages);
    if result.aliases_changed {
        print_source_reminder(&ctx.config.alias_file);
    }
}

/// Asks a yes/no question on stdin. Anything but `y`/`yes` declines.
fn confirm(prompt: &str, yes: bool) -> Result<bool> {
    if yes {
        return Ok(true);
    }

    print!("{} {} ", prompt, "[y/N]".dimmed());
    io::stdout().flush().map_err(OneLinerError::Io)?;

    let mut input = String::new();
    io::stdin().read_line(&mut input).map_err(OneLinerError::Io)?;
    Ok(matches!(input.trim().to_lowercase().as_str(), "y" | "yes"))
}
