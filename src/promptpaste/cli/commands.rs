//! # CLI Layer
//!
//! One possible client of the promptpaste library. This is the only place
//! that parses arguments, writes to stdout/stderr and decides exit codes.
//!
//! Exit codes: 0 for success, for a lookup or delete that matched nothing,
//! and for a save the user cancelled; 1 for any error.

use super::render::{print_entries, print_messages};
use super::setup::{Cli, Commands};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use log::debug;
use promptpaste::api::{CollisionMode, SaveRequest};
use promptpaste::error::{PasteError, Result};
use promptpaste::init::{initialize, PasteContext, STORAGE_ENV};
use promptpaste::opener::open_storage;
use promptpaste::prompt::TerminalPrompter;
use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let env_override = env::var_os(STORAGE_ENV).map(PathBuf::from);
    let mut ctx = initialize(env_override);

    match cli.command {
        Some(Commands::Save {
            path,
            rename,
            overwrite,
            new_name,
        }) => handle_save(&mut ctx, path, rename, overwrite, new_name),
        Some(Commands::List) => handle_list(&ctx),
        Some(Commands::Rm { id }) => handle_rm(&mut ctx, &id),
        Some(Commands::Store) => handle_store(&ctx),
        Some(Commands::Config) => handle_config(&ctx),
        Some(Commands::Get(args)) => handle_get(&ctx, &args),
        None => {
            Cli::command().print_help().map_err(PasteError::Io)?;
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .init();
}

fn handle_save(
    ctx: &mut PasteContext,
    path: PathBuf,
    rename: bool,
    overwrite: bool,
    new_name: Option<String>,
) -> Result<()> {
    let mut request = SaveRequest::new(path);
    request = match (new_name, rename, overwrite) {
        (Some(name), _, _) => request.with_explicit_name(name),
        (None, true, _) => request.with_mode(CollisionMode::AutoRename),
        (None, false, true) => request.with_mode(CollisionMode::Overwrite),
        (None, false, false) => request,
    };

    let result = ctx.api.save_entry(&request, &mut TerminalPrompter)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &PasteContext) -> Result<()> {
    let result = ctx.api.list_entries()?;
    print_entries(&result.listed_entries);
    print_messages(&result.messages);
    Ok(())
}

fn handle_rm(ctx: &mut PasteContext, id: &str) -> Result<()> {
    let result = ctx.api.remove_entry(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_store(ctx: &PasteContext) -> Result<()> {
    open_storage(ctx.api.store())
}

fn handle_config(ctx: &PasteContext) -> Result<()> {
    let result = ctx.api.config()?;
    print_messages(&result.messages);
    if let Some(dir) = &ctx.api.paths().config_dir {
        println!("config-dir = {}", dir.display());
    }
    Ok(())
}

fn handle_get(ctx: &PasteContext, args: &[String]) -> Result<()> {
    let [id] = args else {
        Cli::command()
            .error(ErrorKind::TooManyValues, "too many arguments")
            .exit();
    };

    let result = ctx.api.get_entry(id)?;
    match result.content {
        Some(content) => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&content).map_err(PasteError::Io)?;
            stdout.flush().map_err(PasteError::Io)?;
        }
        None => debug!("no entry matches '{}'", id),
    }
    Ok(())
}
