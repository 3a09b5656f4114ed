use addrbook::api::{AddressBookApi, ConfigAction};
use addrbook::commands;
use addrbook::config::BookConfig;
use addrbook::error::{BookError, Result};
use addrbook::store::fs::FileStore;
use addrbook::validation;
use clap::Parser;
use directories::ProjectDirs;
use log::{debug, info};
use std::io;
use std::path::{Path, PathBuf};

mod args;
mod cli;
use args::{Cli, Commands};
use cli::render;
use cli::repl::Repl;

const HOME_ENV: &str = "ADDRBOOK_HOME";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let home = resolve_home(&cli)?;
    debug!("Using home directory {}", home.display());

    match &cli.command {
        Some(Commands::Config { key, value }) => handle_config(&home, key.clone(), value.clone()),
        None => handle_session(&cli, &home),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_level),
    )
    .format_timestamp(None)
    .try_init();
}

fn resolve_home(cli: &Cli) -> Result<PathBuf> {
    if let Some(home) = &cli.home {
        return Ok(home.clone());
    }
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    let dirs = ProjectDirs::from("com", "addrbook", "addrbook")
        .ok_or_else(|| BookError::Store("could not determine a data directory".to_string()))?;
    Ok(dirs.data_dir().to_path_buf())
}

fn handle_session(cli: &Cli, home: &Path) -> Result<()> {
    let config = BookConfig::load(home)?;
    let data_path = cli
        .file
        .clone()
        .unwrap_or_else(|| config.data_path(home));
    info!("Data file: {}", data_path.display());

    let mut api = AddressBookApi::open(FileStore::new(data_path), &config)?;
    if let Some(raw) = &cli.today {
        api = api.with_today(validation::parse_date(raw)?);
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    Repl::new(api).run(stdin.lock(), &mut stdout)
}

fn handle_config(home: &Path, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = commands::config::run(home, action)?;
    if let Some(config) = &result.config {
        if result.messages.is_empty() {
            println!("{}", render::render_config(config));
        }
    }
    let messages = render::render_messages(&result.messages);
    if !messages.is_empty() {
        println!("{}", messages);
    }
    Ok(())
}
