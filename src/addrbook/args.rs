use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "addrbook", bin_name = "addrbook", version)]
#[command(
    about = "Interactive address book and notebook for the terminal",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding config.json and the default data file
    /// [env: ADDRBOOK_HOME]
    #[arg(long, global = true, value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Data file to open instead of the configured one
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Treat this DD.MM.YYYY date as today
    #[arg(long, hide = true, global = true)]
    pub today: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Get or set configuration (data-file, birthday-window, autosave)
    Config {
        /// Config key
        key: Option<String>,
        /// New value
        value: Option<String>,
    },
}
