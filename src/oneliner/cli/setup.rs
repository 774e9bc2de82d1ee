use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "one-liner", bin_name = "one-liner", version)]
#[command(
    about = "Make or read one-liner python executable commands without relying on any file",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Skip confirmation prompts
    #[arg(short, long, global = true)]
    pub yes: bool,

    /// Alias file to operate on (overrides ONELINER_PATH)
    #[arg(long, global = true, value_name = "PATH")]
    pub alias_file: Option<PathBuf>,

    /// Interpreter used inside generated aliases (overrides ONELINER_PYTHON_EXEC)
    #[arg(long, global = true, value_name = "EXEC")]
    pub interpreter: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install the one-liner alias and hook the alias file into the shell profile
    Init {
        /// Script to install as the one-liner alias
        #[arg(short = 'f', long, conflicts_with = "init_contents")]
        filepath: Option<PathBuf>,

        /// Script contents to install as the one-liner alias
        #[arg(long)]
        init_contents: Option<String>,

        /// Do not touch the shell profile
        #[arg(long)]
        no_shell: bool,
    },

    /// Register a script as a new alias
    #[command(aliases = ["cr", "touch"])]
    Create {
        /// Alias name (defaults to the file name without .py)
        #[arg(short, long)]
        name: Option<String>,

        /// Script to embed
        #[arg(short = 'f', long)]
        filepath: PathBuf,
    },

    /// Replace the script of an existing alias
    #[command(alias = "ov")]
    Override {
        /// Alias name (defaults to the file name without .py)
        #[arg(short, long)]
        name: Option<String>,

        /// Script to embed
        #[arg(short = 'f', long)]
        filepath: PathBuf,
    },

    /// Rename an alias
    #[command(alias = "mv")]
    Rename { old: String, new: String },

    /// Print the alias definition line
    #[command(aliases = ["pr", "cat"])]
    Print { name: String },

    /// Decode an alias back into its script
    #[command(aliases = ["dmp", "export"])]
    Dump {
        name: String,

        /// Write the script to this file instead of the terminal
        #[arg(short = 'f', long)]
        filepath: Option<PathBuf>,
    },

    /// List registered aliases
    #[command(alias = "ls")]
    List,

    /// Delete an alias
    #[command(aliases = ["del", "rm"])]
    Delete { name: String },

    /// Rewrite the alias file in canonical form
    Fix,
}
