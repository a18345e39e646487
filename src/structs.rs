use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Create the config file if it does not exist or is broken.
    #[arg(long)]
    pub create_config: bool,
    /// Path of the TOML config file.
    #[arg(long, default_value = "config.toml")]
    pub config: String,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the JSON value stored under a key.
    Get { key: String },
    /// Store a JSON value under a key.
    Set {
        key: String,
        value: String,
        /// Expiry in seconds; the configured default when omitted.
        #[arg(long)]
        ttl: Option<u64>,
    },
    /// Delete one or more keys.
    Del {
        #[arg(required = true)]
        keys: Vec<String>,
    },
    /// List keys under the configured prefix.
    Keys { pattern: Option<String> },
    /// Print the remaining lifetime of a key.
    Ttl { key: String },
    /// Delete every key under the configured prefix.
    Clear,
}
