use clap::{Parser, Subcommand, ValueEnum};
use std::fmt;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pizza-cli")]
#[command(about = "Order pizzas against a small in-memory inventory")]
#[command(version = "0.1.0")]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Environment file to load instead of .env
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Format used when printing inventory and receipts
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Disable colored output, including log lines
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Take orders interactively (default)
    Order,
    /// Show bases and toppings with their prices
    Menu,
    /// Show the opening stock
    Stock,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
