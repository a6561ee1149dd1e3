use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "lsearch",
    about = "Inspect how listing searches are parsed and compiled",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// YAML search configuration; defaults to SEARCH_* environment variables
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the parsed query, compiled predicate and SQL fragment
    Explain(SearchArgs),
    /// Print the properties from a JSON file that match the search
    Filter(FilterArgs),
}

#[derive(Args)]
pub struct SearchArgs {
    /// Free-text search box input
    #[arg(long, short, default_value = "")]
    pub query: String,

    /// Structured filters as camelCase JSON, e.g. '{"city":"Paris","priceMin":200000}'
    #[arg(long, short)]
    pub criteria: Option<String>,
}

#[derive(Args)]
pub struct FilterArgs {
    #[command(flatten)]
    pub search: SearchArgs,

    /// JSON file holding an array of properties
    #[arg(long, short)]
    pub records: PathBuf,
}
