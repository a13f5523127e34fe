use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "holonet")]
#[command(
    author,
    version,
    about = "A GraphQL API over the Star Wars trilogy data set"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (holonet.yml in the working directory by default)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose (DEBUG) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the GraphQL server
    Serve {
        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Execute a GraphQL query against the seeded catalog and print the
    /// JSON response
    #[command(visible_alias = "q")]
    Query {
        /// The GraphQL query document
        query: String,
    },

    /// Print the schema in SDL form
    Schema,
}
