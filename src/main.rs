use std::sync::{Arc, RwLock};

use anyhow::Result;
use clap::Parser;

use holonet::cli::{Cli, Commands};
use holonet::config::HolonetConfig;
use holonet::graphql::{build_schema, run_server};
use holonet::storage::StarWarsDb;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = HolonetConfig::load(cli.config.as_deref())?;
    holonet::logging::init(cli.verbose, config.log.file.clone());

    let db = Arc::new(RwLock::new(StarWarsDb::seeded()));
    let schema = build_schema(db);

    match cli.command {
        Commands::Serve { port } => {
            let port = port.unwrap_or(config.server.port);
            let host = config.server.host;

            println!("Starting GraphQL server on http://{}:{}/graphql", host, port);
            println!("GraphQL Playground: http://{}:{}/graphql", host, port);

            tokio::runtime::Runtime::new()?.block_on(run_server(schema, &host, port))?;
            Ok(())
        }
        Commands::Query { query } => {
            let response = tokio::runtime::Runtime::new()?.block_on(schema.execute(query.as_str()));
            println!("{}", serde_json::to_string_pretty(&response)?);

            if !response.errors.is_empty() {
                anyhow::bail!("query returned errors");
            }
            Ok(())
        }
        Commands::Schema => {
            println!("{}", schema.sdl());
            Ok(())
        }
    }
}
