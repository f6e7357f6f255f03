use anyhow::{Context, Result};
use clap::Parser;

use user_directory::cli::handlers::{CommandContext, handle_query, handle_schema, handle_serve};
use user_directory::cli::{Cli, Commands};
use user_directory::config::DirectoryConfig;
use user_directory::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose, cli.log_file.clone()).context("Failed to initialize logging")?;

    let config = DirectoryConfig::load(cli.config.as_deref())
        .context("Failed to load configuration")?;
    let ctx = CommandContext::new(config);

    match cli.command {
        Commands::Serve { host, port } => handle_serve(ctx, host, port),
        Commands::Query { query, variables } => handle_query(ctx, query, variables),
        Commands::Schema => handle_schema(ctx),
    }
}
