use anyhow::{Context, Result};

use crate::graphql::{bind, build_schema, router, serve};

use super::CommandContext;

pub fn handle_serve(ctx: CommandContext, host: Option<String>, port: Option<u16>) -> Result<()> {
    let config = ctx
        .config
        .with_overrides(host, port)
        .context("Invalid server settings")?;
    let settings = config.server;
    let schema = build_schema(ctx.store, &settings);

    tokio::runtime::Runtime::new()?.block_on(async {
        let addr = settings
            .socket_addr()
            .await
            .context("Invalid server settings")?;
        let listener = bind(addr)
            .await
            .with_context(|| format!("Failed to start server on {}", addr))?;

        println!("Server ready at {}", settings.display_url());
        tracing::info!(url = %settings.display_url(), "server ready");

        serve(listener, router(schema, &settings))
            .await
            .context("Server stopped unexpectedly")
    })
}
