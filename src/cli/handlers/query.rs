use anyhow::{Context, Result};

use crate::graphql::build_schema;

use super::CommandContext;

pub fn handle_query(ctx: CommandContext, query: String, variables: Option<String>) -> Result<()> {
    let schema = build_schema(ctx.store, &ctx.config.server);

    let vars: async_graphql::Variables = if let Some(v) = variables {
        serde_json::from_str(&v).context("Variables must be a JSON object")?
    } else {
        async_graphql::Variables::default()
    };

    let request = async_graphql::Request::new(query).variables(vars);
    let response = tokio::runtime::Runtime::new()?.block_on(schema.execute(request));

    if !response.errors.is_empty() {
        tracing::debug!(errors = response.errors.len(), "query returned errors");
    }

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
