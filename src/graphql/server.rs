use std::net::SocketAddr;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::Router;
use axum::response::Html;
use axum::routing::{get, post_service};
use tokio::net::TcpListener;

use crate::config::ServerSettings;
use crate::error::Result;

use super::DirectorySchema;

/// Routes for the GraphQL endpoint at `settings.path`.
///
/// POST always executes queries. GET serves GraphiQL when the playground is
/// enabled, and otherwise executes queries passed as URL parameters.
pub fn router(schema: DirectorySchema, settings: &ServerSettings) -> Router {
    let service = GraphQL::new(schema);

    let route = if settings.playground {
        let endpoint = settings.path.clone();
        get(move || {
            let page = GraphiQLSource::build().endpoint(&endpoint).finish();
            async move { Html(page) }
        })
        .post_service(service)
    } else {
        post_service(service.clone()).get_service(service)
    };

    Router::new().route(&settings.path, route)
}

/// Serve `router` on an already bound listener until the server fails.
pub async fn serve(listener: TcpListener, router: Router) -> Result<()> {
    axum::serve(listener, router).await?;
    Ok(())
}

/// Bind a listener on `addr`, logging the failure if the address is unusable.
pub async fn bind(addr: SocketAddr) -> Result<TcpListener> {
    TcpListener::bind(addr).await.map_err(|e| {
        tracing::error!(%addr, error = %e, "failed to bind");
        e.into()
    })
}

/// Resolve the configured address, bind to it and serve the schema.
pub async fn run_server(schema: DirectorySchema, settings: &ServerSettings) -> Result<()> {
    let listener = bind(settings.socket_addr().await?).await?;

    tracing::info!(url = %settings.display_url(), "server ready");
    serve(listener, router(schema, settings)).await
}
