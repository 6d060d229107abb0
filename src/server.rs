use std::net::SocketAddr;

use axum::Router;
use leptos::prelude::*;
use leptos_axum::{generate_route_list, LeptosRoutes};
use thiserror::Error;

use crate::app::{shell, App};

#[derive(Error, Debug)]
pub enum ServeError {
    #[error("couldn't load leptos configuration: {0}")]
    Config(String),
    #[error("couldn't bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },
    #[error("server stopped unexpectedly: {0}")]
    Serve(#[from] std::io::Error),
}

/// Serves the site with the settings in `[package.metadata.leptos]`,
/// overridable through the `LEPTOS_*` environment variables.
pub async fn serve() -> Result<(), ServeError> {
    let conf = get_configuration(None).map_err(|e| ServeError::Config(e.to_string()))?;
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServeError::Bind { addr, source })?;
    tracing::info!("listening on http://{addr}");
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
