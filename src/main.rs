//! # Toy HTTP Server - Entry Point
//! src/main.rs
//!
//! Carga `.env`, lee la configuración, arma la tabla de rutas y arranca el
//! servidor. Un error de bind termina el proceso con código 1.

use std::path::Path;

use toy_http_server::config::{self, Config};
use toy_http_server::error::ServerError;
use toy_http_server::logging;
use toy_http_server::router::RouteTable;
use toy_http_server::server::Server;

fn main() {
    // Antes del logging, para que RUST_LOG también pueda venir del .env
    let env_file = config::load_env_file(Path::new(config::ENV_FILE));

    logging::init();
    tracing::info!("HTTP server starting");

    if let Err(e) = env_file.and_then(run) {
        tracing::error!(error = %e, "fatal error");
        std::process::exit(1);
    }
}

fn run(env_file_loaded: bool) -> Result<(), ServerError> {
    if env_file_loaded {
        tracing::info!(file = config::ENV_FILE, "env file loaded");
    }

    let config = Config::new();
    config.validate().map_err(ServerError::Config)?;
    tracing::info!(host = %config.host, port = config.port, "configuration loaded");

    let mut server = Server::new(config, RouteTable::builtin());
    server.run()
}
