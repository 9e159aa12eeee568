//! # Logging
//! src/logging.rs
//!
//! Inicializa `tracing-subscriber`. El nivel se controla con `RUST_LOG`;
//! sin la variable se usa `toy_http_server=info`.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filtro por defecto cuando no hay `RUST_LOG`
pub const DEFAULT_FILTER: &str = "toy_http_server=info";

/// Instala el subscriber global. Llamarlo dos veces no hace nada.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
