//! # Toy HTTP Server
//! src/lib.rs
//!
//! Servidor TCP que lee un único buffer por conexión, lo parte por líneas
//! para aproximar un request HTTP/1.x, lo despacha a una de dos rutas fijas
//! y responde con un texto que imita (sin respetar del todo) HTTP.
//!
//! ## Arquitectura
//!
//! - `http`: parsing del request, descriptores de respuesta, status codes
//! - `router`: tabla de rutas inmutable y despacho por método
//! - `handlers`: las rutas `GET /` y `POST /echo`
//! - `server`: listener TCP, un thread por conexión
//! - `config`: puerto y host (CLI / variables de entorno)
//! - `error`: errores de transporte
//! - `logging`: inicialización de `tracing`
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use toy_http_server::config::Config;
//! use toy_http_server::router::RouteTable;
//! use toy_http_server::server::Server;
//!
//! let mut server = Server::new(Config::default(), RouteTable::builtin());
//! server.run().expect("Error al iniciar servidor");
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod http;
pub mod logging;
pub mod router;
pub mod server;
