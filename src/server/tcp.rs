//! # Servidor TCP
//! src/server/tcp.rs
//!
//! Un thread por conexión. Cada conexión hace exactamente un `read`, que
//! se asume trae el request completo, escribe una respuesta y se cierra.
//! No hay timeouts: un cliente que conecta y no manda nada deja su thread
//! bloqueado en el `read` hasta que cierre.

use crate::config::Config;
use crate::error::{Result, ServerError};
use crate::http::request::UNDEFINED;
use crate::http::Request;
use crate::router::RouteTable;
use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;

/// Tamaño del buffer del único `read` por conexión
pub const READ_BUFFER_SIZE: usize = 64 * 1024;

/// Servidor TCP con su tabla de rutas compartida
pub struct Server {
    config: Config,
    routes: Arc<RouteTable>,
    listener: Option<TcpListener>,
}

impl Server {
    pub fn new(config: Config, routes: RouteTable) -> Self {
        Self {
            config,
            routes: Arc::new(routes),
            listener: None,
        }
    }

    /// Hace bind del listener y retorna la dirección local real
    /// (útil con puerto 0 en tests)
    pub fn bind(&mut self) -> Result<SocketAddr> {
        let address = self.config.address();
        let listener = TcpListener::bind(&address).map_err(|source| ServerError::Bind {
            address: address.clone(),
            source,
        })?;
        let local_addr = listener.local_addr()?;

        tracing::info!(address = %local_addr, port = local_addr.port(), "server bound");
        self.listener = Some(listener);
        Ok(local_addr)
    }

    /// Acepta conexiones para siempre. Hace bind si todavía no se hizo.
    pub fn run(&mut self) -> Result<()> {
        if self.listener.is_none() {
            self.bind()?;
        }
        let Some(listener) = self.listener.as_ref() else {
            return Ok(());
        };

        for stream in listener.incoming() {
            match stream {
                Ok(stream) => {
                    let routes = Arc::clone(&self.routes);
                    thread::spawn(move || {
                        if let Err(e) = Self::handle_connection(stream, &routes) {
                            tracing::warn!(error = %e, "connection error");
                        }
                    });
                }
                Err(e) => {
                    tracing::warn!(error = %e, "failed to accept connection");
                }
            }
        }

        Ok(())
    }

    /// Atiende una conexión: un read, una respuesta, cierre.
    pub fn handle_connection(mut stream: TcpStream, routes: &RouteTable) -> Result<()> {
        let peer = stream
            .peer_addr()
            .map(|addr| addr.to_string())
            .unwrap_or_else(|_| "unknown".to_string());
        tracing::info!(%peer, "client connected");

        let mut buffer = vec![0u8; READ_BUFFER_SIZE];
        let bytes_read = stream.read(&mut buffer)?;

        if bytes_read == 0 {
            tracing::info!(%peer, "client disconnected");
            return Ok(());
        }

        let response = respond(&buffer[..bytes_read], routes);
        stream.write_all(&response)?;
        stream.flush()?;
        drop(stream);

        tracing::info!(%peer, "client disconnected");
        Ok(())
    }
}

/// Parsea, despacha y serializa un evento de datos completo
///
/// ```
/// use toy_http_server::router::RouteTable;
/// use toy_http_server::server::respond;
///
/// let bytes = respond(b"GET / HTTP/1.1\r\n\r\n", &RouteTable::builtin());
/// assert!(bytes.ends_with(b"\r\n\r\n Hello World"));
/// ```
pub fn respond(buffer: &[u8], routes: &RouteTable) -> Vec<u8> {
    let request = Request::parse(buffer);
    let response = routes.dispatch(&request);

    tracing::debug!(
        method = request.method().map(|m| m.as_str()).unwrap_or(UNDEFINED),
        path = request.path().unwrap_or(UNDEFINED),
        status = response.status().as_u16(),
        bytes = buffer.len(),
        "request handled"
    );

    response.to_bytes(request.version_or_undefined())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Shutdown;

    fn ephemeral_listener() -> TcpListener {
        TcpListener::bind("127.0.0.1:0").expect("bind")
    }

    fn roundtrip(raw: &[u8]) -> String {
        let listener = ephemeral_listener();
        let addr = listener.local_addr().unwrap();

        let t = thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            Server::handle_connection(stream, &RouteTable::builtin()).unwrap();
        });

        let mut client = TcpStream::connect(addr).unwrap();
        client.write_all(raw).unwrap();
        client.shutdown(Shutdown::Write).unwrap();

        let mut buf = Vec::new();
        client.read_to_end(&mut buf).unwrap();
        t.join().unwrap();

        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_respond_hello() {
        let bytes = respond(b"GET / HTTP/1.1\r\n\r\n", &RouteTable::builtin());
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            concat!(
                "HTTP/1.1 200 OK\r\n",
                " Content-Type: text/plain\r\n",
                " Content-Length: 11 \r\n\r\n",
                " Hello World"
            )
        );
    }

    #[test]
    fn test_respond_undefined_version() {
        let bytes = respond(b"GET /", &RouteTable::builtin());
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.starts_with("undefined 200 OK\r\n"));
    }

    #[test]
    fn test_handle_connection_hello() {
        let text = roundtrip(b"GET / HTTP/1.0\r\n\r\n");

        assert!(text.starts_with("HTTP/1.0 200 OK\r\n"));
        assert!(text.ends_with(" Hello World"));
    }

    #[test]
    fn test_handle_connection_echo() {
        let text = roundtrip(b"POST /echo HTTP/1.1\r\nHost: x\r\n\r\na=1&b=2");

        assert!(text.contains(" Content-Type: application/json\r\n"));
        assert!(text.ends_with(r#" {"a":"1","b":"2"}"#));
    }

    #[test]
    fn test_handle_connection_peer_closed_immediately() {
        // Cubre rama bytes_read == 0
        let listener = ephemeral_listener();
        let addr = listener.local_addr().unwrap();

        let t = thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            Server::handle_connection(stream, &RouteTable::builtin()).unwrap();
        });

        drop(TcpStream::connect(addr).unwrap());
        t.join().unwrap();
    }

    #[test]
    fn test_bind_reports_local_addr() {
        let config = Config {
            port: 0,
            host: "127.0.0.1".to_string(),
        };
        let mut server = Server::new(config, RouteTable::builtin());
        let addr = server.bind().unwrap();
        assert_ne!(addr.port(), 0);
    }

    #[test]
    fn test_bind_port_in_use() {
        let taken = ephemeral_listener();
        let config = Config {
            port: taken.local_addr().unwrap().port(),
            host: "127.0.0.1".to_string(),
        };
        let mut server = Server::new(config, RouteTable::builtin());

        assert!(matches!(server.bind(), Err(ServerError::Bind { .. })));
    }
}
