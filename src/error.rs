//! # Errores del Servidor
//! src/error.rs
//!
//! El parsing y el despacho no fallan nunca; los únicos errores son de
//! transporte.

use thiserror::Error;

/// Result con el error del servidor
pub type Result<T> = std::result::Result<T, ServerError>;

/// Errores de transporte
#[derive(Debug, Error)]
pub enum ServerError {
    /// No se pudo hacer bind (puerto ocupado, permisos...). Es fatal.
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuración inválida
    #[error("invalid configuration: {0}")]
    Config(String),

    /// `.env` presente pero ilegible o mal formado
    #[error("failed to load env file: {0}")]
    EnvFile(#[from] dotenvy::Error),

    /// Error de I/O en una conexión
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_bind_error_message() {
        let err = ServerError::Bind {
            address: "0.0.0.0:8080".to_string(),
            source: io::Error::new(io::ErrorKind::AddrInUse, "address in use"),
        };
        assert_eq!(err.to_string(), "failed to bind 0.0.0.0:8080: address in use");
    }

    #[test]
    fn test_io_from() {
        let err: ServerError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe").into();
        assert!(matches!(err, ServerError::Io(_)));
    }
}
