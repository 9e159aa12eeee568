//! # Módulo del Servidor
//! src/server/mod.rs
//!
//! Servidor TCP que:
//! 1. Escucha en un puerto
//! 2. Acepta conexiones (un thread por conexión)
//! 3. Lee un único buffer y lo trata como request completo
//! 4. Escribe la respuesta y cierra

pub mod tcp;

// Re-exportar para facilitar el uso
pub use tcp::{respond, Server};
