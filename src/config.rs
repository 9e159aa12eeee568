//! # Configuración del Servidor
//! src/config.rs
//!
//! El único ajuste real es el puerto. Se lee una vez al arrancar, desde
//! argumentos CLI o variables de entorno.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./toy_http_server --port 3000
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! PORT=3000 HOST=127.0.0.1 ./toy_http_server
//! ```
//!
//! ### Archivo `.env`
//! Si existe un `.env` en el directorio actual se carga antes de parsear.
//! Las variables que ya estén en el entorno no se pisan.

use std::path::Path;

use clap::Parser;

use crate::error::ServerError;

/// Archivo de entorno que se busca al arrancar
pub const ENV_FILE: &str = ".env";

/// Carga un archivo `.env` en el entorno del proceso.
///
/// Que el archivo no exista no es un error; que exista y esté mal formado sí.
/// Retorna `true` si se cargó.
pub fn load_env_file(path: &Path) -> Result<bool, ServerError> {
    match dotenvy::from_path(path) {
        Ok(()) => Ok(true),
        Err(e) if e.not_found() => Ok(false),
        Err(e) => Err(e.into()),
    }
}

/// Configuración del servidor
#[derive(Debug, Clone, Parser)]
#[command(name = "toy_http_server")]
#[command(about = "Servidor HTTP/1.0 de juguete con dos rutas: GET / y POST /echo")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Puerto en el que escucha el servidor
    #[arg(short, long, default_value = "8080", env = "PORT")]
    pub port: u16,

    /// Host/IP en el que escucha (todas las interfaces por defecto)
    #[arg(long, default_value = "0.0.0.0", env = "HOST")]
    pub host: String,
}

impl Config {
    /// Crea una nueva configuración parseando argumentos CLI y entorno
    pub fn new() -> Self {
        Config::parse()
    }

    /// Obtiene la dirección completa para bind (host:port)
    ///
    /// # Ejemplo
    /// ```rust
    /// use toy_http_server::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.address(), "0.0.0.0:8080");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Valida la configuración
    ///
    /// Retorna errores si hay valores inválidos
    pub fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("Port must be >= 1".to_string());
        }
        if self.host.trim().is_empty() {
            return Err("Host must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    /// Configuración por defecto
    fn default() -> Self {
        Self {
            port: 8080,
            host: "0.0.0.0".to_string(),
        }
    }
}
