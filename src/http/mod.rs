//! # Módulo HTTP
//!
//! "HTTP" entre comillas: el servidor no implementa el protocolo, lo
//! aproxima partiendo el buffer por líneas. Incluye:
//!
//! - Parsing de requests a partir de un único buffer
//! - Descriptores de respuesta y su serialización
//! - Los status codes que el servidor puede devolver
//!
//! ### Formato de Request esperado
//!
//! ```text
//! POST /echo HTTP/1.1\r\n
//! Header-Name: Header-Value\r\n
//! \r\n
//! a=1&b=2
//! ```
//!
//! ### Formato de Response
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//!  Content-Type: application/json\r\n
//!  Content-Length: 17 \r\n
//! \r\n
//!  {"a":"1","b":"2"}
//! ```

pub mod request;   // Parsing de requests
pub mod response;  // Descriptores de respuesta
pub mod status;    // Códigos de estado HTTP

// Re-exportamos los tipos principales para facilitar su uso
pub use request::{Method, Request};
pub use response::ResponseDescriptor;
pub use status::StatusCode;
