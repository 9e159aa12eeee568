//! # Construcción de Respuestas
//!
//! Un handler devuelve un [`ResponseDescriptor`] (status, content type y
//! body) y el servidor lo serializa con la versión que mandó el cliente.
//!
//! ## Formato en el cable
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//!  Content-Type: text/plain\r\n
//!  Content-Length: 11 \r\n
//! \r\n
//!  Hello World
//! ```
//!
//! Los espacios antes de cada header y antes del body no son un error de
//! este módulo: los clientes existentes esperan exactamente esa forma.
//!
//! ## Ejemplo de uso
//!
//! ```
//! use toy_http_server::http::{ResponseDescriptor, StatusCode};
//!
//! let response = ResponseDescriptor::text(StatusCode::Ok, "Hello World");
//! let bytes = response.to_bytes("HTTP/1.1");
//! assert!(bytes.starts_with(b"HTTP/1.1 200 OK\r\n"));
//! ```

use super::StatusCode;

/// Content type de las respuestas de texto plano
pub const TEXT_PLAIN: &str = "text/plain";

/// Content type de `/echo`
pub const APPLICATION_JSON: &str = "application/json";

/// Descripción de una respuesta antes de serializarla
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseDescriptor {
    status: StatusCode,
    content_type: String,
    body: String,
}

impl ResponseDescriptor {
    /// Crea una respuesta con status, content type y body
    pub fn new(status: StatusCode, content_type: &str, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: content_type.to_string(),
            body: body.into(),
        }
    }

    /// Respuesta `text/plain`
    pub fn text(status: StatusCode, body: impl Into<String>) -> Self {
        Self::new(status, TEXT_PLAIN, body)
    }

    /// Respuesta `200 OK` con `Content-Type: application/json`
    pub fn json(body: impl Into<String>) -> Self {
        Self::new(StatusCode::Ok, APPLICATION_JSON, body)
    }

    /// 404 genérico: `text/plain` con body "Not Found"
    pub fn not_found() -> Self {
        Self::text(StatusCode::NotFound, StatusCode::NotFound.reason_phrase())
    }

    /// 405 genérico: `text/plain` con body "Method Not Allowed"
    pub fn method_not_allowed() -> Self {
        Self::text(
            StatusCode::MethodNotAllowed,
            StatusCode::MethodNotAllowed.reason_phrase(),
        )
    }

    /// Obtiene el código de estado de la respuesta
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Status line ya unida: "200 OK"
    pub fn status_line(&self) -> String {
        self.status.to_string()
    }

    /// Obtiene el content type
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Obtiene el body
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Longitud que se anuncia en `Content-Length`.
    ///
    /// Cuenta unidades UTF-16, no bytes: con "ñ" anuncia 1 aunque en el
    /// cable ocupe 2 bytes.
    pub fn content_length(&self) -> usize {
        self.body.encode_utf16().count()
    }

    /// Serializa la respuesta usando la versión que mandó el cliente
    ///
    /// ```
    /// use toy_http_server::http::{ResponseDescriptor, StatusCode};
    ///
    /// let response = ResponseDescriptor::text(StatusCode::NotFound, "Not Found");
    /// assert_eq!(
    ///     response.serialize("HTTP/1.0"),
    ///     concat!(
    ///         "HTTP/1.0 404 Not Found\r\n",
    ///         " Content-Type: text/plain\r\n",
    ///         " Content-Length: 9 \r\n\r\n",
    ///         " Not Found"
    ///     )
    /// );
    /// ```
    pub fn serialize(&self, version: &str) -> String {
        format!(
            "{} {}\r\n Content-Type: {}\r\n Content-Length: {} \r\n\r\n {}",
            version,
            self.status,
            self.content_type,
            self.content_length(),
            self.body
        )
    }

    /// Igual que [`serialize`](Self::serialize) pero listo para el socket
    pub fn to_bytes(&self, version: &str) -> Vec<u8> {
        self.serialize(version).into_bytes()
    }
}
