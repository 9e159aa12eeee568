//! # Parsing de Requests
//! src/http/request.rs
//!
//! Parser "a la ligera": el buffer completo se parte por `\n` y cada
//! línea conserva su `\r` final.
//!
//! ```text
//! GET /path?x=5&y=6 HTTP/1.1\r      <- línea 0: request line
//! Host: localhost\r                 <- headers (desde la línea 1)
//! \r                                <- fin de headers
//! a=1&b=2                           <- última línea: siempre es el body
//! ```
//!
//! Nunca falla. Lo que falta queda como `None` y al llegar a la
//! respuesta se imprime como `undefined`.

use std::collections::HashMap;
use std::fmt;

/// Texto con el que se imprime un campo ausente
pub const UNDEFINED: &str = "undefined";

/// Método HTTP tal como vino en la request line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// GET - Obtener un recurso
    Get,

    /// POST - Enviar datos a un recurso
    Post,

    /// Cualquier otro token (PUT, DELETE, basura...), guardado tal cual
    Other(String),
}

impl Method {
    /// Interpreta un token de la request line. Sensible a mayúsculas:
    /// "get" queda como `Other`.
    pub fn from_token(token: &str) -> Self {
        match token {
            "GET" => Method::Get,
            "POST" => Method::Post,
            other => Method::Other(other.to_string()),
        }
    }

    /// Convierte el método a string
    pub fn as_str(&self) -> &str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Other(token) => token,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request parseado a partir de un único evento de datos
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Método HTTP (token 0 de la request line)
    method: Option<Method>,

    /// Path sin query (ej: "/echo"), sin normalizar
    path: Option<String>,

    /// Versión tal como la mandó el cliente, sin el `\r`
    version: Option<String>,

    /// Headers con el nombre en minúsculas
    headers: HashMap<String, Option<String>>,

    /// Query parameters (ej: {"x": Some("5")})
    query: HashMap<String, Option<String>>,

    /// Última línea del buffer
    body: String,
}

impl Request {
    /// Parsea un request desde los bytes de un único `read`
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use toy_http_server::http::Request;
    ///
    /// let request = Request::parse(b"GET /?x=5&y=6 HTTP/1.1\r\n\r\n");
    ///
    /// assert_eq!(request.path(), Some("/"));
    /// assert_eq!(request.query_param("x"), Some("5"));
    /// assert_eq!(request.version(), Some("HTTP/1.1"));
    /// ```
    pub fn parse(buffer: &[u8]) -> Self {
        let text = String::from_utf8_lossy(buffer);
        let lines: Vec<&str> = text.split('\n').collect();
        Self::from_lines(&lines)
    }

    /// Construye el request a partir de las líneas ya separadas por `\n`
    pub fn from_lines(lines: &[&str]) -> Self {
        let request_line = lines.first().copied().unwrap_or_default();
        let mut tokens = request_line.split(' ');

        let method = tokens.next().map(Method::from_token);
        let raw_path = tokens.next();
        let version = tokens.next().map(|v| v.replacen('\r', "", 1));

        let (path, query) = match raw_path {
            Some(raw) => {
                let (path, query) = split_path_and_query(raw);
                (Some(path), query)
            }
            None => (None, HashMap::new()),
        };

        Request {
            method,
            path,
            version,
            headers: parse_headers(lines),
            query,
            body: lines.last().copied().unwrap_or_default().to_string(),
        }
    }

    // === Métodos públicos para acceder a los campos ===

    /// Obtiene el método HTTP, si la request line tenía al menos un token
    pub fn method(&self) -> Option<&Method> {
        self.method.as_ref()
    }

    /// Obtiene el path (sin query)
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Obtiene la versión HTTP
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Versión lista para imprimir en la status line
    pub fn version_or_undefined(&self) -> &str {
        self.version().unwrap_or(UNDEFINED)
    }

    /// Obtiene todos los headers
    pub fn headers(&self) -> &HashMap<String, Option<String>> {
        &self.headers
    }

    /// Obtiene un header por su nombre en minúsculas
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.as_deref())
    }

    /// Obtiene todos los query parameters
    pub fn query(&self) -> &HashMap<String, Option<String>> {
        &self.query
    }

    /// Obtiene el valor de un query parameter
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query.get(name).and_then(|v| v.as_deref())
    }

    /// Obtiene el body (la última línea del buffer)
    pub fn body(&self) -> &str {
        &self.body
    }
}

/// Separa el path de la query en el primer `?`.
///
/// Si hay más de un `?`, solo cuenta el segmento entre el primero y el
/// segundo: "/a?x=1?y=2" da path "/a" y query {"x": "1"}.
fn split_path_and_query(raw: &str) -> (String, HashMap<String, Option<String>>) {
    let mut parts = raw.split('?');
    let path = parts.next().unwrap_or_default().to_string();
    let query = parts.next().map(parse_pairs).unwrap_or_default();
    (path, query)
}

/// Decodifica pares `k=v` separados por `&`.
///
/// Se usa para la query string y para el body de `/echo`. Sin
/// percent-decoding. El valor es el segmento entre el primer y el segundo
/// `=`; si no hay `=` el valor queda en `None`. Claves repetidas: gana la
/// última.
pub fn parse_pairs(input: &str) -> HashMap<String, Option<String>> {
    let mut pairs = HashMap::new();
    for (key, value) in pair_iter(input) {
        pairs.insert(key, value);
    }
    pairs
}

/// Igual que [`parse_pairs`] pero conservando el orden de aparición
pub(crate) fn pair_iter(input: &str) -> impl Iterator<Item = (String, Option<String>)> + '_ {
    input.split('&').map(|pair| {
        let mut kv = pair.split('=');
        let key = kv.next().unwrap_or_default().to_string();
        let value = kv.next().map(str::to_string);
        (key, value)
    })
}

/// Parsea los headers a partir de la línea 1.
///
/// Para cuando encuentra una línea que es exactamente `"\r"` o cuando el
/// índice llega a `lines.len() - 2`. No hay terminador de línea vacía real:
/// si el buffer no trae `\r`, el límite por índice corta el recorrido.
///
/// El valor es el segmento entre el primer y el segundo `:`, igual que en
/// los pares `k=v`: "Host: localhost:8080" queda como "localhost".
fn parse_headers(lines: &[&str]) -> HashMap<String, Option<String>> {
    let mut headers = HashMap::new();
    let limit = lines.len().saturating_sub(2);

    let mut idx = 1;
    while idx < limit && lines[idx] != "\r" {
        let mut parts = lines[idx].split(':');
        let name = parts.next().unwrap_or_default().trim().to_lowercase();
        let value = parts.next().map(|v| v.trim().to_string());
        headers.insert(name, value);
        idx += 1;
    }

    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_get() {
        let request = Request::parse(b"GET / HTTP/1.1\r\n\r\n");

        assert_eq!(request.method(), Some(&Method::Get));
        assert_eq!(request.path(), Some("/"));
        assert_eq!(request.version(), Some("HTTP/1.1"));
        assert!(request.query().is_empty());
        assert!(request.headers().is_empty());
        assert_eq!(request.body(), "");
    }

    #[test]
    fn test_parse_with_query_params() {
        let request = Request::parse(b"GET /?x=5&y=6 HTTP/1.1\r\n\r\n");

        assert_eq!(request.path(), Some("/"));
        assert_eq!(request.query_param("x"), Some("5"));
        assert_eq!(request.query_param("y"), Some("6"));
        assert_eq!(request.query().len(), 2);
    }

    #[test]
    fn test_query_without_value_is_undefined() {
        let request = Request::parse(b"GET /search?debug&q=1 HTTP/1.1\r\n\r\n");

        assert_eq!(request.query().get("debug"), Some(&None));
        assert_eq!(request.query_param("q"), Some("1"));
    }

    #[test]
    fn test_query_repeated_key_last_wins() {
        let request = Request::parse(b"GET /?a=1&a=2 HTTP/1.1\r\n\r\n");
        assert_eq!(request.query_param("a"), Some("2"));
    }

    #[test]
    fn test_query_no_percent_decoding() {
        let request = Request::parse(b"GET /?text=hello%20world HTTP/1.1\r\n\r\n");
        assert_eq!(request.query_param("text"), Some("hello%20world"));
    }

    #[test]
    fn test_query_only_first_segment() {
        let request = Request::parse(b"GET /a?x=1?y=2 HTTP/1.1\r\n\r\n");

        assert_eq!(request.path(), Some("/a"));
        assert_eq!(request.query_param("x"), Some("1"));
        assert!(request.query().get("y").is_none());
    }

    #[test]
    fn test_parse_with_headers() {
        let raw = b"GET / HTTP/1.1\r\nHost: localhost\r\nUser-Agent:  test \r\n\r\n";
        let request = Request::parse(raw);

        assert_eq!(request.header("host"), Some("localhost"));
        assert_eq!(request.header("user-agent"), Some("test"));
        assert_eq!(request.header("Host"), None);
    }

    #[test]
    fn test_header_value_stops_at_second_colon() {
        let raw = b"GET / HTTP/1.1\r\nHost: localhost:8080\r\nX-Time:  12:30:00 \r\n\r\n";
        let request = Request::parse(raw);

        assert_eq!(request.header("host"), Some("localhost"));
        assert_eq!(request.header("x-time"), Some("12"));
    }

    #[test]
    fn test_duplicate_header_overwrites() {
        let raw = b"GET / HTTP/1.1\r\nX-A: 1\r\nx-a: 2\r\n\r\n";
        let request = Request::parse(raw);

        assert_eq!(request.header("x-a"), Some("2"));
        assert_eq!(request.headers().len(), 1);
    }

    #[test]
    fn test_header_without_colon_has_no_value() {
        let raw = b"GET / HTTP/1.1\r\nGarbage\r\n\r\n";
        let request = Request::parse(raw);

        assert_eq!(request.headers().get("garbage"), Some(&None));
    }

    #[test]
    fn test_headers_stop_by_index_without_cr_line() {
        // Sin línea "\r": el límite por índice deja fuera las dos últimas
        let raw = b"GET / HTTP/1.1\nA: 1\nB: 2\nC: 3\nbody";
        let request = Request::parse(raw);

        assert_eq!(request.header("a"), Some("1"));
        assert_eq!(request.header("b"), Some("2"));
        assert_eq!(request.header("c"), None);
        assert_eq!(request.body(), "body");
    }

    #[test]
    fn test_headers_short_buffer_never_overruns() {
        let request = Request::parse(b"GET / HTTP/1.1\r\nHost: x");
        assert!(request.headers().is_empty());
        assert_eq!(request.body(), "Host: x");

        let request = Request::parse(b"GET / HTTP/1.1");
        assert!(request.headers().is_empty());
    }

    #[test]
    fn test_body_is_last_line() {
        let raw = b"POST /echo HTTP/1.1\r\nContent-Type: x\r\n\r\na=1&b=2";
        let request = Request::parse(raw);

        assert_eq!(request.method(), Some(&Method::Post));
        assert_eq!(request.body(), "a=1&b=2");
        assert_eq!(request.header("content-type"), Some("x"));
    }

    #[test]
    fn test_body_ignores_earlier_lines() {
        // Un body de varias líneas se pierde salvo la última
        let raw = b"POST /echo HTTP/1.1\r\n\r\nfirst\nsecond";
        let request = Request::parse(raw);
        assert_eq!(request.body(), "second");
    }

    #[test]
    fn test_missing_tokens_are_undefined() {
        let request = Request::parse(b"GET\r\n\r\n");

        assert_eq!(request.method(), Some(&Method::Get));
        assert_eq!(request.path(), None);
        assert_eq!(request.version(), None);
        assert_eq!(request.version_or_undefined(), "undefined");
    }

    #[test]
    fn test_empty_buffer() {
        let request = Request::parse(b"");

        assert_eq!(request.method(), Some(&Method::Other(String::new())));
        assert_eq!(request.path(), None);
        assert_eq!(request.body(), "");
    }

    #[test]
    fn test_unknown_method_kept_verbatim() {
        let request = Request::parse(b"PUT / HTTP/1.1\r\n\r\n");
        assert_eq!(request.method(), Some(&Method::Other("PUT".to_string())));
        assert_eq!(request.method().map(Method::as_str), Some("PUT"));
    }

    #[test]
    fn test_split_on_single_space() {
        // Dos espacios seguidos producen un token vacío como path
        let request = Request::parse(b"GET  / HTTP/1.1\r\n\r\n");
        assert_eq!(request.path(), Some(""));
        assert_eq!(request.version(), Some("/"));
    }

    #[test]
    fn test_invalid_utf8_is_lossy() {
        let request = Request::parse(b"GET /\xff HTTP/1.1\r\n\r\n");
        assert_eq!(request.path(), Some("/\u{FFFD}"));
    }

    #[test]
    fn test_parse_pairs() {
        let pairs = parse_pairs("a=1&b=2=3&c");

        assert_eq!(pairs.get("a"), Some(&Some("1".to_string())));
        assert_eq!(pairs.get("b"), Some(&Some("2".to_string())));
        assert_eq!(pairs.get("c"), Some(&None));
    }
}
