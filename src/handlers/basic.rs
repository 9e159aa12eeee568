//! # Handlers Básicos
//! src/handlers/basic.rs
//!
//! Las dos rutas del servidor:
//! - `GET /`: saludo en texto plano
//! - `POST /echo`: devuelve el body `k=v&...` como objeto JSON

use serde_json::{Map, Value};

use crate::http::request::pair_iter;
use crate::http::{Request, ResponseDescriptor, StatusCode};

/// Handler para `GET /`
///
/// # Ejemplo de response
/// ```text
/// Hello World
/// ```
pub fn hello_handler(_req: &Request) -> ResponseDescriptor {
    ResponseDescriptor::text(StatusCode::Ok, "Hello World")
}

/// Handler para `POST /echo`
///
/// Decodifica el body con las mismas reglas que la query string y lo
/// devuelve como JSON. Los pares sin `=` no tienen valor y no aparecen en
/// el objeto.
///
/// # Ejemplo de response
/// ```json
/// {"a":"1","b":"2"}
/// ```
pub fn echo_handler(req: &Request) -> ResponseDescriptor {
    ResponseDescriptor::json(echo_json(req.body()))
}

/// Convierte `a=1&b=2` en `{"a":"1","b":"2"}`.
///
/// Orden de las claves: primero las que son índices de arreglo (`"0"`,
/// `"12"`...) de menor a mayor, después el resto en orden de aparición.
/// Una clave repetida conserva su primera posición y toma el último valor;
/// si ese último valor falta, la clave no se imprime.
fn echo_json(body: &str) -> String {
    let mut pairs = Map::new();
    for (key, value) in pair_iter(body) {
        pairs.insert(key, value.map_or(Value::Null, Value::String));
    }

    let (mut indexed, named): (Vec<_>, Vec<_>) = pairs
        .into_iter()
        .filter(|(_, v)| !v.is_null())
        .partition(|(k, _)| array_index(k).is_some());
    indexed.sort_by_key(|(k, _)| array_index(k));

    let object: Map<String, Value> = indexed.into_iter().chain(named).collect();
    Value::Object(object).to_string()
}

/// Índice de arreglo canónico: decimal sin ceros a la izquierda y menor que
/// `u32::MAX` ("0" sí, "01" y "4294967295" no)
fn array_index(key: &str) -> Option<u32> {
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if key.len() > 1 && key.starts_with('0') {
        return None;
    }
    key.parse::<u32>().ok().filter(|n| *n != u32::MAX)
}
