//! # Sistema de Routing
//! src/router/mod.rs
//!
//! Tabla de rutas inmutable: path exacto → handlers por método.
//!
//! ```text
//! Request → RouteTable::dispatch → Handler → ResponseDescriptor
//! ```
//!
//! Reglas de despacho:
//!
//! | Path     | Método                  | Resultado                  |
//! |----------|-------------------------|----------------------------|
//! | no está  | cualquiera              | 404 Not Found              |
//! | está     | GET/POST con handler    | lo que devuelva el handler |
//! | está     | GET/POST sin handler    | 404 Not Found              |
//! | está     | otro token (o ninguno)  | 405 Method Not Allowed     |
//!
//! Ojo con la tercera fila: `POST /` devuelve 404, no 405.

use std::collections::HashMap;

use crate::handlers;
use crate::http::{Method, Request, ResponseDescriptor};

/// Tipo de función handler
///
/// Un handler recibe el Request y retorna un descriptor de respuesta
pub type Handler = fn(&Request) -> ResponseDescriptor;

/// Handlers de una ruta, uno opcional por método conocido
#[derive(Clone, Copy, Default)]
pub struct MethodHandlers {
    pub get: Option<Handler>,
    pub post: Option<Handler>,
}

impl MethodHandlers {
    /// Ruta que solo responde a GET
    pub fn get(handler: Handler) -> Self {
        Self {
            get: Some(handler),
            post: None,
        }
    }

    /// Ruta que solo responde a POST
    pub fn post(handler: Handler) -> Self {
        Self {
            get: None,
            post: Some(handler),
        }
    }

    /// Busca el handler para un método
    pub fn lookup(&self, method: Option<&Method>) -> MethodLookup {
        match method {
            Some(Method::Get) => self.get.map_or(MethodLookup::NoHandler, MethodLookup::Found),
            Some(Method::Post) => self.post.map_or(MethodLookup::NoHandler, MethodLookup::Found),
            _ => MethodLookup::Unsupported,
        }
    }
}

/// Resultado de buscar un método dentro de una ruta
#[derive(Clone, Copy)]
pub enum MethodLookup {
    /// Hay handler registrado
    Found(Handler),

    /// GET o POST, pero la ruta no lo registra
    NoHandler,

    /// Método que no es ni GET ni POST
    Unsupported,
}

/// Tabla de rutas. Se construye una vez al arrancar y después solo se lee.
#[derive(Clone, Default)]
pub struct RouteTable {
    routes: HashMap<String, MethodHandlers>,
}

impl RouteTable {
    /// Crea una tabla vacía (todo responde 404)
    pub fn new() -> Self {
        Self::default()
    }

    /// Tabla con las rutas del servidor: `GET /` y `POST /echo`
    pub fn builtin() -> Self {
        Self::new()
            .with_route("/", MethodHandlers::get(handlers::hello_handler))
            .with_route("/echo", MethodHandlers::post(handlers::echo_handler))
    }

    /// Agrega una ruta. Si el path ya existía se reemplaza.
    ///
    /// # Ejemplo
    /// ```
    /// use toy_http_server::router::{MethodHandlers, RouteTable};
    /// use toy_http_server::http::{Request, ResponseDescriptor, StatusCode};
    ///
    /// fn ping(_req: &Request) -> ResponseDescriptor {
    ///     ResponseDescriptor::text(StatusCode::Ok, "pong")
    /// }
    ///
    /// let table = RouteTable::new().with_route("/ping", MethodHandlers::get(ping));
    /// assert!(table.lookup(Some("/ping")).is_some());
    /// ```
    pub fn with_route(mut self, path: &str, handlers: MethodHandlers) -> Self {
        self.routes.insert(path.to_string(), handlers);
        self
    }

    /// Busca una ruta por path exacto (sin normalizar `/` final)
    pub fn lookup(&self, path: Option<&str>) -> Option<&MethodHandlers> {
        path.and_then(|p| self.routes.get(p))
    }

    /// Encuentra y ejecuta el handler apropiado para un request
    ///
    /// ```
    /// use toy_http_server::router::RouteTable;
    /// use toy_http_server::http::{Request, StatusCode};
    ///
    /// let table = RouteTable::builtin();
    /// let request = Request::parse(b"GET /missing HTTP/1.1\r\n\r\n");
    /// assert_eq!(table.dispatch(&request).status(), StatusCode::NotFound);
    /// ```
    pub fn dispatch(&self, request: &Request) -> ResponseDescriptor {
        let Some(route) = self.lookup(request.path()) else {
            return ResponseDescriptor::not_found();
        };

        match route.lookup(request.method()) {
            MethodLookup::Found(handler) => handler(request),
            MethodLookup::NoHandler => ResponseDescriptor::not_found(),
            MethodLookup::Unsupported => ResponseDescriptor::method_not_allowed(),
        }
    }

    /// Cantidad de rutas registradas
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
