//! # Sistema de Routing
//! src/router/mod.rs
//!
//! Este módulo decide qué comportamiento aplica a cada request.
//!
//! ## Arquitectura
//!
//! ```text
//! Request → Router → Route → Handler → Response
//! ```
//!
//! El router es una lista ordenada de matchers evaluados de arriba hacia
//! abajo: gana el primero que acepta el request. Además de decidir la
//! ruta, cada matcher extrae sus parámetros de path (el texto a ecoar,
//! el nombre de archivo). Si ningún matcher acepta, el caller responde
//! 404.
//!
//! La extracción de parámetros verifica el prefijo antes de removerlo
//! (`strip_prefix`), nunca recorta por offset fijo: un path como
//! `/a/echo/x` no llega a la ruta echo con contenido corrupto.

use crate::http::Request;

/// Ruta resuelta con sus parámetros de path ya extraídos
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// GET `/` o `/index.html`
    Root,

    /// `/echo/{texto}`: responde el texto, opcionalmente comprimido
    Echo { content: String },

    /// `/user-agent`: responde el valor del header `User-Agent`
    UserAgent,

    /// GET `/files/{nombre}`: lee el archivo del directorio base
    FileGet { filename: String },

    /// POST `/files/{nombre}`: escribe el body en el directorio base
    FilePost { filename: String },
}

/// Un matcher acepta (y parametriza) un request, o lo deja pasar
type Matcher = fn(&Request) -> Option<Route>;

/// Router con la cadena ordenada de matchers
pub struct Router {
    routes: Vec<(&'static str, Matcher)>,
}

impl Router {
    /// Crea el router con las rutas soportadas, en orden de precedencia
    pub fn new() -> Self {
        let mut router = Self { routes: Vec::new() };

        // El orden importa: es primera-coincidencia-gana
        router.register("root", match_root);
        router.register("echo", match_echo);
        router.register("user-agent", match_user_agent);
        router.register("file-get", match_file_get);
        router.register("file-post", match_file_post);

        router
    }

    /// Agrega un matcher al final de la cadena
    fn register(&mut self, name: &'static str, matcher: Matcher) {
        self.routes.push((name, matcher));
    }

    /// Resuelve el request a una ruta, o `None` si nada coincide
    ///
    /// Retorna también el nombre de la ruta para los logs del servidor.
    ///
    /// # Ejemplo
    /// ```
    /// use http11_server::http::Request;
    /// use http11_server::router::{Route, Router};
    ///
    /// let router = Router::new();
    /// let request = Request::parse(b"GET /echo/hola HTTP/1.1\r\n\r\n");
    ///
    /// let (name, route) = router.dispatch(&request).unwrap();
    /// assert_eq!(name, "echo");
    /// assert_eq!(route, Route::Echo { content: "hola".to_string() });
    /// ```
    pub fn dispatch(&self, request: &Request) -> Option<(&'static str, Route)> {
        for &(name, matcher) in &self.routes {
            if let Some(route) = matcher(request) {
                return Some((name, route));
            }
        }
        None
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

// === Matchers, en el mismo orden en que se registran ===

fn match_root(request: &Request) -> Option<Route> {
    let path = request.path();
    (path == "/" || path == "/index.html").then_some(Route::Root)
}

fn match_echo(request: &Request) -> Option<Route> {
    request.path().strip_prefix("/echo/").map(|content| Route::Echo {
        content: content.to_string(),
    })
}

fn match_user_agent(request: &Request) -> Option<Route> {
    request
        .path()
        .contains("/user-agent")
        .then_some(Route::UserAgent)
}

fn match_file_get(request: &Request) -> Option<Route> {
    if request.method() != "GET" {
        return None;
    }
    request.path().strip_prefix("/files/").map(|filename| Route::FileGet {
        filename: filename.to_string(),
    })
}

fn match_file_post(request: &Request) -> Option<Route> {
    if request.method() != "POST" {
        return None;
    }
    request.path().strip_prefix("/files/").map(|filename| Route::FilePost {
        filename: filename.to_string(),
    })
}
