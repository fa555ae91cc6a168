//! # Handlers de Rutas
//! src/handlers/mod.rs
//!
//! Implementación de los comportamientos de cada ruta. Los handlers
//! producen una `Response` completa (incluyendo `Content-Length` sobre
//! los bytes finales del body) y dejan al connection loop lo transversal:
//! el header `Connection: close` y la conversión de errores al 500
//! genérico.
//!
//! Dos fallos distintos producen 500 por caminos distintos:
//! - La compresión que falla responde 500 *sin* body (lo resuelve el
//!   propio handler de echo).
//! - Cualquier otro fallo del handler se propaga como [`HandlerError`] y
//!   el connection loop responde 500 con body `Internal Server Error`.

use crate::compression;
use crate::http::{Request, Response, StatusCode};
use crate::storage::FileStore;

/// Errores de un handler que el connection loop convierte en 500
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerError {
    /// El request no trae un header que la ruta necesita
    MissingHeader(&'static str),
}

impl std::fmt::Display for HandlerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HandlerError::MissingHeader(name) => {
                write!(f, "Missing required header: {}", name)
            }
        }
    }
}

impl std::error::Error for HandlerError {}

/// GET `/` o `/index.html`
///
/// Responde 200 con el body fijo `200 OK`.
pub fn root() -> Response {
    Response::new(StatusCode::Ok)
        .with_header("Content-Type", "text/plain")
        .with_body("200 OK")
}

/// GET `/echo/{texto}`
///
/// Responde el texto extraído del path, comprimido con gzip si el
/// cliente lo aceptó. El `Content-Length` sale de los bytes finales,
/// después de la compresión. Si la transformación falla, 500 sin body.
pub fn echo(content: &str, accept_encoding: Option<&str>) -> Response {
    match compression::negotiate(accept_encoding, content.as_bytes()) {
        Ok((body, encoding)) => {
            let mut response =
                Response::new(StatusCode::Ok).with_header("Content-Type", "text/plain");
            if let Some(marker) = encoding {
                response.add_header("Content-Encoding", marker);
            }
            response.with_body_bytes(body)
        }
        Err(_) => Response::new(StatusCode::InternalServerError),
    }
}

/// GET `/user-agent`
///
/// Responde el valor verbatim del header `User-Agent`. Sin ese header no
/// hay contenido que responder: el error se propaga y el connection loop
/// lo convierte en el 500 genérico.
pub fn user_agent(request: &Request) -> Result<Response, HandlerError> {
    let agent = request
        .header("User-Agent")
        .ok_or(HandlerError::MissingHeader("User-Agent"))?;

    Ok(Response::new(StatusCode::Ok)
        .with_header("Content-Type", "text/plain")
        .with_body(agent))
}

/// GET `/files/{nombre}`
///
/// Responde el contenido del archivo como octet-stream. Cualquier fallo
/// de lectura (inexistente, permisos, I/O) responde 404 sin distinguir
/// la causa.
pub async fn file_get(store: &FileStore, filename: &str) -> Response {
    match store.read(filename).await {
        Ok(contents) => Response::new(StatusCode::Ok)
            .with_header("Content-Type", "application/octet-stream")
            .with_body_bytes(contents),
        Err(_) => Response::new(StatusCode::NotFound).with_body("File not found"),
    }
}

/// POST `/files/{nombre}`
///
/// Escribe el body del request verbatim en el archivo.
pub async fn file_post(store: &FileStore, filename: &str, contents: &[u8]) -> Response {
    match store.write(filename, contents).await {
        Ok(()) => Response::new(StatusCode::Created).with_body("201 Created"),
        Err(_) => Response::new(StatusCode::InternalServerError).with_body("Write failed"),
    }
}

/// Fallback cuando ningún matcher acepta el request
pub fn not_found() -> Response {
    Response::new(StatusCode::NotFound).with_body("Not Found")
}

/// Respuesta genérica para fallos de handler no convertidos a `Response`
pub fn internal_error() -> Response {
    Response::new(StatusCode::InternalServerError).with_body("Internal Server Error")
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::GzDecoder;
    use std::io::Read;

    fn gunzip(data: &[u8]) -> Vec<u8> {
        let mut decoder = GzDecoder::new(data);
        let mut out = Vec::new();
        decoder.read_to_end(&mut out).unwrap();
        out
    }

    async fn temp_store(label: &str) -> FileStore {
        let dir =
            std::env::temp_dir().join(format!("http11-handlers-{}-{}", label, std::process::id()));
        tokio::fs::create_dir_all(&dir).await.unwrap();
        FileStore::new(dir)
    }

    // ==================== Root ====================

    #[test]
    fn test_root_respuesta_exacta() {
        let response = root();

        assert_eq!(response.status(), StatusCode::Ok);
        assert_eq!(response.header("Content-Type"), Some("text/plain"));
        assert_eq!(response.header("Content-Length"), Some("6"));
        assert_eq!(response.body(), b"200 OK");
    }

    // ==================== Echo ====================

    #[test]
    fn test_echo_sin_gzip() {
        let response = echo("abc", None);

        assert_eq!(response.status(), StatusCode::Ok);
        assert_eq!(response.header("Content-Type"), Some("text/plain"));
        assert_eq!(response.header("Content-Encoding"), None);
        assert_eq!(response.header("Content-Length"), Some("3"));
        assert_eq!(response.body(), b"abc");
    }

    #[test]
    fn test_echo_con_gzip_round_trip() {
        let response = echo("hola mundo", Some("gzip"));

        assert_eq!(response.status(), StatusCode::Ok);
        assert_eq!(response.header("Content-Encoding"), Some("gzip"));
        // Content-Length sobre los bytes comprimidos
        let expected_len = response.body().len().to_string();
        assert_eq!(response.header("Content-Length"), Some(expected_len.as_str()));
        assert_eq!(gunzip(response.body()), b"hola mundo");
    }

    #[test]
    fn test_echo_accept_encoding_sin_gzip() {
        let response = echo("abc", Some("deflate"));

        assert_eq!(response.header("Content-Encoding"), None);
        assert_eq!(response.body(), b"abc");
    }

    // ==================== User-Agent ====================

    #[test]
    fn test_user_agent_verbatim() {
        let request = Request::parse(b"GET /user-agent HTTP/1.1\r\nUser-Agent: xyz/1.0\r\n\r\n");
        let response = user_agent(&request).unwrap();

        assert_eq!(response.status(), StatusCode::Ok);
        assert_eq!(response.body(), b"xyz/1.0");
        assert_eq!(response.header("Content-Length"), Some("7"));
    }

    #[test]
    fn test_user_agent_ausente_es_error() {
        let request = Request::parse(b"GET /user-agent HTTP/1.1\r\n\r\n");
        let result = user_agent(&request);

        assert_eq!(
            result.unwrap_err(),
            HandlerError::MissingHeader("User-Agent")
        );
    }

    #[test]
    fn test_user_agent_casing_distinto_es_error() {
        // Lookup sensible a mayúsculas: "user-agent" no es "User-Agent"
        let request = Request::parse(b"GET /user-agent HTTP/1.1\r\nuser-agent: foo\r\n\r\n");
        assert!(user_agent(&request).is_err());
    }

    // ==================== Files ====================

    #[tokio::test]
    async fn test_file_get_existente() {
        let store = temp_store("get").await;
        store.write("leeme.txt", b"contenido").await.unwrap();

        let response = file_get(&store, "leeme.txt").await;

        assert_eq!(response.status(), StatusCode::Ok);
        assert_eq!(
            response.header("Content-Type"),
            Some("application/octet-stream")
        );
        assert_eq!(response.body(), b"contenido");
    }

    #[tokio::test]
    async fn test_file_get_inexistente_404() {
        let store = temp_store("get-404").await;

        let response = file_get(&store, "no-existe.txt").await;

        assert_eq!(response.status(), StatusCode::NotFound);
        assert_eq!(response.body(), b"File not found");
    }

    #[tokio::test]
    async fn test_file_post_escribe_y_confirma() {
        let store = temp_store("post").await;

        let response = file_post(&store, "nuevo.txt", b"hello").await;

        assert_eq!(response.status(), StatusCode::Created);
        assert_eq!(response.body(), b"201 Created");
        assert_eq!(store.read("nuevo.txt").await.unwrap(), b"hello");
    }

    #[tokio::test]
    async fn test_file_post_fallo_de_escritura_500() {
        let store = FileStore::new("/ruta/que/no/existe/jamas");

        let response = file_post(&store, "x.txt", b"datos").await;

        assert_eq!(response.status(), StatusCode::InternalServerError);
        assert_eq!(response.body(), b"Write failed");
    }

    // ==================== Fallbacks ====================

    #[test]
    fn test_not_found() {
        let response = not_found();
        assert_eq!(response.status(), StatusCode::NotFound);
        assert_eq!(response.body(), b"Not Found");
    }

    #[test]
    fn test_internal_error() {
        let response = internal_error();
        assert_eq!(response.status(), StatusCode::InternalServerError);
        assert_eq!(response.body(), b"Internal Server Error");
    }
}
