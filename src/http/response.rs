//! # Construcción de Respuestas HTTP
//! src/http/response.rs
//!
//! Este módulo proporciona una API para construir respuestas HTTP/1.1
//! de forma programática y escribirlas directamente al socket.
//!
//! ## Formato de una respuesta HTTP/1.1
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/plain\r\n
//! Content-Length: 6\r\n
//! \r\n
//! 200 OK
//! ```
//!
//! ## Ejemplo de uso
//!
//! ```
//! use http11_server::http::{Response, StatusCode};
//!
//! let response = Response::new(StatusCode::Ok)
//!     .with_header("Content-Type", "text/plain")
//!     .with_body("200 OK");
//!
//! assert_eq!(response.header("Content-Length"), Some("6"));
//! ```
//!
//! Los headers se guardan en un `Vec` y no en un mapa: el orden de
//! inserción es el orden en el wire.

use super::StatusCode;
use std::io;
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Representa una respuesta HTTP/1.1 completa
#[derive(Debug, Clone)]
pub struct Response {
    /// Código de estado HTTP (200, 201, 404, 500)
    status: StatusCode,

    /// Headers en orden de inserción; setear un nombre existente lo
    /// actualiza en su posición original
    headers: Vec<(String, String)>,

    /// Cuerpo de la respuesta; vacío significa que no se escribe body
    /// ni Content-Length
    body: Vec<u8>,
}

impl Response {
    /// Crea una nueva respuesta con el código de estado especificado
    ///
    /// Por defecto, la respuesta no tiene headers ni body.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Agrega un header a la respuesta (versión builder)
    ///
    /// # Ejemplo
    /// ```
    /// use http11_server::http::{Response, StatusCode};
    ///
    /// let response = Response::new(StatusCode::Ok)
    ///     .with_header("Content-Type", "text/plain");
    /// ```
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.add_header(name, value);
        self
    }

    /// Agrega un header a una respuesta existente (versión mutable)
    ///
    /// Si el header ya existe se actualiza su valor conservando la
    /// posición original en el wire.
    pub fn add_header(&mut self, name: &str, value: &str) {
        if let Some(entry) = self.headers.iter_mut().find(|(n, _)| n == name) {
            entry.1 = value.to_string();
        } else {
            self.headers.push((name.to_string(), value.to_string()));
        }
    }

    /// Establece el cuerpo de la respuesta desde un string
    ///
    /// Automáticamente calcula y agrega el header `Content-Length`.
    ///
    /// # Ejemplo
    /// ```
    /// use http11_server::http::{Response, StatusCode};
    ///
    /// let response = Response::new(StatusCode::Ok)
    ///     .with_body("Hello World");
    ///
    /// assert_eq!(response.header("Content-Length"), Some("11"));
    /// ```
    pub fn with_body(self, body: &str) -> Self {
        self.with_body_bytes(body.as_bytes().to_vec())
    }

    /// Establece el cuerpo de la respuesta desde bytes
    ///
    /// Útil para respuestas binarias (archivos, contenido comprimido).
    /// El `Content-Length` se calcula sobre los bytes finales, después
    /// de cualquier compresión.
    pub fn with_body_bytes(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        let length = self.body.len().to_string();
        self.add_header("Content-Length", &length);
        self
    }

    /// Escribe la respuesta directamente al stream destino
    ///
    /// La serialización va por partes al socket, no como un buffer único:
    /// 1. Status line: `HTTP/1.1 200 OK\r\n`
    /// 2. Headers: `Name: Value\r\n` en orden de inserción
    /// 3. Línea vacía: `\r\n`
    /// 4. Body: bytes tal cual, sólo si no está vacío
    ///
    /// El caller cierra la conexión inmediatamente después: una respuesta
    /// por conexión, sin importar semánticas de keep-alive.
    pub async fn write_to<W>(&self, stream: &mut W) -> io::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        let status_line = format!("HTTP/1.1 {}\r\n", self.status);
        stream.write_all(status_line.as_bytes()).await?;

        for (name, value) in &self.headers {
            let header_line = format!("{}: {}\r\n", name, value);
            stream.write_all(header_line.as_bytes()).await?;
        }

        // Línea vacía que separa headers del body
        stream.write_all(b"\r\n").await?;

        if !self.body.is_empty() {
            stream.write_all(&self.body).await?;
        }

        Ok(())
    }

    /// Obtiene el código de estado de la respuesta
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Obtiene los headers en orden de wire
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Obtiene el valor de un header específico
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Obtiene una referencia al body
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}
