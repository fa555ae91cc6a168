//! # Parsing de Requests HTTP/1.1
//! src/http/request.rs
//!
//! Este módulo implementa el parser de requests desde cero, sobre el buffer
//! crudo de una única lectura del socket.
//!
//! ## Formato de un Request HTTP/1.1
//!
//! ```text
//! GET /echo/hola HTTP/1.1\r\n
//! Host: localhost:4221\r\n
//! User-Agent: curl/7.68.0\r\n
//! \r\n
//! ```
//!
//! ## Componentes
//!
//! 1. **Request Line**: `METHOD /path VERSION`
//! 2. **Headers**: Pares `Name: Value` (uno por línea)
//! 3. **Empty Line**: `\r\n` que separa headers del body
//! 4. **Body**: todo lo que sigue al primer `\r\n\r\n` del buffer original
//!
//! ## El parser nunca falla
//!
//! Un request malformado produce un `Request` con campos vacíos o parciales,
//! nunca un error. Tokens ausentes en la request line quedan como strings
//! vacíos, las líneas de header sin `:` se descartan en silencio y los bytes
//! que no son UTF-8 válido se decodifican con reemplazo. El router y los
//! handlers deciden qué hacer con lo que haya quedado.

use std::collections::HashMap;

/// Representa un request HTTP parseado desde una lectura del socket
///
/// Inmutable una vez construido; vive sólo durante el ciclo
/// request/response de una conexión.
#[derive(Debug, Clone)]
pub struct Request {
    /// Método HTTP tal como llegó en el wire ("GET", "POST", ...).
    /// Se compara por igualdad de strings, sin enum ni validación.
    method: String,

    /// Path crudo del request, sin escapar ni validar.
    /// Un query string es parte literal del path.
    path: String,

    /// Versión HTTP declarada por el cliente (se parsea pero no se usa)
    version: String,

    /// Headers con el nombre tal como fue escrito (sin normalizar case).
    /// Ante nombres duplicados gana la última ocurrencia.
    headers: HashMap<String, String>,

    /// Body: todo lo que sigue al primer `\r\n\r\n` del buffer.
    /// No se reconcilia con Content-Length ni se reensamblan lecturas.
    body: String,
}

impl Request {
    /// Parsea un request HTTP desde los bytes de una lectura del socket
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use http11_server::http::Request;
    ///
    /// let raw = b"GET /echo/hola HTTP/1.1\r\nHost: localhost:4221\r\n\r\n";
    /// let request = Request::parse(raw);
    ///
    /// assert_eq!(request.method(), "GET");
    /// assert_eq!(request.path(), "/echo/hola");
    /// assert_eq!(request.header("Host"), Some("localhost:4221"));
    /// ```
    pub fn parse(buffer: &[u8]) -> Self {
        // Decodificación con reemplazo: bytes inválidos no abortan el parseo
        let raw = String::from_utf8_lossy(buffer);

        let lines: Vec<&str> = raw.split("\r\n").collect();

        // 1. Request line (primera línea)
        let (method, path, version) = Self::parse_request_line(lines[0]);

        // 2. Headers (desde la línea 1 hasta la primera línea vacía)
        let headers = Self::parse_headers(&lines[1..]);

        // 3. Body: se extrae del buffer original, independiente del
        //    escaneo línea por línea de los headers
        let body = Self::parse_body(&raw);

        Request {
            method,
            path,
            version,
            headers,
            body,
        }
    }

    /// Parsea la request line en sus tres tokens
    ///
    /// Formato: `GET /path HTTP/1.1`. Se separa por espacios simples;
    /// los tokens ausentes quedan como strings vacíos.
    fn parse_request_line(line: &str) -> (String, String, String) {
        let mut parts = line.splitn(3, ' ');

        let method = parts.next().unwrap_or("").to_string();
        let path = parts.next().unwrap_or("").to_string();
        let version = parts.next().unwrap_or("").to_string();

        (method, path, version)
    }

    /// Parsea los headers HTTP
    ///
    /// Cada línea se separa en el primer `:`. El nombre se usa tal cual
    /// (sin recortar ni normalizar); el valor se recorta de espacios.
    /// Una línea sin `:` se descarta en silencio.
    fn parse_headers(lines: &[&str]) -> HashMap<String, String> {
        let mut headers = HashMap::new();

        for line in lines {
            // La línea vacía marca el fin de los headers
            if line.trim().is_empty() {
                break;
            }

            if let Some(colon_pos) = line.find(':') {
                let name = line[..colon_pos].to_string();
                let value = line[colon_pos + 1..].trim().to_string();
                // insert sobrescribe: ante duplicados gana la última ocurrencia
                headers.insert(name, value);
            }
        }

        headers
    }

    /// Extrae el body del request
    ///
    /// Es todo lo que sigue a la primera ocurrencia de `\r\n\r\n` en el
    /// buffer original; vacío si el separador no aparece.
    fn parse_body(raw: &str) -> String {
        match raw.find("\r\n\r\n") {
            Some(pos) => raw[pos + 4..].to_string(),
            None => String::new(),
        }
    }

    // === Métodos públicos para acceder a los campos ===

    /// Obtiene el método HTTP del request
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Obtiene el path del request
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Obtiene la versión HTTP declarada
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Obtiene todos los headers
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Obtiene un header específico
    ///
    /// La búsqueda es sensible a mayúsculas: el nombre debe coincidir
    /// exactamente con el casing que escribió el cliente
    /// (`Accept-Encoding`, `User-Agent`, `Connection`).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(|s| s.as_str())
    }

    /// Obtiene el body del request
    pub fn body(&self) -> &str {
        &self.body
    }
}
