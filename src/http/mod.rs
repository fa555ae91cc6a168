//! # Módulo HTTP
//!
//! Este módulo implementa el subconjunto de HTTP/1.1 que necesita el
//! servidor, desde cero y sin librerías de alto nivel. Incluye:
//!
//! - Parsing de requests desde el buffer crudo del socket
//! - Construcción de responses y su escritura al stream
//! - Manejo de status codes
//!
//! ## Alcance del protocolo
//!
//! El servidor atiende exactamente un request por conexión:
//! - Sin conexiones persistentes ni pipelining
//! - Sin chunked transfer encoding
//! - El body debe caber en una sola lectura del socket
//!
//! ### Formato de Request
//!
//! ```text
//! GET /path HTTP/1.1\r\n
//! Header-Name: Header-Value\r\n
//! Another-Header: Value\r\n
//! \r\n
//! ```
//!
//! ### Formato de Response
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/plain\r\n
//! Content-Length: 6\r\n
//! \r\n
//! 200 OK
//! ```

pub mod request;   // Parsing de HTTP requests
pub mod response;  // Construcción de HTTP responses
pub mod status;    // Códigos de estado HTTP

// Re-exportamos los tipos principales para facilitar su uso
// Esto permite usar `http::Request` en vez de `http::request::Request`
pub use request::Request;
pub use response::Response;
pub use status::StatusCode;
