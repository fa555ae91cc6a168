//! # HTTP/1.1 Server
//! src/lib.rs
//!
//! Servidor HTTP/1.1 minimalista implementado directamente sobre sockets
//! TCP, sin librerías HTTP de alto nivel. Atiende un request por
//! conexión: parsea la request line y los headers del buffer crudo,
//! despacha a un conjunto fijo de rutas y serializa una respuesta
//! bien formada (status line, headers, body, gzip opcional).
//!
//! ## Arquitectura
//!
//! El servidor está dividido en módulos especializados:
//! - `http`: Parsing de requests y construcción de responses
//! - `compression`: Negociación gzip según `Accept-Encoding`
//! - `router`: Cadena ordenada de matchers, primera coincidencia gana
//! - `handlers`: Comportamiento de cada ruta soportada
//! - `storage`: Lectura/escritura de archivos bajo `--directory`
//! - `server`: Accept loop y ciclo de vida de cada conexión
//! - `config`: Argumentos CLI y variables de entorno
//!
//! ## Ejemplo de uso
//!
//! ```ignore
//! use http11_server::config::Config;
//! use http11_server::server::Server;
//!
//! let config = Config::new();
//! let server = Server::new(config);
//! server.run().await.expect("Error al iniciar servidor");
//! ```

pub mod compression;
pub mod config;
pub mod handlers;
pub mod http;
pub mod router;
pub mod server;
pub mod storage;
