//! # Módulo Server
//!
//! Lógica del servidor TCP: accept loop, ciclo de vida de cada conexión
//! y conversión de fallos en respuestas HTTP válidas.

pub mod tcp;

pub use tcp::Server;
