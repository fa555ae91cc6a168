//! # Negociación de Contenido
//! src/compression.rs
//!
//! Decide si una respuesta se comprime con gzip según la preferencia
//! declarada por el cliente en `Accept-Encoding`.
//!
//! La detección es por substring: basta con que el valor del header
//! contenga `gzip` (no se parsean quality values como `gzip;q=0.5`).
//! La compresión en sí es una transformación opaca delegada a `flate2`.

use std::io;
use std::io::Write;

use flate2::write::GzEncoder;
use flate2::Compression;

/// Aplica la negociación de encoding sobre un body crudo
///
/// Retorna el body final (comprimido o no) junto con el marcador que el
/// handler debe emitir como `Content-Encoding`, si corresponde. El
/// `Content-Length` es responsabilidad del caller y debe calcularse
/// sobre los bytes retornados.
///
/// # Errores
///
/// Si la transformación gzip falla, retorna el error de I/O; el caller
/// debe responder 500 sin body.
///
/// # Ejemplo
///
/// ```
/// use http11_server::compression::negotiate;
///
/// let (body, encoding) = negotiate(None, b"hola").unwrap();
/// assert_eq!(body, b"hola");
/// assert!(encoding.is_none());
///
/// let (body, encoding) = negotiate(Some("gzip"), b"hola").unwrap();
/// assert_eq!(encoding, Some("gzip"));
/// assert_ne!(body, b"hola");
/// ```
pub fn negotiate(
    accept_encoding: Option<&str>,
    raw: &[u8],
) -> io::Result<(Vec<u8>, Option<&'static str>)> {
    match accept_encoding {
        Some(value) if value.contains("gzip") => {
            let compressed = gzip(raw)?;
            Ok((compressed, Some("gzip")))
        }
        _ => Ok((raw.to_vec(), None)),
    }
}

/// Comprime un buffer con gzip al nivel por defecto
fn gzip(data: &[u8]) -> io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}
