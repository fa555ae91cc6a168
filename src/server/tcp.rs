//! # Servidor TCP Asíncrono
//! src/server/tcp.rs
//!
//! Accept loop y manejo de conexiones sobre un único event loop de
//! tokio. Cada conexión aceptada corre en su propio task y atiende
//! exactamente un request:
//!
//! ```text
//! Idle → Reading → Dispatching → Writing → Closed
//! ```
//!
//! `Closed` es terminal: no hay keep-alive ni segunda lectura, la
//! conexión se cierra después de escribir la respuesta sin importar lo
//! que pida el cliente.
//!
//! ## Limitaciones conocidas
//!
//! - El request completo debe caber en una sola lectura del socket
//!   (8 KiB); un body que llegue en un segundo segmento no se reensambla.
//! - No hay timeout de lectura: una conexión que no envía datos retiene
//!   su task indefinidamente.

use crate::config::Config;
use crate::handlers::{self, HandlerError};
use crate::http::{Request, Response};
use crate::router::{Route, Router};
use crate::storage::FileStore;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// Tamaño del buffer de lectura por conexión
const READ_BUFFER_SIZE: usize = 8192;

/// Servidor HTTP/1.1 con un task por conexión
pub struct Server {
    config: Config,
    router: Arc<Router>,
    store: Arc<FileStore>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        let store = FileStore::new(config.directory.clone());

        Self {
            config,
            router: Arc::new(Router::new()),
            store: Arc::new(store),
        }
    }

    /// Hace bind a la dirección configurada y atiende conexiones
    ///
    /// Bloquea el task actual; sólo retorna si el bind falla.
    pub async fn run(self) -> std::io::Result<()> {
        let address = self.config.address();
        println!("[*] Iniciando servidor en {}", address);

        let listener = TcpListener::bind(&address).await?;
        println!("[+] Servidor escuchando en {}", address);
        println!("[*] Modo concurrente: un task por conexión\n");

        self.serve(listener).await
    }

    /// Atiende conexiones sobre un listener ya creado
    ///
    /// Separado de [`run`](Server::run) para que los tests puedan usar un
    /// puerto efímero.
    pub async fn serve(self, listener: TcpListener) -> std::io::Result<()> {
        loop {
            match listener.accept().await {
                Ok((stream, peer_addr)) => {
                    let router = Arc::clone(&self.router);
                    let store = Arc::clone(&self.store);

                    println!("   ✅ Nueva conexión desde: {} (spawning task)", peer_addr);

                    tokio::spawn(async move {
                        if let Err(e) = Self::handle_connection(stream, router, store).await {
                            eprintln!("   ❌ Error en conexión: {}", e);
                        }
                    });
                }
                Err(e) => {
                    eprintln!("   ❌ Error al aceptar conexión: {}", e);
                }
            }
        }
    }

    /// Ciclo completo de una conexión: una lectura, un request, una
    /// respuesta, cierre
    async fn handle_connection(
        mut stream: TcpStream,
        router: Arc<Router>,
        store: Arc<FileStore>,
    ) -> std::io::Result<()> {
        // Reading: una sola lectura del socket
        let mut buffer = [0u8; READ_BUFFER_SIZE];
        let bytes_read = stream.read(&mut buffer).await?;

        if bytes_read == 0 {
            println!("   ✅ Conexión cerrada por el cliente");
            return Ok(());
        }

        // Dispatching: parse → route → handler
        let request = Request::parse(&buffer[..bytes_read]);
        println!(
            "   ✅ {} {} ({} bytes)",
            request.method(),
            request.path(),
            bytes_read
        );

        let response = Self::dispatch(&request, &router, &store).await;

        // Writing: la respuesta va directo al stream
        response.write_to(&mut stream).await?;
        stream.flush().await?;

        let marker = if response.status().is_success() { "✅" } else { "❌" };
        println!("   {} {}\n", marker, response.status());

        // Closed: estado terminal, una respuesta por conexión
        stream.shutdown().await?;
        Ok(())
    }

    /// Resuelve un request a su respuesta final
    ///
    /// Todo fallo termina convertido en una respuesta HTTP válida: ruta
    /// desconocida en 404 y error de handler en el 500 genérico. La
    /// conexión nunca se corta por un error de aplicación.
    async fn dispatch(request: &Request, router: &Router, store: &FileStore) -> Response {
        let result = match router.dispatch(request) {
            Some((name, route)) => {
                println!("   ✅ Ruta: {}", name);
                Self::run_route(route, request, store).await
            }
            None => Ok(handlers::not_found()),
        };

        let mut response = match result {
            Ok(response) => response,
            Err(e) => {
                eprintln!("   ❌ Error en handler: {}", e);
                handlers::internal_error()
            }
        };

        // Transversal: eco advisory del pedido de cierre del cliente.
        // La conexión se cierra igual, con o sin este header.
        if request.header("Connection") == Some("close") {
            response.add_header("Connection", "close");
        }

        response
    }

    /// Ejecuta el handler de la ruta resuelta
    async fn run_route(
        route: Route,
        request: &Request,
        store: &FileStore,
    ) -> Result<Response, HandlerError> {
        match route {
            Route::Root => Ok(handlers::root()),
            Route::Echo { content } => Ok(handlers::echo(
                &content,
                request.header("Accept-Encoding"),
            )),
            Route::UserAgent => handlers::user_agent(request),
            Route::FileGet { filename } => Ok(handlers::file_get(store, &filename).await),
            Route::FilePost { filename } => {
                Ok(handlers::file_post(store, &filename, request.body().as_bytes()).await)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::StatusCode;

    fn test_store() -> FileStore {
        FileStore::new(std::env::temp_dir())
    }

    async fn dispatch_raw(raw: &[u8]) -> Response {
        let request = Request::parse(raw);
        let router = Router::new();
        Server::dispatch(&request, &router, &test_store()).await
    }

    #[tokio::test]
    async fn test_dispatch_root() {
        let response = dispatch_raw(b"GET / HTTP/1.1\r\n\r\n").await;

        assert_eq!(response.status(), StatusCode::Ok);
        assert_eq!(response.body(), b"200 OK");
    }

    #[tokio::test]
    async fn test_dispatch_ruta_desconocida_404() {
        let response = dispatch_raw(b"GET /nope HTTP/1.1\r\n\r\n").await;

        assert_eq!(response.status(), StatusCode::NotFound);
        assert_eq!(response.body(), b"Not Found");
    }

    #[tokio::test]
    async fn test_dispatch_error_de_handler_500_generico() {
        // /user-agent sin header User-Agent: el error se convierte acá
        let response = dispatch_raw(b"GET /user-agent HTTP/1.1\r\n\r\n").await;

        assert_eq!(response.status(), StatusCode::InternalServerError);
        assert_eq!(response.body(), b"Internal Server Error");
    }

    #[tokio::test]
    async fn test_dispatch_connection_close_exacto() {
        let response =
            dispatch_raw(b"GET / HTTP/1.1\r\nConnection: close\r\n\r\n").await;

        assert_eq!(response.header("Connection"), Some("close"));
    }

    #[tokio::test]
    async fn test_dispatch_connection_otro_valor_no_se_ecoa() {
        let response =
            dispatch_raw(b"GET / HTTP/1.1\r\nConnection: keep-alive\r\n\r\n").await;

        assert_eq!(response.header("Connection"), None);
    }

    #[tokio::test]
    async fn test_dispatch_connection_ausente_no_se_ecoa() {
        let response = dispatch_raw(b"GET / HTTP/1.1\r\n\r\n").await;

        assert_eq!(response.header("Connection"), None);
    }

    #[tokio::test]
    async fn test_dispatch_echo_con_gzip() {
        let response =
            dispatch_raw(b"GET /echo/abc HTTP/1.1\r\nAccept-Encoding: gzip\r\n\r\n").await;

        assert_eq!(response.status(), StatusCode::Ok);
        assert_eq!(response.header("Content-Encoding"), Some("gzip"));
    }
}
