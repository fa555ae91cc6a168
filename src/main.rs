//! # HTTP/1.1 Server - Entry Point
//! src/main.rs
//!
//! Punto de entrada del servidor. Parsea la configuración CLI, valida y
//! arranca el accept loop sobre el runtime de tokio.

use http11_server::config::Config;
use http11_server::server::Server;

#[tokio::main]
async fn main() {
    println!("=================================");
    println!("  Servidor HTTP/1.1 minimalista");
    println!("=================================\n");

    let config = Config::new();

    if let Err(e) = config.validate() {
        eprintln!("💥 Configuración inválida: {}", e);
        std::process::exit(1);
    }

    config.print_summary();

    let server = Server::new(config);

    if let Err(e) = server.run().await {
        eprintln!("💥 Error fatal: {}", e);
        std::process::exit(1);
    }
}
