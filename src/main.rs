//! # Webroot Server - Entry Point
//! src/main.rs
//!
//! Punto de entrada del servidor. La configuración sale de argumentos CLI
//! y variables de entorno; el nivel de log de `RUST_LOG` (default `info`).

use env_logger::Env;
use webroot_server::config::Config;
use webroot_server::server::Server;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let config = Config::new();
    config.print_summary();

    let server = match Server::bind(&config) {
        Ok(server) => server,
        Err(e) => {
            log::error!("Fatal error: {}", e);
            std::process::exit(1);
        }
    };

    // Bloquea el thread principal
    if let Err(e) = server.run() {
        log::error!("Fatal error: {}", e);
        std::process::exit(1);
    }
}
