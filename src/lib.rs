//! # Webroot Server
//! src/lib.rs
//!
//! Servidor HTTP/1.1 minimalista con conexiones persistentes: sirve
//! archivos de una raíz de documentos, resuelve dos endpoints de cálculo,
//! recibe uploads y devuelve imágenes subidas.
//!
//! ## Arquitectura
//!
//! - `http`: framing de headers, validación del request, status y responses
//! - `router`: decide qué comportamiento corresponde a cada target
//! - `handlers`: archivos estáticos, página 404, cálculos, uploads e imágenes
//! - `server`: accept loop y loop de keep-alive por conexión
//! - `config`: argumentos CLI y variables de entorno
//! - `error`: errores de arranque
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use webroot_server::config::Config;
//! use webroot_server::server::Server;
//!
//! let config = Config::default();
//! let server = Server::bind(&config).expect("Error al iniciar servidor");
//! server.run().expect("Error en el accept loop");
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod http;
pub mod router;
pub mod server;
