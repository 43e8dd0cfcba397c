//! # Módulo del Servidor HTTP
//! src/server/mod.rs
//!
//! Este módulo implementa el servidor TCP que:
//! 1. Escucha en un puerto y acepta conexiones
//! 2. Lanza un thread por conexión
//! 3. Enmarca, valida y enruta cada request de la conexión
//! 4. Escribe las responses sobre el mismo socket

pub mod connection;
pub mod tcp;

// Re-exportar para facilitar el uso
pub use connection::{Connection, Transport};
pub use tcp::{handle_connection, Server, Site};
