//! # Errores del Servidor
//! src/error.rs
//!
//! Errores de arranque y de transporte. Los errores de cada request
//! (parámetros inválidos, fallas de upload) viven junto a su handler y se
//! convierten en una respuesta; nunca llegan hasta aquí.

use std::path::PathBuf;
use thiserror::Error;

pub type ServerResult<T> = Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid redirects file {}: {source}", .path.display())]
    Redirects {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
