//! # Archivos Estáticos
//! src/handlers/static_files.rs
//!
//! Sirve un archivo completo desde la raíz de documentos. Sin lecturas
//! parciales: se carga todo el archivo en cada request.

use super::not_found::NotFoundPage;
use crate::http::mime::content_type_for_path;
use crate::http::{Response, StatusCode};
use std::fs;
use std::path::Path;

/// Handler para cualquier target que no es endpoint ni redirección
///
/// Si el path no existe o no es un archivo regular, responde con la página 404.
pub fn serve(path: &Path, not_found: &NotFoundPage) -> Response {
    if !path.is_file() {
        log::debug!("static file not found: {}", path.display());
        return not_found.render();
    }

    match fs::read(path) {
        Ok(data) => {
            log::debug!("serving {} ({} bytes)", path.display(), data.len());
            Response::new(StatusCode::Ok)
                .with_header("Content-Type", content_type_for_path(path))
                .with_body_bytes(data)
        }
        Err(e) => {
            log::error!("Failed to read {}: {}", path.display(), e);
            Response::error(StatusCode::InternalServerError, "Internal Server Error")
        }
    }
}
