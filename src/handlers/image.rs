//! # Imágenes Subidas
//! src/handlers/image.rs
//!
//! `GET /image?image-name=NAME` devuelve un archivo del directorio de
//! uploads. Si no existe responde 501 (PictureNotFound) en texto plano,
//! sin la página 404 de los archivos estáticos.

use super::is_safe_name;
use crate::http::mime::image_content_type;
use crate::http::{QueryParams, Response, StatusCode};
use std::fs;
use std::path::Path;

/// Handler para /image?image-name=NAME
pub fn handle(params: &QueryParams, upload_dir: &Path) -> Response {
    let name = match params.first("image-name") {
        Some(name) if is_safe_name(name) => name,
        Some(name) => {
            log::warn!("Rejected image name: {}", name);
            return Response::error(StatusCode::BadRequest, "Bad Request");
        }
        None => return Response::error(StatusCode::BadRequest, "Bad Request"),
    };

    let path = upload_dir.join(name);
    if !path.exists() {
        log::debug!("image not found: {}", path.display());
        return Response::error(StatusCode::PictureNotFound, "Not Found");
    }

    match fs::read(&path) {
        Ok(data) => Response::new(StatusCode::Ok)
            .with_header("Content-Type", &image_content_type(name))
            .with_body_bytes(data),
        Err(e) => {
            log::error!("An unexpected error occurred during image handling: {}", e);
            Response::error(StatusCode::InternalServerError, "Internal Server Error")
        }
    }
}
