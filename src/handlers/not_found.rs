//! # Página 404
//! src/handlers/not_found.rs
//!
//! Solo el 404 de archivos estáticos lleva página propia. Si existe la
//! imagen de error, sus bytes reemplazan el marcador `<!-- INSERT_IMAGE_HERE -->`
//! del HTML y se agrega una segunda línea `Content-Type` con su tipo.
//! El resto de errores usa `Response::error`.

use crate::http::mime::content_type_for_path;
use crate::http::{Response, StatusCode};
use std::fs;
use std::path::PathBuf;

/// Marcador del HTML donde se insertan los bytes de la imagen
pub const IMAGE_PLACEHOLDER: &[u8] = b"<!-- INSERT_IMAGE_HERE -->";

/// Cuerpo usado cuando no existe la página configurada
pub const FALLBACK_PAGE: &[u8] = b"<html><body><h1>404 Not Found</h1></body></html>";

const HTML: &str = "text/html;charset=utf-8";

#[derive(Debug, Clone)]
pub struct NotFoundPage {
    page: PathBuf,
    image: PathBuf,
}

impl NotFoundPage {
    pub fn new(page: impl Into<PathBuf>, image: impl Into<PathBuf>) -> Self {
        Self {
            page: page.into(),
            image: image.into(),
        }
    }

    /// Construye la respuesta 404, leyendo página e imagen en cada llamada
    pub fn render(&self) -> Response {
        let mut body = match fs::read(&self.page) {
            Ok(page) => page,
            Err(e) => {
                log::debug!("error page {} unavailable: {}", self.page.display(), e);
                FALLBACK_PAGE.to_vec()
            }
        };

        let image = fs::read(&self.image).ok();
        if let Some(image) = &image {
            body = splice(&body, IMAGE_PLACEHOLDER, image);
        }

        let mut response = Response::new(StatusCode::NotFound).with_header("Content-Type", HTML);
        if image.is_some() {
            response.append_header("Content-Type", content_type_for_path(&self.image));
        }
        response.with_body_bytes(body)
    }
}

/// Reemplaza cada aparición de `marker` en `haystack` por `replacement`
fn splice(haystack: &[u8], marker: &[u8], replacement: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(haystack.len() + replacement.len());
    let mut rest = haystack;

    while let Some(pos) = rest.windows(marker.len()).position(|window| window == marker) {
        out.extend_from_slice(&rest[..pos]);
        out.extend_from_slice(replacement);
        rest = &rest[pos + marker.len()..];
    }
    out.extend_from_slice(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splice() {
        assert_eq!(splice(b"a<X>b<X>c", b"<X>", b"12"), b"a12b12c");
        assert_eq!(splice(b"no marker", b"<X>", b"12"), b"no marker");
        assert_eq!(splice(b"", b"<X>", b"12"), b"");
    }

    #[test]
    fn test_fallback_without_files() {
        let dir = tempfile::tempdir().unwrap();
        let page = NotFoundPage::new(dir.path().join("404.html"), dir.path().join("404.jpg"));

        let response = page.render();
        assert_eq!(response.status(), StatusCode::NotFound);
        assert_eq!(response.body(), FALLBACK_PAGE);
        assert_eq!(response.headers().len(), 1);
        assert_eq!(response.header("Content-Type"), Some(HTML));
    }

    #[test]
    fn test_page_without_image() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("404.html"), b"<p>gone</p><!-- INSERT_IMAGE_HERE -->").unwrap();
        let page = NotFoundPage::new(dir.path().join("404.html"), dir.path().join("404.jpg"));

        let response = page.render();
        assert_eq!(response.body(), b"<p>gone</p><!-- INSERT_IMAGE_HERE -->");
    }

    #[test]
    fn test_page_with_image() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("404.html"), b"<p>gone</p><!-- INSERT_IMAGE_HERE --><p>end</p>").unwrap();
        fs::write(dir.path().join("404.jpg"), [0xFF, 0xD8, 0xFF]).unwrap();
        let page = NotFoundPage::new(dir.path().join("404.html"), dir.path().join("404.jpg"));

        let response = page.render();
        assert_eq!(response.body(), b"<p>gone</p>\xFF\xD8\xFF<p>end</p>");

        let text = String::from_utf8_lossy(&response.to_bytes()).into_owned();
        assert!(text.contains("Content-Type: text/html;charset=utf-8\r\nContent-Type: image/jpeg\r\n"));
        assert!(text.contains(&format!("Content-Length: {}\r\n", response.body().len())));
    }

    #[test]
    fn test_image_spliced_into_fallback_has_no_marker() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("404.jpg"), [1, 2, 3]).unwrap();
        let page = NotFoundPage::new(dir.path().join("404.html"), dir.path().join("404.jpg"));

        let response = page.render();
        assert_eq!(response.body(), FALLBACK_PAGE);
        assert_eq!(response.headers().len(), 2);
    }
}
