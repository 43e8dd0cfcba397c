//! # Tipos MIME
//! src/http/mime.rs
//!
//! Tabla fija extensión → Content-Type. La búsqueda distingue mayúsculas
//! y `gif` se sirve como `image/jpeg`.

use std::path::Path;

/// Content-Type para cualquier extensión que no está en la tabla
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Retorna el Content-Type para una extensión (sin el punto)
///
/// # Ejemplo
/// ```
/// use webroot_server::http::mime::content_type;
///
/// assert_eq!(content_type("html"), "text/html;charset=utf-8");
/// assert_eq!(content_type("exe"), "application/octet-stream");
/// ```
pub fn content_type(extension: &str) -> &'static str {
    match extension {
        "html" => "text/html;charset=utf-8",
        "jpg" => "image/jpeg",
        "css" => "text/css",
        "js" => "text/javascript; charset=UTF-8",
        "txt" => "text/plain",
        "ico" => "image/x-icon",
        "gif" => "image/jpeg",
        "png" => "image/png",
        _ => OCTET_STREAM,
    }
}

/// Content-Type de un archivo según la extensión final de su path
pub fn content_type_for_path(path: &Path) -> &'static str {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(content_type)
        .unwrap_or(OCTET_STREAM)
}

/// Content-Type `image/<ext>` para las imágenes del directorio de uploads
///
/// Sin extensión no hay subtipo que anunciar, así que se usa `OCTET_STREAM`.
pub fn image_content_type(name: &str) -> String {
    match Path::new(name).extension().and_then(|ext| ext.to_str()) {
        Some(ext) if !ext.is_empty() => format!("image/{}", ext),
        _ => OCTET_STREAM.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listed_extensions() {
        assert_eq!(content_type("html"), "text/html;charset=utf-8");
        assert_eq!(content_type("jpg"), "image/jpeg");
        assert_eq!(content_type("css"), "text/css");
        assert_eq!(content_type("js"), "text/javascript; charset=UTF-8");
        assert_eq!(content_type("txt"), "text/plain");
        assert_eq!(content_type("ico"), "image/x-icon");
        assert_eq!(content_type("gif"), "image/jpeg");
        assert_eq!(content_type("png"), "image/png");
    }

    #[test]
    fn test_unlisted_extensions() {
        assert_eq!(content_type("unknown"), OCTET_STREAM);
        assert_eq!(content_type(""), OCTET_STREAM);
        assert_eq!(content_type("HTML"), OCTET_STREAM);
        assert_eq!(content_type("jpeg"), OCTET_STREAM);
    }

    #[test]
    fn test_content_type_for_path() {
        assert_eq!(content_type_for_path(Path::new("/web/index.html")), "text/html;charset=utf-8");
        assert_eq!(content_type_for_path(Path::new("/web/archive.tar.gz")), OCTET_STREAM);
        assert_eq!(content_type_for_path(Path::new("/web/README")), OCTET_STREAM);
    }

    #[test]
    fn test_image_content_type() {
        assert_eq!(image_content_type("cat.png"), "image/png");
        assert_eq!(image_content_type("cat.jpg"), "image/jpg");
        assert_eq!(image_content_type("cat"), OCTET_STREAM);
    }
}
