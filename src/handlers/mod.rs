//! # Handlers
//!
//! Cada handler recibe lo que el router extrajo del request y retorna
//! una Response ya completa:
//!
//! - **static_files**: archivos bajo la raíz de documentos
//! - **not_found**: página 404 con imagen embebida
//! - **compute**: calculate-next y calculate-area
//! - **upload**: guarda el body del request en el directorio de uploads
//! - **image**: devuelve imágenes del directorio de uploads

pub mod compute;
pub mod image;
pub mod not_found;
pub mod static_files;
pub mod upload;

pub use not_found::NotFoundPage;
pub use upload::UploadSettings;

/// Nombre de un único componente de path: sin separadores y distinto de `.` y `..`
pub(crate) fn is_safe_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains('/')
        && !name.contains('\\')
}
