//! # Sistema de Routing
//! src/router/mod.rs
//!
//! El router decide, una vez por request, qué comportamiento corresponde a
//! un target. No ejecuta nada: devuelve un `Route` que la conexión despacha.
//!
//! ## Orden de evaluación
//!
//! ```text
//! ""  o "/"            → documento por defecto (y se sigue evaluando)
//! */calculate-next*    → Compute(Next)
//! */calculate-area*    → Compute(Area)
//! */upload*            → Upload   (el handler consume el body del socket)
//! */image*             → Image
//! tabla de redirección → Redirect / FixedError
//! resto                → StaticAsset bajo la raíz de documentos
//! ```
//!
//! Los marcadores se buscan como substring en el target completo.

pub mod redirects;

pub use redirects::{RedirectEntry, RedirectTable};

use crate::http::request::split_target;
use crate::http::{QueryParams, StatusCode};
use std::path::{Component, Path, PathBuf};

/// Endpoints de cálculo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComputeKind {
    /// `calculate-next?num=N` → N+1
    Next,
    /// `calculate-area?height=H&width=W` → H*W/2
    Area,
}

/// Decisión de routing para un request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    StaticAsset(PathBuf),
    Compute(ComputeKind, QueryParams),
    Upload(QueryParams),
    Image(QueryParams),
    Redirect(String),
    FixedError(StatusCode, String),
    /// El target no puede resolverse dentro de la raíz de documentos
    NotFound,
}

#[derive(Debug, Clone, Copy)]
enum Marker {
    Compute(ComputeKind),
    Upload,
    Image,
}

/// Marcadores de endpoint en orden de prioridad
const MARKERS: &[(&str, Marker)] = &[
    ("/calculate-next", Marker::Compute(ComputeKind::Next)),
    ("/calculate-area", Marker::Compute(ComputeKind::Area)),
    ("/upload", Marker::Upload),
    ("/image", Marker::Image),
];

/// Router que mapea targets a rutas
#[derive(Debug, Clone)]
pub struct Router {
    web_root: PathBuf,
    default_document: String,
    redirects: RedirectTable,
}

impl Router {
    pub fn new(web_root: impl Into<PathBuf>, default_document: &str, redirects: RedirectTable) -> Self {
        Self {
            web_root: web_root.into(),
            default_document: default_document.to_string(),
            redirects,
        }
    }

    /// Decide la ruta para un target
    ///
    /// # Ejemplo
    /// ```
    /// use webroot_server::router::{Route, RedirectTable, Router};
    ///
    /// let router = Router::new("/srv/www", "/index.html", RedirectTable::builtin());
    ///
    /// assert_eq!(router.route("/moved"), Route::Redirect("/index.html".to_string()));
    /// assert_eq!(
    ///     router.route("/"),
    ///     Route::StaticAsset("/srv/www/index.html".into())
    /// );
    /// ```
    pub fn route(&self, target: &str) -> Route {
        let uri = if target.is_empty() || target == "/" {
            self.default_document.as_str()
        } else {
            target
        };

        if let Some((_, marker)) = MARKERS.iter().find(|(pattern, _)| uri.contains(pattern)) {
            let params = QueryParams::from_target(uri);
            return match *marker {
                Marker::Compute(kind) => Route::Compute(kind, params),
                Marker::Upload => Route::Upload(params),
                Marker::Image => Route::Image(params),
            };
        }

        if let Some(entry) = self.redirects.lookup(uri) {
            return match entry {
                RedirectEntry::Redirect { location } => Route::Redirect(location.clone()),
                RedirectEntry::Error { status, text } => Route::FixedError(*status, text.clone()),
            };
        }

        let (path, _) = split_target(uri);
        match self.resolve_static(path) {
            Some(file) => Route::StaticAsset(file),
            None => Route::NotFound,
        }
    }

    /// Une el path del target con la raíz de documentos
    ///
    /// Retorna `None` si algún segmento intenta salir de la raíz (`..`).
    fn resolve_static(&self, path: &str) -> Option<PathBuf> {
        let mut resolved = self.web_root.clone();
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            let mut components = Path::new(segment).components();
            match (components.next(), components.next()) {
                (Some(Component::Normal(part)), None) => resolved.push(part),
                (Some(Component::CurDir), None) => {}
                _ => return None,
            }
        }
        Some(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn router() -> Router {
        Router::new("/srv/www", "/index.html", RedirectTable::builtin())
    }

    #[test]
    fn test_default_document() {
        let expected = Route::StaticAsset(PathBuf::from("/srv/www/index.html"));
        assert_eq!(router().route("/"), expected);
        assert_eq!(router().route(""), expected);
    }

    #[test]
    fn test_compute_routes() {
        match router().route("/calculate-next?num=41") {
            Route::Compute(ComputeKind::Next, params) => assert_eq!(params.first("num"), Some("41")),
            other => panic!("unexpected route: {:?}", other),
        }
        match router().route("/calculate-area?height=10&width=5") {
            Route::Compute(ComputeKind::Area, params) => {
                assert_eq!(params.first("height"), Some("10"));
                assert_eq!(params.first("width"), Some("5"));
            }
            other => panic!("unexpected route: {:?}", other),
        }
    }

    #[test]
    fn test_markers_match_as_substring() {
        assert!(matches!(
            router().route("/api/v1/calculate-next?num=1"),
            Route::Compute(ComputeKind::Next, _)
        ));
        assert!(matches!(router().route("/calculate-next"), Route::Compute(ComputeKind::Next, p) if p.is_empty()));
    }

    #[test]
    fn test_upload_and_image_routes() {
        match router().route("/upload?file-name=a.txt") {
            Route::Upload(params) => assert_eq!(params.first("file-name"), Some("a.txt")),
            other => panic!("unexpected route: {:?}", other),
        }
        match router().route("/image?image-name=cat.png") {
            Route::Image(params) => assert_eq!(params.first("image-name"), Some("cat.png")),
            other => panic!("unexpected route: {:?}", other),
        }
    }

    #[test]
    fn test_priority_order() {
        // upload gana sobre image, compute gana sobre upload
        assert!(matches!(router().route("/upload/image?file-name=x"), Route::Upload(_)));
        assert!(matches!(
            router().route("/calculate-next/upload?num=1"),
            Route::Compute(ComputeKind::Next, _)
        ));
    }

    #[test]
    fn test_redirect_table() {
        assert_eq!(router().route("/moved"), Route::Redirect("/index.html".to_string()));
        assert_eq!(
            router().route("/forbidden"),
            Route::FixedError(StatusCode::Forbidden, "Forbidden".to_string())
        );
        assert_eq!(
            router().route("/error"),
            Route::FixedError(StatusCode::InternalServerError, "Internal Server Error".to_string())
        );
    }

    #[test]
    fn test_static_asset_ignores_query() {
        assert_eq!(
            router().route("/css/site.css?v=3"),
            Route::StaticAsset(PathBuf::from("/srv/www/css/site.css"))
        );
    }

    #[test]
    fn test_static_asset_rejects_traversal() {
        assert_eq!(router().route("/../etc/passwd"), Route::NotFound);
        assert_eq!(router().route("/css/../../secret"), Route::NotFound);
    }

    #[test]
    fn test_static_asset_skips_empty_and_dot_segments() {
        assert_eq!(
            router().route("//css/./site.css"),
            Route::StaticAsset(PathBuf::from("/srv/www/css/site.css"))
        );
    }
}
