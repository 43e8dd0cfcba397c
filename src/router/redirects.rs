//! # Tabla de Redirecciones
//! src/router/redirects.rs
//!
//! Targets fijos que no se resuelven contra el filesystem: redirecciones
//! 302 o errores con código y texto propios. La tabla se construye una vez
//! al arrancar y se comparte sin mutarla.
//!
//! ## Formato del archivo JSON
//!
//! ```json
//! {
//!   "/forbidden": { "kind": "error", "status": 403, "text": "Forbidden" },
//!   "/moved":     { "kind": "redirect", "location": "/index.html" }
//! }
//! ```

use crate::error::{ServerError, ServerResult};
use crate::http::StatusCode;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Qué hacer con un target de la tabla
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RedirectEntry {
    /// 302 Found con `Location: <location>`
    Redirect { location: String },

    /// Error fijo con cuerpo `"<status> <text>"`
    Error { status: StatusCode, text: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct RedirectTable {
    entries: HashMap<String, RedirectEntry>,
}

impl RedirectTable {
    /// Tabla interna: `/forbidden`, `/moved` y `/error`
    pub fn builtin() -> Self {
        let entries = HashMap::from([
            (
                "/forbidden".to_string(),
                RedirectEntry::Error {
                    status: StatusCode::Forbidden,
                    text: "Forbidden".to_string(),
                },
            ),
            (
                "/moved".to_string(),
                RedirectEntry::Redirect {
                    location: "/index.html".to_string(),
                },
            ),
            (
                "/error".to_string(),
                RedirectEntry::Error {
                    status: StatusCode::InternalServerError,
                    text: "Internal Server Error".to_string(),
                },
            ),
        ]);
        Self { entries }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Carga la tabla desde un archivo JSON
    pub fn load(path: &Path) -> ServerResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json).map_err(|source| ServerError::Redirects {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Busca el target exacto (query incluida)
    pub fn lookup(&self, target: &str) -> Option<&RedirectEntry> {
        self.entries.get(target)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
