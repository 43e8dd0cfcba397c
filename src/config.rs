//! # Configuración del Servidor
//! src/config.rs
//!
//! Configuración con soporte para argumentos CLI y variables de entorno.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./webroot_server --port 8080 \
//!   --web-root ./webroot \
//!   --idle-timeout 2000 \
//!   --redirects ./redirects.json
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! HTTP_PORT=8080 WEB_ROOT=/srv/www ./webroot_server
//! ```

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Configuración del servidor HTTP/1.1
#[derive(Debug, Clone, Parser)]
#[command(name = "webroot_server")]
#[command(about = "Servidor HTTP/1.1 de archivos estáticos, cálculos, uploads e imágenes")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Puerto en el que escucha el servidor
    #[arg(short, long, default_value = "80", env = "HTTP_PORT")]
    pub port: u16,

    /// Host/IP en el que escucha
    #[arg(long, default_value = "0.0.0.0", env = "HTTP_HOST")]
    pub host: String,

    // === Filesystem ===

    /// Raíz de documentos estáticos
    #[arg(long = "web-root", default_value = "./webroot", env = "WEB_ROOT")]
    pub web_root: String,

    /// Directorio de uploads e imágenes (default: <web-root>/uploads)
    #[arg(long = "upload-dir", env = "UPLOAD_DIR")]
    pub upload_dir: Option<String>,

    /// Página HTML de error 404 (default: <web-root>/special_images/404.html)
    #[arg(long = "error-page", env = "ERROR_PAGE")]
    pub error_page: Option<String>,

    /// Imagen insertada en la página 404 (default: <web-root>/special_images/404.jpg)
    #[arg(long = "error-image", env = "ERROR_IMAGE")]
    pub error_image: Option<String>,

    /// Documento servido para `/` o un target vacío
    #[arg(long = "default-document", default_value = "/index.html", env = "DEFAULT_DOCUMENT")]
    pub default_document: String,

    /// Archivo JSON con la tabla de redirecciones (default: tabla interna)
    #[arg(long = "redirects", env = "REDIRECTS_FILE")]
    pub redirects_file: Option<String>,

    // === Timeouts ===

    /// Timeout de lectura por conexión en milisegundos
    #[arg(long = "idle-timeout", default_value = "2000", env = "IDLE_TIMEOUT_MS")]
    pub idle_timeout_ms: u64,

    /// Timeout de lectura mientras se recibe un upload grande
    #[arg(long = "upload-timeout", default_value = "5000", env = "UPLOAD_TIMEOUT_MS")]
    pub upload_timeout_ms: u64,

    // === Lecturas ===

    /// Desde este Content-Length un upload cuenta como grande
    #[arg(long = "large-upload-threshold", default_value = "1000000", env = "LARGE_UPLOAD_THRESHOLD")]
    pub large_upload_threshold: usize,

    /// Tamaño de cada lectura de un upload grande
    #[arg(long = "upload-chunk-size", default_value = "1000", env = "UPLOAD_CHUNK_SIZE")]
    pub upload_chunk_size: usize,

    /// Capacidad del buffer de lectura de cada conexión
    #[arg(long = "read-buffer", default_value = "1024", env = "READ_BUFFER_SIZE")]
    pub read_buffer_size: usize,
}

impl Config {
    /// Crea una nueva configuración parseando argumentos CLI y entorno
    pub fn new() -> Self {
        Config::parse()
    }

    /// Obtiene la dirección completa para bind (host:port)
    ///
    /// # Ejemplo
    /// ```rust
    /// use webroot_server::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.address(), "0.0.0.0:80");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn web_root(&self) -> PathBuf {
        PathBuf::from(&self.web_root)
    }

    pub fn upload_dir(&self) -> PathBuf {
        match &self.upload_dir {
            Some(dir) => PathBuf::from(dir),
            None => self.web_root().join("uploads"),
        }
    }

    pub fn error_page(&self) -> PathBuf {
        match &self.error_page {
            Some(path) => PathBuf::from(path),
            None => self.web_root().join("special_images").join("404.html"),
        }
    }

    pub fn error_image(&self) -> PathBuf {
        match &self.error_image {
            Some(path) => PathBuf::from(path),
            None => self.web_root().join("special_images").join("404.jpg"),
        }
    }

    pub fn idle_timeout(&self) -> Duration {
        Duration::from_millis(self.idle_timeout_ms)
    }

    pub fn upload_timeout(&self) -> Duration {
        Duration::from_millis(self.upload_timeout_ms)
    }

    /// Valida la configuración
    ///
    /// Retorna errores si hay valores inválidos
    pub fn validate(&self) -> Result<(), String> {
        if self.web_root.is_empty() {
            return Err("Web root must not be empty".to_string());
        }
        if !self.default_document.starts_with('/') {
            return Err("Default document must start with '/'".to_string());
        }

        if self.idle_timeout_ms == 0 {
            return Err("Idle timeout must be > 0".to_string());
        }
        if self.upload_timeout_ms == 0 {
            return Err("Upload timeout must be > 0".to_string());
        }

        if self.upload_chunk_size == 0 {
            return Err("Upload chunk size must be >= 1".to_string());
        }
        if self.read_buffer_size == 0 {
            return Err("Read buffer size must be >= 1".to_string());
        }

        Ok(())
    }

    /// Registra un resumen de la configuración efectiva
    pub fn print_summary(&self) {
        log::info!("Address:        {}", self.address());
        log::info!("Web root:       {}", self.web_root().display());
        log::info!("Upload dir:     {}", self.upload_dir().display());
        log::info!("Error page:     {}", self.error_page().display());
        log::info!("Error image:    {}", self.error_image().display());
        log::info!("Default doc:    {}", self.default_document);
        match &self.redirects_file {
            Some(path) => log::info!("Redirects:      {}", path),
            None => log::info!("Redirects:      built-in"),
        }
        log::info!(
            "Timeouts:       idle {} ms, upload {} ms",
            self.idle_timeout_ms,
            self.upload_timeout_ms
        );
        log::info!(
            "Uploads:        large from {} bytes, chunk {} bytes, buffer {} bytes",
            self.large_upload_threshold,
            self.upload_chunk_size,
            self.read_buffer_size
        );
    }
}

impl Default for Config {
    /// Configuración por defecto
    fn default() -> Self {
        Self {
            port: 80,
            host: "0.0.0.0".to_string(),
            web_root: "./webroot".to_string(),
            upload_dir: None,
            error_page: None,
            error_image: None,
            default_document: "/index.html".to_string(),
            redirects_file: None,
            idle_timeout_ms: 2_000,
            upload_timeout_ms: 5_000,
            large_upload_threshold: 1_000_000,
            upload_chunk_size: 1_000,
            read_buffer_size: 1_024,
        }
    }
}
