//! # Construcción de Respuestas HTTP
//! src/http/response.rs
//!
//! API para construir el "sobre" de una respuesta (status line + headers +
//! body) y convertirlo a bytes para enviar por el socket.
//!
//! ## Formato de una respuesta
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/plain;charset=utf-8\r\n
//! Content-Length: 2\r\n
//! \r\n
//! 42
//! ```
//!
//! `Content-Length` nunca se guarda como header: se calcula en `to_bytes`
//! a partir del body final, así siempre coincide con los bytes enviados.
//!
//! ## Ejemplo de uso
//!
//! ```
//! use webroot_server::http::{Response, StatusCode};
//!
//! let response = Response::new(StatusCode::Ok)
//!     .with_header("Content-Type", "text/plain")
//!     .with_body("Hello");
//!
//! let bytes = response.to_bytes();
//! assert!(bytes.ends_with(b"Content-Length: 5\r\n\r\nHello"));
//! ```

use super::StatusCode;

/// Content-Type de las respuestas de texto generadas por los endpoints
pub const TEXT_UTF8: &str = "text/plain;charset=utf-8";

/// Content-Type de los cuerpos de error `"<code> <text>"`
pub const TEXT_PLAIN: &str = "text/plain";

/// Representa una respuesta HTTP/1.1 completa
#[derive(Debug, Clone)]
pub struct Response {
    /// Código de estado HTTP (200, 404, etc.)
    status: StatusCode,

    /// Headers en orden de inserción. Se usa un Vec porque la página 404
    /// lleva dos líneas `Content-Type`.
    headers: Vec<(String, String)>,

    /// Cuerpo de la respuesta (puede ser vacío)
    body: Vec<u8>,
}

impl Response {
    /// Crea una nueva respuesta sin headers ni body
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Agrega un header; si ya existe uno con el mismo nombre, lo reemplaza
    ///
    /// # Ejemplo
    /// ```
    /// use webroot_server::http::{Response, StatusCode};
    ///
    /// let response = Response::new(StatusCode::Ok)
    ///     .with_header("Content-Type", "text/css")
    ///     .with_header("Content-Type", "text/plain");
    /// assert_eq!(response.header("content-type"), Some("text/plain"));
    /// ```
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.add_header(name, value);
        self
    }

    /// Versión mutable de `with_header`
    pub fn add_header(&mut self, name: &str, value: &str) {
        match self
            .headers
            .iter_mut()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
        {
            Some((_, existing_value)) => *existing_value = value.to_string(),
            None => self.headers.push((name.to_string(), value.to_string())),
        }
    }

    /// Agrega una línea de header aunque ya exista otra con el mismo nombre
    pub fn append_header(&mut self, name: &str, value: &str) {
        self.headers.push((name.to_string(), value.to_string()));
    }

    /// Establece el cuerpo de la respuesta desde un string
    pub fn with_body(mut self, body: &str) -> Self {
        self.body = body.as_bytes().to_vec();
        self
    }

    /// Establece el cuerpo de la respuesta desde bytes (archivos, imágenes)
    pub fn with_body_bytes(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    /// Respuesta 200 de texto plano, usada por los endpoints de cálculo y upload
    ///
    /// # Ejemplo
    /// ```
    /// use webroot_server::http::{Response, StatusCode};
    ///
    /// let response = Response::plain("42");
    /// assert_eq!(response.status(), StatusCode::Ok);
    /// assert_eq!(response.body(), b"42");
    /// ```
    pub fn plain(body: &str) -> Self {
        Self::new(StatusCode::Ok)
            .with_header("Content-Type", TEXT_UTF8)
            .with_body(body)
    }

    /// Crea una respuesta de error con cuerpo `"<code> <text>"`
    ///
    /// # Ejemplo
    /// ```
    /// use webroot_server::http::{Response, StatusCode};
    ///
    /// let response = Response::error(StatusCode::BadRequest, "File already exists");
    /// assert_eq!(response.body(), b"400 File already exists");
    /// ```
    pub fn error(status: StatusCode, text: &str) -> Self {
        let body = format!("{} {}", status.as_u16(), text);
        Self::new(status)
            .with_header("Content-Type", TEXT_PLAIN)
            .with_body(&body)
    }

    /// Crea una redirección 302 hacia `location` (sin body)
    pub fn redirect(location: &str) -> Self {
        Self::new(StatusCode::Found).with_header("Location", location)
    }

    /// Convierte la respuesta a bytes listos para enviar por el socket
    ///
    /// - Status line: `HTTP/1.1 200 OK\r\n`
    /// - Headers en orden de inserción
    /// - `Content-Length` calculado del body
    /// - Línea vacía y body
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut result = Vec::with_capacity(self.body.len() + 128);

        result.extend_from_slice(format!("HTTP/1.1 {}\r\n", self.status).as_bytes());

        for (name, value) in &self.headers {
            result.extend_from_slice(format!("{}: {}\r\n", name, value).as_bytes());
        }
        result.extend_from_slice(format!("Content-Length: {}\r\n", self.body.len()).as_bytes());

        result.extend_from_slice(b"\r\n");
        result.extend_from_slice(&self.body);

        result
    }

    /// Obtiene el código de estado de la respuesta
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Obtiene los headers en orden
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Primer valor del header `name` (sin distinguir mayúsculas)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Obtiene una referencia al body
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}
