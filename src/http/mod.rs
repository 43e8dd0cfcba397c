//! # Módulo HTTP
//!
//! Implementación del protocolo HTTP/1.1 desde cero, sin librerías de
//! alto nivel:
//!
//! - Framing del bloque de headers (`\r\n\r\n`)
//! - Validación de la request line
//! - Query parameters
//! - Construcción de responses y tabla de status codes
//! - Tabla de tipos MIME
//!
//! ### Formato de Request
//!
//! ```text
//! POST /upload?file-name=a.txt HTTP/1.1\r\n
//! Content-Length: 5\r\n
//! \r\n
//! hello
//! ```
//!
//! ### Formato de Response
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/plain;charset=utf-8\r\n
//! Content-Length: 2\r\n
//! \r\n
//! OK
//! ```

pub mod framing;   // Detección del fin de headers
pub mod mime;      // Extensión → Content-Type
pub mod request;   // Validación de la request line y query params
pub mod response;  // Construcción de HTTP responses
pub mod status;    // Códigos de estado HTTP

pub use request::{QueryParams, Request};
pub use response::Response;
pub use status::StatusCode;
