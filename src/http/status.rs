//! # Códigos de Estado HTTP
//! src/http/status.rs
//!
//! Tabla fija de códigos que emite el servidor. El 501 no es el
//! "Not Implemented" del RFC: aquí significa que la imagen pedida en
//! `/image` no existe en el directorio de uploads ("PictureNotFound").

use serde::Deserialize;

/// Representa los códigos de estado HTTP que soporta nuestro servidor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "u16")]
pub enum StatusCode {
    /// 200 OK - La petición fue exitosa
    Ok = 200,

    /// 302 Found - Redirección (lleva header `Location`)
    Found = 302,

    /// 400 Bad Request - Request line inválida o parámetros malformados
    BadRequest = 400,

    /// 403 Forbidden
    Forbidden = 403,

    /// 404 Not Found - Archivo estático inexistente (página de error propia)
    NotFound = 404,

    /// 500 Internal Server Error
    InternalServerError = 500,

    /// 501 PictureNotFound - Imagen inexistente en el directorio de uploads
    PictureNotFound = 501,
}

impl StatusCode {
    /// Convierte el código a su valor numérico
    ///
    /// # Ejemplo
    /// ```
    /// use webroot_server::http::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// ```
    pub fn as_u16(&self) -> u16 {
        *self as u16
    }

    /// Retorna el texto de razón (reason phrase) asociado al código
    ///
    /// # Ejemplo
    /// ```
    /// use webroot_server::http::StatusCode;
    /// assert_eq!(StatusCode::Found.reason_phrase(), "Found");
    /// assert_eq!(StatusCode::PictureNotFound.reason_phrase(), "PictureNotFound");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Found => "Found",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::Forbidden => "Forbidden",
            StatusCode::NotFound => "Not Found",
            StatusCode::InternalServerError => "Internal Server Error",
            StatusCode::PictureNotFound => "PictureNotFound",
        }
    }

    /// Verifica si el código indica error del cliente (4xx)
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.as_u16())
    }

    /// Verifica si el código indica error del servidor (5xx)
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.as_u16())
    }
}

impl TryFrom<u16> for StatusCode {
    type Error = String;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        match code {
            200 => Ok(StatusCode::Ok),
            302 => Ok(StatusCode::Found),
            400 => Ok(StatusCode::BadRequest),
            403 => Ok(StatusCode::Forbidden),
            404 => Ok(StatusCode::NotFound),
            500 => Ok(StatusCode::InternalServerError),
            501 => Ok(StatusCode::PictureNotFound),
            other => Err(format!("unsupported status code: {}", other)),
        }
    }
}

impl std::fmt::Display for StatusCode {
    /// Formato: "200 OK"
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.as_u16(), self.reason_phrase())
    }
}
