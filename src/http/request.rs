//! # Validación de Requests HTTP/1.1
//! src/http/request.rs
//!
//! ## Formato de un Request
//!
//! ```text
//! GET /calculate-area?height=10&width=5 HTTP/1.1\r\n
//! Host: localhost\r\n
//! \r\n
//! ```
//!
//! Solo la request line se valida. El resto del bloque se guarda tal cual
//! y se consulta bajo demanda (el upload necesita `Content-Length`), de
//! modo que un header raro nunca invalida un request con primera línea
//! correcta.

use std::collections::HashMap;
use thiserror::Error;

/// Única versión aceptada en la request line
pub const SUPPORTED_VERSION: &str = "HTTP/1.1";

/// Métodos HTTP soportados
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    GET,
    POST,
}

impl Method {
    /// Parsea un método HTTP desde un string
    fn parse(s: &str) -> Result<Self, ValidationError> {
        match s {
            "GET" => Ok(Method::GET),
            "POST" => Ok(Method::POST),
            _ => Err(ValidationError::UnsupportedMethod(s.to_string())),
        }
    }

    /// Convierte el método a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
        }
    }
}

/// Motivos por los que un bloque de headers no es un request válido
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Empty request")]
    Empty,

    #[error("Header block is not valid UTF-8")]
    NotUtf8,

    #[error("Request line must have 3 parts, got {0}")]
    TokenCount(usize),

    #[error("Unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    #[error("Unsupported HTTP version: {0}")]
    UnsupportedVersion(String),
}

/// Primera línea ya validada: `METHOD TARGET VERSION`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    pub method: Method,
    pub target: String,
    pub version: String,
}

/// Request validado: request line + bloque de headers sin interpretar
#[derive(Debug, Clone)]
pub struct Request {
    line: RequestLine,
    raw_headers: String,
}

impl Request {
    pub fn method(&self) -> Method {
        self.line.method
    }

    /// Target completo (path + query opcional), exactamente como llegó
    pub fn target(&self) -> &str {
        &self.line.target
    }

    /// Busca un header por nombre (sin distinguir mayúsculas)
    ///
    /// Las líneas sin `:` se ignoran.
    ///
    /// # Ejemplo
    /// ```
    /// use webroot_server::http::request::validate;
    ///
    /// let raw = b"POST /upload?file-name=a.txt HTTP/1.1\r\nContent-Length: 5\r\n\r\n";
    /// let request = validate(raw).unwrap();
    /// assert_eq!(request.header("content-length"), Some("5"));
    /// ```
    pub fn header(&self, name: &str) -> Option<&str> {
        self.raw_headers
            .split("\r\n")
            .skip(1)
            .take_while(|line| !line.is_empty())
            .filter_map(|line| line.split_once(':'))
            .find(|(key, _)| key.trim().eq_ignore_ascii_case(name))
            .map(|(_, value)| value.trim())
    }
}

/// Valida la primera línea del bloque de headers
///
/// Exige exactamente tres tokens separados por un espacio simple, método
/// GET o POST y versión literal `HTTP/1.1`. El target se toma sin tocar.
///
/// # Ejemplo
/// ```
/// use webroot_server::http::request::validate;
///
/// let request = validate(b"GET /index.html HTTP/1.1\r\n\r\n").unwrap();
/// assert_eq!(request.target(), "/index.html");
///
/// assert!(validate(b"GET /index.html HTTP/1.0\r\n\r\n").is_err());
/// ```
pub fn validate(raw: &[u8]) -> Result<Request, ValidationError> {
    let text = std::str::from_utf8(raw).map_err(|_| ValidationError::NotUtf8)?;
    if text.is_empty() {
        return Err(ValidationError::Empty);
    }

    let first_line = text.split("\r\n").next().unwrap_or_default();
    let parts: Vec<&str> = first_line.split(' ').collect();

    let [method, target, version] = parts[..] else {
        return Err(ValidationError::TokenCount(parts.len()));
    };

    let method = Method::parse(method)?;
    if version != SUPPORTED_VERSION {
        return Err(ValidationError::UnsupportedVersion(version.to_string()));
    }

    Ok(Request {
        line: RequestLine {
            method,
            target: target.to_string(),
            version: version.to_string(),
        },
        raw_headers: text.to_string(),
    })
}

/// Separa un target en (path, query), descartando el fragmento `#...`
///
/// # Ejemplo
/// ```
/// use webroot_server::http::request::split_target;
///
/// assert_eq!(split_target("/upload?file-name=a.txt"), ("/upload", "file-name=a.txt"));
/// assert_eq!(split_target("/index.html"), ("/index.html", ""));
/// ```
pub fn split_target(target: &str) -> (&str, &str) {
    let without_fragment = target.split('#').next().unwrap_or_default();
    match without_fragment.split_once('?') {
        Some((path, query)) => (path, query),
        None => (without_fragment, ""),
    }
}

/// Query parameters: cada nombre puede repetirse, así que guarda todos los valores en orden
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    values: HashMap<String, Vec<String>>,
}

impl QueryParams {
    /// Parsea una query string estilo `application/x-www-form-urlencoded`
    ///
    /// `+` pasa a espacio y `%XX` se decodifica. Los pares sin `=` o con
    /// valor vacío se descartan, así `num=` cuenta como ausente.
    pub fn parse(query: &str) -> Self {
        let mut values: HashMap<String, Vec<String>> = HashMap::new();

        for pair in query.split('&') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            if value.is_empty() {
                continue;
            }
            values
                .entry(decode_component(key))
                .or_default()
                .push(decode_component(value));
        }

        Self { values }
    }

    /// Parsea la query de un target completo (vacía si no hay `?`)
    pub fn from_target(target: &str) -> Self {
        Self::parse(split_target(target).1)
    }

    /// Primer valor del parámetro, si está presente
    pub fn first(&self, name: &str) -> Option<&str> {
        self.values
            .get(name)
            .and_then(|values| values.first())
            .map(|s| s.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn decode_component(s: &str) -> String {
    let spaced = s.replace('+', " ");
    String::from_utf8_lossy(&urlencoding::decode_binary(spaced.as_bytes())).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_get_and_post() {
        let get = validate(b"GET /index.html HTTP/1.1\r\n\r\n").unwrap();
        assert_eq!(get.method(), Method::GET);
        assert_eq!(get.target(), "/index.html");

        let post = validate(b"POST /upload?file-name=a.txt HTTP/1.1\r\nContent-Length: 5\r\n\r\n").unwrap();
        assert_eq!(post.method(), Method::POST);
        assert_eq!(post.target(), "/upload?file-name=a.txt");
    }

    #[test]
    fn test_target_is_middle_token_exactly() {
        for target in ["/", "/a/b/c.css", "/calculate-area?height=10&width=5", "*"] {
            let raw = format!("GET {} HTTP/1.1\r\n\r\n", target);
            assert_eq!(validate(raw.as_bytes()).unwrap().target(), target);
        }
    }

    #[test]
    fn test_empty_target_is_still_three_tokens() {
        let request = validate(b"GET  HTTP/1.1\r\n\r\n").unwrap();
        assert_eq!(request.target(), "");
    }

    #[test]
    fn test_wrong_token_count() {
        assert_eq!(validate(b"GET /\r\n\r\n").unwrap_err(), ValidationError::TokenCount(2));
        assert_eq!(
            validate(b"GET / HTTP/1.1 extra\r\n\r\n").unwrap_err(),
            ValidationError::TokenCount(4)
        );
        // Un doble espacio produce un token vacío extra
        assert!(validate(b"GET  / HTTP/1.1\r\n\r\n").is_err());
    }

    #[test]
    fn test_unsupported_method() {
        for method in ["PUT", "DELETE", "HEAD", "get"] {
            let raw = format!("{} / HTTP/1.1\r\n\r\n", method);
            assert!(matches!(
                validate(raw.as_bytes()),
                Err(ValidationError::UnsupportedMethod(_))
            ));
        }
    }

    #[test]
    fn test_unsupported_version() {
        for version in ["HTTP/1.0", "HTTP/2.0", "http/1.1", "HTTP/1.1\t"] {
            let raw = format!("GET / {}\r\n\r\n", version);
            assert!(matches!(
                validate(raw.as_bytes()),
                Err(ValidationError::UnsupportedVersion(_))
            ));
        }
    }

    #[test]
    fn test_malformed_first_line_ignores_good_headers() {
        let raw = b"BREW /pot HTTP/1.1\r\nHost: localhost\r\nContent-Length: 0\r\n\r\n";
        assert!(validate(raw).is_err());
    }

    #[test]
    fn test_bad_headers_do_not_invalidate() {
        let raw = b"GET / HTTP/1.1\r\nthis line has no colon\r\n\r\n";
        assert!(validate(raw).is_ok());
    }

    #[test]
    fn test_empty_and_non_utf8() {
        assert_eq!(validate(b"").unwrap_err(), ValidationError::Empty);
        assert_eq!(validate(b"GET /\xff HTTP/1.1\r\n\r\n").unwrap_err(), ValidationError::NotUtf8);
    }

    #[test]
    fn test_header_lookup() {
        let raw = b"POST /upload HTTP/1.1\r\nHost: x\r\ncontent-length:  12 \r\n\r\n";
        let request = validate(raw).unwrap();
        assert_eq!(request.header("Content-Length"), Some("12"));
        assert_eq!(request.header("Host"), Some("x"));
        assert_eq!(request.header("Accept"), None);
    }

    #[test]
    fn test_split_target() {
        assert_eq!(split_target("/a?b=1#frag"), ("/a", "b=1"));
        assert_eq!(split_target("/a#frag"), ("/a", ""));
        assert_eq!(split_target("/a?"), ("/a", ""));
        assert_eq!(split_target(""), ("", ""));
    }

    #[test]
    fn test_query_params() {
        let params = QueryParams::parse("height=10&width=5");
        assert_eq!(params.first("height"), Some("10"));
        assert_eq!(params.first("width"), Some("5"));
        assert_eq!(params.first("depth"), None);
    }

    #[test]
    fn test_query_params_repeated_keys() {
        let params = QueryParams::parse("num=1&num=2&num=3");
        assert_eq!(params.first("num"), Some("1"));
        assert_eq!(params.values["num"], vec!["1", "2", "3"]);
    }

    #[test]
    fn test_query_params_drop_blank_values() {
        let params = QueryParams::parse("num=&flag&x=1");
        assert_eq!(params.first("num"), None);
        assert_eq!(params.first("flag"), None);
        assert_eq!(params.first("x"), Some("1"));
    }

    #[test]
    fn test_query_params_decoding() {
        let params = QueryParams::parse("file-name=my%20photo+1.png&k%3Dy=%E2%9C%93");
        assert_eq!(params.first("file-name"), Some("my photo 1.png"));
        assert_eq!(params.first("k=y"), Some("✓"));
    }

    #[test]
    fn test_query_params_from_target() {
        assert!(QueryParams::from_target("/calculate-next").is_empty());
        assert_eq!(QueryParams::from_target("/calculate-next?num=41").first("num"), Some("41"));
    }
}
