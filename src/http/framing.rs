//! # Framing de Headers
//! src/http/framing.rs
//!
//! Los headers HTTP no traen longitud declarada: el fin del bloque se
//! detecta buscando la secuencia `\r\n\r\n`. Este módulo solo acumula
//! bytes, no interpreta su contenido.
//!
//! Se lee de a un byte para no consumir nada del body que viene detrás
//! (el handler de upload lo lee después desde el mismo reader). Sobre un
//! `BufReader` eso no implica una syscall por byte.

use std::io::{ErrorKind, Read};

/// Secuencia que termina el bloque de headers
pub const HEADER_TERMINATOR: &[u8] = b"\r\n\r\n";

/// Tamaño máximo aceptado para el bloque de headers
pub const MAX_HEADER_BYTES: usize = 64 * 1024;

/// Lee bytes hasta encontrar `\r\n\r\n`
///
/// Retorna el bloque completo (terminador incluido), o `None` si el peer
/// cerró antes del terminador, si hubo un error de socket (incluye el
/// timeout de lectura) o si el bloque supera `MAX_HEADER_BYTES`.
///
/// # Ejemplo
/// ```
/// use std::io::Cursor;
/// use webroot_server::http::framing::receive_headers;
///
/// let mut input = Cursor::new(b"GET / HTTP/1.1\r\n\r\nbody".to_vec());
/// let headers = receive_headers(&mut input).unwrap();
/// assert_eq!(headers, b"GET / HTTP/1.1\r\n\r\n");
/// ```
pub fn receive_headers<R: Read>(reader: &mut R) -> Option<Vec<u8>> {
    let mut headers = Vec::with_capacity(512);
    let mut byte = [0u8; 1];

    while !headers.ends_with(HEADER_TERMINATOR) {
        match reader.read(&mut byte) {
            Ok(0) => {
                log::debug!("peer closed after {} header bytes", headers.len());
                return None;
            }
            Ok(_) => headers.push(byte[0]),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) if matches!(e.kind(), ErrorKind::WouldBlock | ErrorKind::TimedOut) => {
                log::debug!("read timed out waiting for headers");
                return None;
            }
            Err(e) => {
                log::error!("Socket error: {}", e);
                return None;
            }
        }

        if headers.len() > MAX_HEADER_BYTES {
            log::warn!("header block exceeds {} bytes", MAX_HEADER_BYTES);
            return None;
        }
    }

    Some(headers)
}
