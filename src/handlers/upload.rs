//! # Upload de Archivos
//! src/handlers/upload.rs
//!
//! `POST /upload?file-name=NAME` con el contenido crudo en el body y su
//! longitud en `Content-Length`.
//!
//! - Si `NAME` ya existe responde 400 sin leer el body. Si el cliente ya lo
//!   envió, esos bytes quedan en el socket y se leerán como el siguiente
//!   request.
//! - Bodies de al menos `large_threshold` bytes se leen en bloques de
//!   `chunk_size` con el timeout extendido; el timeout anterior se restaura
//!   siempre.
//! - El archivo se crea con `create_new`: entre el chequeo inicial y la
//!   escritura otro upload con el mismo nombre pudo haberlo creado, y en ese
//!   caso este recibe 400 y el archivo guardado no se toca.

use super::is_safe_name;
use crate::http::{QueryParams, Request, Response, StatusCode};
use crate::server::connection::{Connection, Transport};
use std::fs::OpenOptions;
use std::io::{self, ErrorKind, Read, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Reserva inicial del body; el Content-Length lo declara el cliente
const INITIAL_BODY_CAPACITY: usize = 64 * 1024;

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Missing Content-Length header")]
    MissingContentLength,

    #[error("Content-Length out of range: {0}")]
    InvalidContentLength(String),

    #[error("File already exists")]
    AlreadyExists,

    #[error("Body truncated: expected {expected} bytes, received {received}")]
    Truncated { expected: usize, received: usize },

    #[error(transparent)]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone)]
pub struct UploadSettings {
    pub dir: PathBuf,
    pub large_threshold: usize,
    pub chunk_size: usize,
    pub upload_timeout: Duration,
}

/// Handler para /upload?file-name=NAME
pub fn handle<S: Transport>(
    params: &QueryParams,
    request: &Request,
    conn: &mut Connection<S>,
    settings: &UploadSettings,
) -> Response {
    let name = match params.first("file-name") {
        Some(name) if is_safe_name(name) => name,
        Some(name) => {
            log::warn!("Rejected upload name: {}", name);
            return Response::error(StatusCode::BadRequest, "Bad Request");
        }
        None => return Response::error(StatusCode::BadRequest, "Bad Request"),
    };

    let path = settings.dir.join(name);
    if path.exists() {
        log::warn!("Upload target already exists: {}", path.display());
        return Response::error(StatusCode::BadRequest, "File already exists");
    }

    match receive_and_store(request, conn, settings, &path) {
        Ok(size) => {
            log::info!("Stored upload {} ({} bytes)", path.display(), size);
            Response::plain("OK")
        }
        Err(UploadError::AlreadyExists) => {
            log::warn!("Upload target created concurrently: {}", path.display());
            Response::error(StatusCode::BadRequest, "File already exists")
        }
        Err(e) => {
            log::error!("An unexpected error occurred during file upload: {}", e);
            Response::error(StatusCode::InternalServerError, "Internal Server Error")
        }
    }
}

fn receive_and_store<S: Transport>(
    request: &Request,
    conn: &mut Connection<S>,
    settings: &UploadSettings,
    path: &Path,
) -> Result<usize, UploadError> {
    let length = declared_length(request)?;
    let body = read_body(conn, length, settings)?;
    store_new(path, &body)?;
    Ok(body.len())
}

/// Longitud declarada en `Content-Length`
///
/// Un valor que no es solo dígitos cuenta como 0.
fn declared_length(request: &Request) -> Result<usize, UploadError> {
    let raw = request
        .header("Content-Length")
        .ok_or(UploadError::MissingContentLength)?;

    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(0);
    }
    raw.parse()
        .map_err(|_| UploadError::InvalidContentLength(raw.to_string()))
}

fn read_body<S: Transport>(
    conn: &mut Connection<S>,
    length: usize,
    settings: &UploadSettings,
) -> Result<Vec<u8>, UploadError> {
    if length < settings.large_threshold {
        return read_exact_len(conn.reader(), length, length.min(INITIAL_BODY_CAPACITY));
    }

    let previous = conn.read_timeout()?;
    conn.set_read_timeout(Some(settings.upload_timeout))?;

    let body = read_exact_len(conn.reader(), length, settings.chunk_size);
    let restored = conn.set_read_timeout(previous);

    let body = body?;
    restored?;
    Ok(body)
}

/// Lee exactamente `length` bytes en lecturas de a lo sumo `chunk_size`
fn read_exact_len<R: Read>(reader: &mut R, length: usize, chunk_size: usize) -> Result<Vec<u8>, UploadError> {
    let mut body = Vec::with_capacity(length.min(INITIAL_BODY_CAPACITY));
    let mut chunk = vec![0u8; chunk_size.max(1)];

    while body.len() < length {
        let want = chunk.len().min(length - body.len());
        match reader.read(&mut chunk[..want]) {
            Ok(0) => {
                return Err(UploadError::Truncated {
                    expected: length,
                    received: body.len(),
                });
            }
            Ok(n) => body.extend_from_slice(&chunk[..n]),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }

    Ok(body)
}

/// Crea el archivo solo si no existe y escribe el contenido
fn store_new(path: &Path, data: &[u8]) -> Result<(), UploadError> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| match e.kind() {
            ErrorKind::AlreadyExists => UploadError::AlreadyExists,
            _ => UploadError::Io(e),
        })?;

    file.write_all(data)?;
    file.flush()?;
    Ok(())
}
