//! # Conexión con el Cliente
//! src/server/connection.rs
//!
//! Envuelve el socket en un `BufReader` que vive toda la conexión: el
//! framing de headers y la lectura del body de un upload consumen del
//! mismo buffer, así no se pierden bytes entre un paso y otro.
//!
//! `Transport` es la costura con el socket real; los tests la implementan
//! sobre buffers en memoria.

use crate::http::framing;
use crate::http::Response;
use std::io::{self, BufReader, Read, Write};
use std::net::TcpStream;
use std::time::Duration;

/// Stream bidireccional con timeout de lectura ajustable
pub trait Transport: Read + Write {
    fn read_timeout(&self) -> io::Result<Option<Duration>>;
    fn set_read_timeout(&self, timeout: Option<Duration>) -> io::Result<()>;
}

impl Transport for TcpStream {
    fn read_timeout(&self) -> io::Result<Option<Duration>> {
        TcpStream::read_timeout(self)
    }

    fn set_read_timeout(&self, timeout: Option<Duration>) -> io::Result<()> {
        TcpStream::set_read_timeout(self, timeout)
    }
}

pub struct Connection<S: Transport> {
    reader: BufReader<S>,
}

impl<S: Transport> Connection<S> {
    pub fn new(stream: S, buffer_size: usize) -> Self {
        Self {
            reader: BufReader::with_capacity(buffer_size, stream),
        }
    }

    /// Lee el siguiente bloque de headers (ver `framing::receive_headers`)
    pub fn receive_headers(&mut self) -> Option<Vec<u8>> {
        framing::receive_headers(&mut self.reader)
    }

    /// Reader bufferizado, para consumir el body detrás de los headers
    pub fn reader(&mut self) -> &mut BufReader<S> {
        &mut self.reader
    }

    /// Escribe una respuesta completa
    pub fn send(&mut self, response: &Response) -> io::Result<()> {
        let stream = self.reader.get_mut();
        stream.write_all(&response.to_bytes())?;
        stream.flush()
    }

    pub fn read_timeout(&self) -> io::Result<Option<Duration>> {
        self.reader.get_ref().read_timeout()
    }

    pub fn set_read_timeout(&self, timeout: Option<Duration>) -> io::Result<()> {
        self.reader.get_ref().set_read_timeout(timeout)
    }

    pub fn get_ref(&self) -> &S {
        self.reader.get_ref()
    }
}
