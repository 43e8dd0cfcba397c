//! # Servidor TCP Concurrente
//! src/server/tcp.rs
//!
//! Un thread por conexión. Cada thread atiende requests en secuencia sobre
//! el mismo socket (keep-alive) hasta que el cliente cierra, vence el
//! timeout de inactividad o llega un request inválido.

use crate::config::Config;
use crate::error::{ServerError, ServerResult};
use crate::handlers::{compute, image, static_files, upload, NotFoundPage, UploadSettings};
use crate::http::request::validate;
use crate::http::{Response, StatusCode};
use crate::router::{RedirectTable, Route, Router};
use crate::server::connection::{Connection, Transport};
use std::fs;
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Estado compartido (solo lectura) entre los threads de conexión
#[derive(Debug, Clone)]
pub struct Site {
    router: Router,
    not_found: NotFoundPage,
    uploads: UploadSettings,
    idle_timeout: Duration,
    read_buffer_size: usize,
}

impl Site {
    pub fn new(config: &Config, redirects: RedirectTable) -> Self {
        Self {
            router: Router::new(config.web_root(), &config.default_document, redirects),
            not_found: NotFoundPage::new(config.error_page(), config.error_image()),
            uploads: UploadSettings {
                dir: config.upload_dir(),
                large_threshold: config.large_upload_threshold,
                chunk_size: config.upload_chunk_size,
                upload_timeout: config.upload_timeout(),
            },
            idle_timeout: config.idle_timeout(),
            read_buffer_size: config.read_buffer_size,
        }
    }

    pub fn upload_dir(&self) -> &Path {
        &self.uploads.dir
    }
}

/// Servidor HTTP/1.1 concurrente
pub struct Server {
    listener: TcpListener,
    site: Arc<Site>,
}

impl Server {
    /// Valida la configuración, carga redirecciones, prepara el directorio
    /// de uploads y abre el socket.
    pub fn bind(config: &Config) -> ServerResult<Self> {
        config.validate().map_err(ServerError::Config)?;

        let redirects = match &config.redirects_file {
            Some(path) => RedirectTable::load(&PathBuf::from(path))?,
            None => RedirectTable::builtin(),
        };
        if redirects.is_empty() {
            log::warn!("Redirect table is empty");
        } else {
            log::debug!("{} redirect entries loaded", redirects.len());
        }

        let site = Site::new(config, redirects);
        fs::create_dir_all(site.upload_dir())?;

        let listener = TcpListener::bind(config.address())?;
        log::info!("Listening for connections on {}", listener.local_addr()?);

        Ok(Self {
            listener,
            site: Arc::new(site),
        })
    }

    pub fn local_addr(&self) -> ServerResult<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Acepta conexiones hasta que el listener falle de forma permanente
    pub fn run(self) -> ServerResult<()> {
        for stream in self.listener.incoming() {
            match stream {
                Ok(stream) => {
                    let site = Arc::clone(&self.site);
                    thread::spawn(move || serve_stream(stream, &site));
                }
                Err(e) => {
                    log::error!("Failed to accept connection: {}", e);
                }
            }
        }
        Ok(())
    }
}

fn serve_stream(stream: TcpStream, site: &Site) {
    let peer = stream
        .peer_addr()
        .map(|addr| addr.to_string())
        .unwrap_or_else(|_| "unknown".to_string());
    log::info!("New connection from {}", peer);

    if let Err(e) = stream.set_read_timeout(Some(site.idle_timeout)) {
        log::error!("Could not set read timeout for {}: {}", peer, e);
        return;
    }

    let mut conn = Connection::new(stream, site.read_buffer_size);
    handle_connection(&mut conn, site);
}

/// Atiende requests sobre una conexión hasta que deba cerrarse
pub fn handle_connection<S: Transport>(conn: &mut Connection<S>, site: &Site) {
    loop {
        let Some(raw) = conn.receive_headers() else {
            log::info!("Closing connection");
            break;
        };

        let request = match validate(&raw) {
            Ok(request) => request,
            Err(e) => {
                log::warn!("Invalid request: {}", e);
                let response = Response::error(StatusCode::BadRequest, "Bad Request");
                if let Err(e) = conn.send(&response) {
                    log::error!("Failed to send response: {}", e);
                }
                break;
            }
        };

        log::info!("{} {}", request.method().as_str(), request.target());

        let route = site.router.route(request.target());
        log::debug!("route: {:?}", route);

        let response = match route {
            Route::Compute(kind, params) => compute::handle(kind, &params),
            Route::Upload(params) => upload::handle(&params, &request, conn, &site.uploads),
            Route::Image(params) => image::handle(&params, site.upload_dir()),
            Route::Redirect(location) => Response::redirect(&location),
            Route::FixedError(status, text) => Response::error(status, &text),
            Route::StaticAsset(path) => static_files::serve(&path, &site.not_found),
            Route::NotFound => site.not_found.render(),
        };

        let status = response.status();
        if status.is_server_error() {
            log::warn!("{} {} -> {}", request.method().as_str(), request.target(), status);
        } else if status.is_client_error() {
            log::info!("{} {} -> {}", request.method().as_str(), request.target(), status);
        } else {
            log::debug!("-> {}", status);
        }
        if let Err(e) = conn.send(&response) {
            log::error!("Failed to send response: {}", e);
            break;
        }
    }
}
