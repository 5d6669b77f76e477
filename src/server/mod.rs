//! HTTP upload server
//!
//! Serves an upload form and returns the uploaded `onlinemapsources.xml`
//! with the Google Maps source added, as a file download.

pub mod config;
pub mod errors;
pub mod form;
pub(crate) mod upload;

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::http::{header, HeaderValue};
use axum::middleware;
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use axum_server::tls_rustls::RustlsConfig;
use axum_server::Handle;
use log::{info, warn};

use crate::insert::Inserter;

pub use config::{ServerConfig, TlsPaths, DEFAULT_HOST};
pub use errors::{ServerError, UploadError};

/// Value of the `Server` header on every response
pub const SERVER_ID: &str = concat!("oruxgmaps/", env!("CARGO_PKG_VERSION"));

/// How long in-flight requests may run once shutdown starts
const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

/// Per-router state shared by the handlers
pub(crate) struct AppState {
    pub(crate) upload_form: String,
    pub(crate) inserter: Inserter,
}

/// Build the application router for a configuration
///
/// `/upload` shows the form on GET and transforms the upload on POST.
/// Every other path redirects to `/upload`.
pub fn router(config: &ServerConfig) -> Router {
    let state = Arc::new(AppState {
        upload_form: config.upload_form.clone(),
        inserter: config.inserter,
    });

    Router::new()
        .route("/upload", get(upload::upload_form).post(upload::upload))
        .fallback(upload::root)
        .layer(middleware::map_response(set_server_header))
        .with_state(state)
}

async fn set_server_header(mut response: Response) -> Response {
    response
        .headers_mut()
        .insert(header::SERVER, HeaderValue::from_static(SERVER_ID));
    response
}

/// Run the server until Ctrl-C
///
/// # Arguments
/// * `config` - Listening address, TLS material and handler settings
///
/// # Returns
/// An error if the address cannot be resolved, the TLS material cannot be
/// loaded, or the listener fails
pub async fn serve(config: ServerConfig) -> Result<(), ServerError> {
    let addr = resolve(&config.host).await?;
    let app = router(&config);

    let handle = Handle::new();
    tokio::spawn(shutdown_on_ctrl_c(handle.clone()));

    match &config.tls {
        Some(tls) => {
            let rustls = RustlsConfig::from_pem_file(&tls.cert_path, &tls.key_path)
                .await
                .map_err(|source| ServerError::Tls {
                    cert_path: tls.cert_path.display().to_string(),
                    key_path: tls.key_path.display().to_string(),
                    source,
                })?;

            info!("Starting to listen on: https://{}", config.host);
            axum_server::bind_rustls(addr, rustls)
                .handle(handle)
                .serve(app.into_make_service())
                .await?;
        }
        None => {
            warn!("TLS disabled, serving plain HTTP");
            info!("Starting to listen on: http://{}", config.host);
            axum_server::bind(addr)
                .handle(handle)
                .serve(app.into_make_service())
                .await?;
        }
    }

    info!("Server stopped");
    Ok(())
}

async fn resolve(host: &str) -> Result<SocketAddr, ServerError> {
    let resolve_error = |source: io::Error| ServerError::Resolve {
        host: host.to_string(),
        source,
    };

    tokio::net::lookup_host(host)
        .await
        .map_err(resolve_error)?
        .next()
        .ok_or_else(|| resolve_error(io::Error::new(io::ErrorKind::NotFound, "no address found")))
}

async fn shutdown_on_ctrl_c(handle: Handle) {
    match tokio::signal::ctrl_c().await {
        Ok(()) => {
            info!("Shutting down");
            handle.graceful_shutdown(Some(SHUTDOWN_GRACE));
        }
        Err(e) => warn!("Cannot listen for Ctrl-C: {}", e),
    }
}
