//! Server configuration

use std::env;
use std::path::PathBuf;

use clap::ArgMatches;

use crate::insert::Inserter;
use crate::server::errors::ServerError;
use crate::server::form::UPLOAD_FORM;

/// Listening address used when none is given
pub const DEFAULT_HOST: &str = "0.0.0.0:4430";

/// Certificate and private key, both PEM encoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlsPaths {
    pub cert_path: PathBuf,
    pub key_path: PathBuf,
}

impl TlsPaths {
    pub fn new(cert_path: impl Into<PathBuf>, key_path: impl Into<PathBuf>) -> Self {
        TlsPaths {
            cert_path: cert_path.into(),
            key_path: key_path.into(),
        }
    }

    /// `$HOME/keys/cert.pem` and `$HOME/keys/key.pem`
    pub fn in_home_keys() -> Option<Self> {
        let keys = PathBuf::from(env::var_os("HOME")?).join("keys");
        Some(TlsPaths::new(keys.join("cert.pem"), keys.join("key.pem")))
    }
}

/// Everything the upload server needs to run
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listening address and port, e.g. `0.0.0.0:4430`
    pub host: String,
    /// TLS material; plain HTTP when absent
    pub tls: Option<TlsPaths>,
    /// HTML served on `GET /upload`
    pub upload_form: String,
    /// Inserter applied to uploads
    pub inserter: Inserter,
}

impl ServerConfig {
    /// Plain HTTP configuration with the built-in form
    pub fn new(host: impl Into<String>) -> Self {
        ServerConfig {
            host: host.into(),
            tls: None,
            upload_form: UPLOAD_FORM.to_string(),
            inserter: Inserter::new(),
        }
    }

    pub fn with_tls(mut self, tls: TlsPaths) -> Self {
        self.tls = Some(tls);
        self
    }

    pub fn with_upload_form(mut self, upload_form: impl Into<String>) -> Self {
        self.upload_form = upload_form.into();
        self
    }

    pub fn with_inserter(mut self, inserter: Inserter) -> Self {
        self.inserter = inserter;
        self
    }

    /// Build a configuration from the server's command-line arguments
    ///
    /// Expects `host`, `cert`, `key` (strings) and `plain` (flag). Without
    /// `--plain`, missing certificate or key paths fall back to the
    /// `$HOME/keys` defaults.
    pub fn from_args(args: &ArgMatches) -> Result<Self, ServerError> {
        let host = args
            .get_one::<String>("host")
            .map(String::as_str)
            .unwrap_or(DEFAULT_HOST);
        let config = ServerConfig::new(host);

        if args.get_flag("plain") {
            return Ok(config);
        }

        let defaults = TlsPaths::in_home_keys();
        let cert_path = args
            .get_one::<String>("cert")
            .map(PathBuf::from)
            .or_else(|| defaults.as_ref().map(|d| d.cert_path.clone()));
        let key_path = args
            .get_one::<String>("key")
            .map(PathBuf::from)
            .or_else(|| defaults.as_ref().map(|d| d.key_path.clone()));

        match (cert_path, key_path) {
            (Some(cert), Some(key)) => Ok(config.with_tls(TlsPaths::new(cert, key))),
            _ => Err(ServerError::Config(
                "HOME is not set; pass --cert and --key or use --plain".to_string(),
            )),
        }
    }
}
