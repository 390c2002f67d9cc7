//! Diagnostic logging for the CLI
//!
//! Controlled by `KESTREL_LOG` (falling back to `RUST_LOG`), using the
//! usual filter syntax such as `debug` or `ks_resolve=trace`. Set
//! `KESTREL_LOG_FORMAT=json` for one JSON object per event. Output goes to
//! stderr so it never mixes with reports on stdout.

use std::{env, io};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    fn from_env() -> Self {
        match env::var("KESTREL_LOG_FORMAT")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

fn build_filter() -> EnvFilter {
    match env::var("KESTREL_LOG") {
        Ok(directives) => EnvFilter::builder().parse_lossy(directives),
        Err(_) => EnvFilter::from_default_env(),
    }
}

/// Installs the global subscriber when logging was requested
pub fn init_logging() {
    if env::var_os("KESTREL_LOG").is_none() && env::var_os("RUST_LOG").is_none() {
        return;
    }

    let filter = build_filter();
    match LogFormat::from_env() {
        LogFormat::Json => {
            let layer = fmt::layer().json().with_writer(io::stderr);
            Registry::default().with(filter).with(layer).init();
        }
        LogFormat::Text => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .init();
        }
    }
}
