//! HTTP server command
//!
//! Runs the postboard HTTP server with an empty in-memory registry.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use postboard_server::{run_server, ServerConfig};

use crate::config::PostboardConfig;

/// Arguments for the serve command
#[derive(Parser, Debug, Default)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:9999)
    #[arg(long, short = 'b', env = "POSTBOARD_BIND")]
    pub bind: Option<SocketAddr>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long, env = "POSTBOARD_CORS_PERMISSIVE")]
    pub cors_permissive: bool,

    /// Request timeout in seconds (default: 30)
    #[arg(long, env = "POSTBOARD_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Config file path (default: ~/.postboard/config.toml)
    #[arg(long, env = "POSTBOARD_CONFIG")]
    pub config: Option<PathBuf>,
}

impl ServeArgs {
    /// Merge flags over the config file over built-in defaults.
    pub fn resolve(&self, file: &PostboardConfig) -> ServerConfig {
        let defaults = ServerConfig::default();
        let server = &file.server;

        ServerConfig {
            bind_addr: self.bind.or(server.bind).unwrap_or(defaults.bind_addr),
            cors_permissive: self.cors_permissive
                || server.cors_permissive.unwrap_or(defaults.cors_permissive),
            request_timeout: self
                .timeout
                .or(server.request_timeout_secs)
                .map(Duration::from_secs)
                .unwrap_or(defaults.request_timeout),
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let file_config = match args.config.clone().or_else(PostboardConfig::default_path) {
        Some(path) => PostboardConfig::load_from(&path)?,
        None => PostboardConfig::default(),
    };

    let config = args.resolve(&file_config);
    tracing::info!(
        bind = %config.bind_addr,
        cors_permissive = config.cors_permissive,
        timeout_secs = config.request_timeout.as_secs(),
        "Starting postboard server"
    );

    // Blocks until shutdown
    run_server(config)
        .await
        .context("Server error")?;

    Ok(())
}
