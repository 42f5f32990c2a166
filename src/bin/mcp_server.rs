//! Autolisting MCP Server
//!
//! This binary provides a Model Context Protocol (MCP) server for listing extraction.
//! It exposes extraction and auto-fill script tools that can be used by AI assistants and
//! other MCP clients.

use autolisting::extract::ExtractorConfig;
use autolisting::mcp::ListingServer;
use clap::Parser;
use rmcp::{ServiceExt, transport::stdio};
use std::time::Duration;

#[derive(Parser)]
#[command(name = "autolisting-mcp")]
#[command(version)]
#[command(about = "Vehicle listing extraction MCP server (stdio)", long_about = None)]
struct Cli {
    /// Gemini model used for extraction
    #[arg(long, value_name = "NAME")]
    model: Option<String>,

    /// Gemini API key (falls back to GEMINI_API_KEY)
    #[arg(long, env = "API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Override the Gemini API base URL
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Request timeout in seconds (default: none)
    #[arg(long, value_name = "SECS")]
    timeout_secs: Option<u64>,
}

impl Cli {
    fn extractor_config(&self) -> ExtractorConfig {
        let mut config = ExtractorConfig::from_env();
        if let Some(key) = self.api_key.as_deref().filter(|key| !key.trim().is_empty()) {
            config = config.api_key(key);
        }
        if let Some(model) = &self.model {
            config = config.model(model.as_str());
        }
        if let Some(base_url) = &self.base_url {
            config = config.base_url(base_url.as_str());
        }
        if let Some(secs) = self.timeout_secs {
            config = config.timeout(Duration::from_secs(secs));
        }
        config
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the protocol.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let config = cli.extractor_config();
    if config.api_key.is_none() {
        log::warn!(
            "No API key found in --api-key, API_KEY or GEMINI_API_KEY; extract_vehicle calls will fail"
        );
    }

    let model = config.model.clone();
    let server = ListingServer::with_config(config)
        .map_err(|e| format!("Failed to create listing server: {}", e))?;

    log::info!("Autolisting MCP Server starting (model: {})", model);
    log::info!("Ready to accept MCP connections via stdio");

    let service = server.serve(stdio()).await?;
    service.waiting().await?;

    Ok(())
}
