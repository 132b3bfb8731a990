//! CLI Tooling
//!
//! Command-line interface for catalog operations: serving, printing, and
//! validating the built-in tree catalog.

use crate::catalog::TreeCatalog;
use crate::config::{CanopyConfig, ConfigLoader};
use crate::error::CanopyError;
use crate::format::{format_catalog_text, format_tree_text, format_validate_result_text};
use crate::logging::LoggingConfig;
use crate::samples::sample_catalog;
use crate::server;
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// Canopy CLI - Tree catalog display service
#[derive(Parser)]
#[command(name = "canopy")]
#[command(about = "Serve and inspect a catalog of numbered trees")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (when output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Fold CLI log flags into a logging config (CLI wins over file/env-file).
    pub fn apply_log_overrides(&self, logging: &mut LoggingConfig) {
        if let Some(level) = &self.log_level {
            logging.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            logging.format = format.clone();
        }
        if let Some(output) = &self.log_output {
            logging.output = output.clone();
        }
        if let Some(file) = &self.log_file {
            logging.file = Some(file.clone());
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve {
        /// Bind address, e.g. 127.0.0.1:8080 (overrides config)
        #[arg(long)]
        bind: Option<String>,
    },
    /// Print one tree, or the whole catalog
    Show {
        /// Tree name (omit to print the whole catalog)
        name: Option<String>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Validate the id invariants of the built catalog
    Validate {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

/// CLI context owning the built catalog and loaded configuration.
pub struct CliContext {
    catalog: Arc<TreeCatalog>,
    config: CanopyConfig,
}

impl CliContext {
    /// Create a new CLI context: load configuration and build the catalog.
    pub fn new(config_path: Option<PathBuf>) -> Result<Self, CanopyError> {
        let config = if let Some(path) = &config_path {
            ConfigLoader::load_from_file(path)?
        } else {
            ConfigLoader::load(Path::new("."))?
        };
        let catalog = Arc::new(sample_catalog());
        Ok(Self { catalog, config })
    }

    pub fn config(&self) -> &CanopyConfig {
        &self.config
    }

    pub fn catalog(&self) -> &TreeCatalog {
        &self.catalog
    }

    /// Execute a CLI command.
    pub fn execute(&self, command: &Commands) -> Result<String, CanopyError> {
        match command {
            Commands::Serve { bind } => self.handle_serve(bind.as_deref()),
            Commands::Show { name, format } => self.handle_show(name.as_deref(), format),
            Commands::Validate { format } => self.handle_validate(format),
        }
    }

    fn handle_serve(&self, bind_override: Option<&str>) -> Result<String, CanopyError> {
        let addr: SocketAddr = match bind_override {
            Some(raw) => raw.parse().map_err(|e| {
                CanopyError::Config(format!("Invalid bind address {:?}: {}", raw, e))
            })?,
            None => self.config.server.bind_addr()?,
        };
        info!(addr = %addr, trees = self.catalog.len(), "starting server");
        let runtime = tokio::runtime::Runtime::new()?;
        runtime.block_on(server::serve(addr, Arc::clone(&self.catalog)))?;
        Ok("Server stopped".to_string())
    }

    fn handle_show(&self, name: Option<&str>, format: &str) -> Result<String, CanopyError> {
        match name {
            Some(name) => {
                let entry = self
                    .catalog
                    .entry(name)
                    .ok_or_else(|| CanopyError::UnknownTree(name.to_string()))?;
                match format {
                    "json" => Ok(serde_json::to_string_pretty(entry)?),
                    _ => Ok(format_tree_text(&entry.name, &entry.root)),
                }
            }
            None => match format {
                "json" => Ok(serde_json::to_string_pretty(self.catalog.as_ref())?),
                _ => Ok(format_catalog_text(&self.catalog)),
            },
        }
    }

    fn handle_validate(&self, format: &str) -> Result<String, CanopyError> {
        let result = self.catalog.validate();
        match format {
            "json" => Ok(serde_json::to_string_pretty(&result)?),
            _ => Ok(format_validate_result_text(&result)),
        }
    }
}
