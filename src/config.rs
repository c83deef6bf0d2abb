//! Runtime configuration.
//!
//! All settings are CLI flags backed by environment variables with defaults,
//! resolved once at startup in `main` and passed by reference into the
//! store/service/provider constructors. Nothing reads the environment after
//! startup.

use clap::Parser;

/// Song library HTTP service
#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Database connection URL
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite:songshelf.db")]
    pub database_url: String,

    /// Base URL of the external song info API
    #[arg(long, env = "EXTERNAL_API_URL", default_value = "http://localhost:5000")]
    pub provider_url: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,
}
