//! Database Config

use clap::Args;

/// Document store settings.
#[derive(Debug, Args)]
pub struct DatabaseConfig {
    /// `MongoDB` connection string
    #[arg(long, env = "MONGODB_URL", hide_env_values = true)]
    pub database_url: String,

    /// Database used when the connection string does not name one
    #[arg(long, env = "MONGODB_DATABASE", default_value = "catalogue")]
    pub database_name: String,
}
