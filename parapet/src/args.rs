use std::path::PathBuf;

use clap::Parser;

/// Parapet API shell
#[derive(Debug, Parser)]
#[command(name = "parapet", about = "JSON API contract layer and entry shell server")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "parapet.toml", env = "PARAPET_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "PARAPET_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,
}
