use std::time::Duration;

use bookscape_exec::engine::Engine;
use bookscape_exec::ConnectionConf;
use clap::{Args, Parser, ValueEnum};

use crate::commands::Commands;

#[derive(Parser)]
#[clap(name = "bookscape")]
#[clap(version)]
#[clap(about = "Search and analyze the Bookscape book catalog", long_about = None)]
pub struct Cli {
    /// Log verbosity.
    #[clap(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Output logs in json format.
    #[clap(long, value_enum)]
    pub log_mode: Option<LoggingMode>,

    #[clap(flatten)]
    pub connection: ConnectionArgs,

    #[clap(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum LoggingMode {
    #[default]
    Pretty,
    Json,
    Compact,
}

impl From<LoggingMode> for logutil::LoggingMode {
    fn from(mode: LoggingMode) -> Self {
        match mode {
            LoggingMode::Pretty => logutil::LoggingMode::Pretty,
            LoggingMode::Json => logutil::LoggingMode::Json,
            LoggingMode::Compact => logutil::LoggingMode::Compact,
        }
    }
}

/// How to reach the Postgres instance holding the catalog.
///
/// Everything can come from the environment so no credentials end up in
/// shell history or process listings.
#[derive(Debug, Clone, Args)]
pub struct ConnectionArgs {
    /// Postgres host for the catalog store.
    #[clap(long, env = "BOOKSCAPE_HOST", default_value = "localhost")]
    pub host: String,

    /// Postgres port.
    #[clap(long, env = "BOOKSCAPE_PORT", default_value_t = 5432)]
    pub port: u16,

    /// Database holding the books table.
    #[clap(long, env = "BOOKSCAPE_DB", default_value = "bookscape_explorer")]
    pub database: String,

    /// User for authentication.
    #[clap(short, long, env = "BOOKSCAPE_USER", default_value = "postgres")]
    pub user: String,

    /// Password for authentication.
    ///
    /// Prefer setting BOOKSCAPE_PASSWORD over passing the flag.
    #[clap(short, long, env = "BOOKSCAPE_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Expire the cached books snapshot after this many seconds.
    ///
    /// If unset, the snapshot lives until the process exits or `\refresh`
    /// drops it.
    #[clap(long, env = "BOOKSCAPE_SNAPSHOT_TTL")]
    pub snapshot_ttl: Option<u64>,
}

impl ConnectionArgs {
    pub fn conf(&self) -> ConnectionConf {
        ConnectionConf {
            host: self.host.clone(),
            port: self.port,
            database: self.database.clone(),
            user: self.user.clone(),
            password: self.password.clone(),
        }
    }

    pub fn engine(&self) -> Engine {
        match self.snapshot_ttl {
            Some(secs) => Engine::with_ttl(self.conf(), Duration::from_secs(secs)),
            None => Engine::new(self.conf()),
        }
    }
}
