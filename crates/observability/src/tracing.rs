//! Tracing/logging initialization.
//!
//! Configuration comes from the environment:
//! - `RUST_LOG`: filter directives (default `info`)
//! - `STOCKLY_LOG_FORMAT`: `json` (default) or `pretty`

use anyhow::{Context, anyhow};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::util::SubscriberInitExt;

pub const FILTER_VAR: &str = "RUST_LOG";
pub const FORMAT_VAR: &str = "STOCKLY_LOG_FORMAT";

const DEFAULT_FILTER: &str = "info";

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl LogFormat {
    /// Parse a format name; unknown names yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Some(LogFormat::Json),
            "pretty" | "text" => Some(LogFormat::Pretty),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    pub filter: String,
    pub format: LogFormat,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl TracingConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup. Missing, blank or
    /// unrecognised values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let filter = lookup(FILTER_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.filter);
        let format = lookup(FORMAT_VAR)
            .and_then(|v| LogFormat::parse(&v))
            .unwrap_or(defaults.format);

        Self { filter, format }
    }
}

/// Install the global subscriber described by `config`.
///
/// Fails when the filter does not parse or a global subscriber is already set.
pub fn try_init(config: &TracingConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(&config.filter)
        .with_context(|| format!("invalid log filter {:?}", config.filter))?;

    let installed = match config.format {
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .with_target(false)
            .try_init(),
        LogFormat::Pretty => pretty_subscriber(filter, std::io::stdout)
            .try_init()
            .map_err(Into::into),
    };
    installed.map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))?;

    ::tracing::debug!(filter = %config.filter, format = ?config.format, "tracing initialized");
    Ok(())
}

/// Multi-line human-readable output for local runs.
fn pretty_subscriber<W>(
    filter: EnvFilter,
    writer: W,
) -> impl ::tracing::Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .pretty()
        .with_target(false)
        .with_writer(writer)
        .finish()
}

/// Initialize tracing/logging for the process from the environment.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let _ = try_init(&TracingConfig::from_env());
}
