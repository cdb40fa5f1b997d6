//! Application configuration from CLI flags and environment.

use std::net::IpAddr;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use multiples_core::constants::DEFAULT_REST_PORT;
use multiples_core::options::Options;
use multiples_core::worker::SumStrategy;
use multiples_server::ServerConfig;

/// Per-worker summation strategy, as spelled on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Step through every multiple.
    Iterative,
    /// Closed-form arithmetic series.
    ClosedForm,
}

impl From<StrategyArg> for SumStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Iterative => SumStrategy::Iterative,
            StrategyArg::ClosedForm => SumStrategy::ClosedForm,
        }
    }
}

/// Multiples: sum every value below a bound divisible by one of a set of multiples.
#[derive(Parser, Debug)]
#[command(name = "multiples", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Upper bound of the calculation.
    #[arg(short, long, default_value = "1000", env = "MULTIPLES_TOTAL")]
    pub total: u64,

    /// Multiples to sum, comma separated (e.g. "3,5").
    #[arg(short, long, value_delimiter = ',', num_args = 0..)]
    pub multiples: Vec<u32>,

    /// Algorithm to use: one-loop, concurrent, or all.
    #[arg(long, default_value = "all")]
    pub algo: String,

    /// How concurrent workers sum their sequence.
    #[arg(long, value_enum, default_value = "iterative")]
    pub strategy: StrategyArg,

    /// Maximum number of concurrent workers (0 = one per multiple).
    #[arg(long, default_value = "0")]
    pub max_workers: usize,

    /// Deadline for a calculation (e.g. "30s", "5m"; "0" disables it).
    #[arg(long, default_value = "5m", value_parser = parse_duration)]
    pub timeout: Duration,

    /// Start the REST server instead of computing once.
    #[arg(long)]
    pub serve: bool,

    /// REST server port.
    #[arg(long, default_value_t = DEFAULT_REST_PORT, env = "MULTIPLES_REST_PORT")]
    pub rest_port: u16,

    /// REST server bind address.
    #[arg(long, default_value = "0.0.0.0")]
    pub bind: IpAddr,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode (only output the sums).
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Deadline for a calculation (`None` when disabled).
    #[must_use]
    pub fn deadline(&self) -> Option<Duration> {
        Some(self.timeout).filter(|d| !d.is_zero())
    }

    /// Calculation options derived from the flags.
    #[must_use]
    pub fn options(&self) -> Options {
        Options {
            strategy: self.strategy.into(),
            max_workers: self.max_workers,
            deadline: self.deadline(),
        }
        .normalize()
    }

    /// REST server configuration derived from the flags.
    #[must_use]
    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            bind_address: self.bind,
            rest_port: self.rest_port,
            options: self.options(),
        }
    }

    /// Default log level: request logs are shown in server mode.
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.serve {
            tracing::Level::INFO
        } else {
            tracing::Level::WARN
        }
    }
}

/// Parse a duration string like "5m", "1h", "30s", "250ms" or a bare
/// number of seconds.
fn parse_duration(s: &str) -> Result<Duration, String> {
    let s = s.trim();
    let (digits, unit_secs, millis) = if let Some(ms) = s.strip_suffix("ms") {
        (ms, 1, true)
    } else if let Some(mins) = s.strip_suffix('m') {
        (mins, 60, false)
    } else if let Some(hours) = s.strip_suffix('h') {
        (hours, 3600, false)
    } else if let Some(secs) = s.strip_suffix('s') {
        (secs, 1, false)
    } else {
        (s, 1, false)
    };

    let n: u64 = digits
        .parse()
        .map_err(|_| format!("invalid duration '{s}' (expected e.g. 250ms, 30s, 5m, 1h)"))?;
    if millis {
        return Ok(Duration::from_millis(n));
    }
    n.checked_mul(unit_secs)
        .map(Duration::from_secs)
        .ok_or_else(|| format!("duration '{s}' is too large"))
}
