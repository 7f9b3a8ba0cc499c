use clap::{Parser, ValueEnum};

use demohost_engine::host::{HostConfig, LogStatsMode};

/// Headless demo host
#[derive(Parser, Debug)]
#[command(name = "demohost-runner")]
#[command(about = "Runs the spinner demo on the fixed-timestep demo host")]
#[command(version)]
pub struct Args {
    /// Wrap the demo app in the fallback firewall
    #[arg(long)]
    pub firewall: bool,

    /// Per-frame timing written to the log
    #[arg(long, value_enum, default_value_t = LogStats::Off)]
    pub log_stats: LogStats,

    /// Pretend exactly this many microseconds elapse per tick (0 = wall clock)
    #[arg(long, default_value_t = 0)]
    pub forced_update_time: u64,

    /// Draw the profiler overlay
    #[arg(long)]
    pub overlay: bool,

    /// Simulated seconds before the demo requests an exit
    #[arg(long, default_value_t = 3.0)]
    pub run_for: f64,

    /// Log filter in env_logger syntax; overrides RUST_LOG
    #[arg(long)]
    pub log_filter: Option<String>,
}

#[derive(ValueEnum, Debug, Copy, Clone, PartialEq, Eq)]
pub enum LogStats {
    Off,
    Latest,
    Average,
}

impl From<LogStats> for LogStatsMode {
    fn from(value: LogStats) -> Self {
        match value {
            LogStats::Off => LogStatsMode::Off,
            LogStats::Latest => LogStatsMode::Latest,
            LogStats::Average => LogStatsMode::Average,
        }
    }
}

impl Args {
    pub fn host_config(&self) -> HostConfig {
        HostConfig::default()
            .with_stats(true, self.log_stats.into())
            .with_firewall(self.firewall)
            .with_forced_update_time(self.forced_update_time)
            .with_overlay(self.overlay)
    }

    pub fn run_for_us(&self) -> u64 {
        (self.run_for.max(0.0) * 1_000_000.0) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("demohost-runner").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_match_host_defaults() {
        let args = parse(&[]);
        let config = args.host_config();
        assert!(!config.enable_firewall);
        assert!(!config.render_overlay);
        assert_eq!(config.log_stats_mode, LogStatsMode::Off);
        assert_eq!(config.forced_update_time_us, 0);
        assert_eq!(args.run_for_us(), 3_000_000);
        assert!(args.log_filter.is_none());
    }

    #[test]
    fn flags_map_into_host_config() {
        let args = parse(&[
            "--firewall",
            "--log-stats",
            "average",
            "--forced-update-time",
            "16667",
            "--overlay",
            "--run-for",
            "0.5",
        ]);
        let config = args.host_config();
        assert!(config.enable_firewall);
        assert!(config.render_overlay);
        assert!(config.enable_stats);
        assert_eq!(config.log_stats_mode, LogStatsMode::Average);
        assert_eq!(config.forced_update_time_us, 16_667);
        assert_eq!(args.run_for_us(), 500_000);
    }

    #[test]
    fn unknown_log_stats_mode_is_rejected() {
        let result = Args::try_parse_from(["demohost-runner", "--log-stats", "sometimes"]);
        assert!(result.is_err());
    }
}
