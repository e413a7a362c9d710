use clap::Parser;

use crate::{infrastructure::config::Config, utils::version};

#[derive(Parser, Debug, Default)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Tick rate, i.e. number of ticks per second",
        default_value_t = 4.0
    )]
    pub tick_rate: f64,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Frame rate, i.e. number of frames per second",
        default_value_t = 30.0
    )]
    pub frame_rate: f64,

    #[arg(long, value_name = "URL", help = "Base URL of the company directory API")]
    pub api_base_url: Option<String>,

    #[arg(long, value_name = "MS", help = "Quiet period before filter edits are applied")]
    pub debounce_ms: Option<u64>,

    #[arg(long, help = "Always fetch from the API instead of reusing earlier pages")]
    pub no_cache: bool,

    #[arg(
        long,
        value_name = "FLOAT",
        value_parser = parse_threshold,
        help = "Visible share of the sentinel that triggers the next page (0, 1]"
    )]
    pub threshold: Option<f64>,

    #[arg(
        long,
        value_name = "ROWS",
        help = "Rows around the viewport that count as visible"
    )]
    pub root_margin: Option<u32>,
}

/// A finite ratio in (0, 1]
fn parse_threshold(arg: &str) -> Result<f64, String> {
    let threshold: f64 = arg
        .trim()
        .parse()
        .map_err(|e| format!("`{arg}` is not a number: {e}"))?;
    if threshold.is_finite() && threshold > 0.0 && threshold <= 1.0 {
        Ok(threshold)
    } else {
        Err(format!("must be in (0, 1], got {arg}"))
    }
}

impl Cli {
    /// Apply command-line overrides on top of the loaded configuration
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(url) = &self.api_base_url {
            config.api_base_url.clone_from(url);
        }
        if let Some(ms) = self.debounce_ms {
            config.debounce_ms = ms;
        }
        if self.no_cache {
            config.cache_enabled = false;
        }
        if let Some(threshold) = self.threshold {
            config.observer.threshold = threshold;
        }
        if let Some(root_margin) = self.root_margin {
            config.observer.root_margin = root_margin;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_parse_overrides() {
        let cli = Cli::parse_from([
            "corpdir",
            "--api-base-url",
            "https://api.example.com",
            "--debounce-ms",
            "0",
            "--no-cache",
            "--threshold",
            "1.0",
            "--root-margin",
            "0",
        ]);
        let config = cli.apply(Config::default());

        assert_eq!(config.api_base_url, "https://api.example.com");
        assert_eq!(config.debounce_ms, 0);
        assert!(!config.cache_enabled);
        assert_eq!(config.observer.threshold, 1.0);
        assert_eq!(config.observer.root_margin, 0);
    }

    #[test]
    fn test_defaults_leave_config_alone() {
        let cli = Cli::parse_from(["corpdir"]);
        assert_eq!(cli.tick_rate, 4.0);
        assert_eq!(cli.frame_rate, 30.0);

        let config = cli.apply(Config::default());
        assert!(config.cache_enabled);
        assert_eq!(config.debounce_ms, 500);
    }

    #[rstest]
    #[case("NaN")]
    #[case("inf")]
    #[case("0")]
    #[case("-0.5")]
    #[case("1.5")]
    #[case("half")]
    fn test_threshold_out_of_range_is_rejected(#[case] value: &str) {
        assert!(Cli::try_parse_from(["corpdir", "--threshold", value]).is_err());
    }

    #[test]
    fn test_threshold_in_range_is_applied() -> Result<(), clap::Error> {
        let cli = Cli::try_parse_from(["corpdir", "--threshold", "0.25"])?;
        assert_eq!(cli.apply(Config::default()).observer.threshold, 0.25);
        Ok(())
    }
}
