//! Command-line flags for the demo.

use clap::Parser;
use moose_config::{LoadOptions, Mapping, MergeStrategy, MooseResult};
use serde_json::json;
use tracing_subscriber::EnvFilter;

/// Print where each configuration layer lives, what it contains and the
/// merged result.
#[derive(Debug, Parser)]
#[command(name = "moapp", version, about)]
pub struct Cli {
    /// Application name used for directory and file names.
    #[arg(long, default_value = "moapp")]
    pub name: String,
    /// Layer file extension, for example `cfg`.
    #[arg(long)]
    pub extension: Option<String>,
    /// Apply the system layer after the local layer.
    #[arg(long)]
    pub system_override: bool,
    /// Do not read the local layer.
    #[arg(long)]
    pub ignore_local: bool,
    /// Read the local layer from a dotfile.
    #[arg(long)]
    pub hidden_local: bool,
    /// Merge nested mappings instead of replacing them.
    #[arg(long)]
    pub deep: bool,
    /// Log loader activity to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Options from `{NAME}_*` environment variables with flags layered on
    /// top. A flag can enable a behaviour but never disables one set in the
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns the error from [`LoadOptions::from_env`] when an environment
    /// value is malformed.
    pub fn load_options(&self) -> MooseResult<LoadOptions> {
        let mut options = LoadOptions::from_env(&self.name)?;
        options.system_override |= self.system_override;
        options.ignore_local |= self.ignore_local;
        options.hidden_local |= self.hidden_local;
        if self.deep {
            options.merge_strategy = MergeStrategy::Deep;
        }
        if let Some(extension) = &self.extension {
            options.extension.clone_from(extension);
        }
        Ok(options)
    }
}

impl Cli {
    /// Log filter built from `rust_log` (normally `RUST_LOG`) when it holds
    /// valid directives, otherwise `warn`, or `debug` with `--verbose`.
    #[must_use]
    pub fn log_filter(&self, rust_log: Option<&str>) -> EnvFilter {
        let fallback = if self.verbose { "debug" } else { "warn" };
        rust_log
            .filter(|directives| !directives.trim().is_empty())
            .and_then(|directives| EnvFilter::try_new(directives).ok())
            .unwrap_or_else(|| EnvFilter::new(fallback))
    }
}

/// Defaults baked into the demo.
#[must_use]
pub fn demo_defaults() -> Mapping {
    let mut defaults = Mapping::new();
    defaults.insert("server".into(), json!("test.example.com"));
    defaults.insert("port".into(), json!(8080));
    defaults.insert("debug".into(), json!(false));
    defaults
}

#[cfg(test)]
mod tests {
    use anyhow::{Result, anyhow, ensure};
    use clap::Parser;
    use moose_config::MergeStrategy;
    use rstest::rstest;
    use tracing::level_filters::LevelFilter;

    use super::Cli;

    #[rstest]
    fn flags_enable_options() -> Result<()> {
        test_helpers::with_jail(|_| {
            let cli = Cli::try_parse_from([
                "moapp",
                "--name",
                "demo",
                "--extension",
                "cfg",
                "--system-override",
                "--hidden-local",
                "--deep",
            ])
            .map_err(test_helpers::figment_error)?;
            let options = cli.load_options().map_err(test_helpers::figment_error)?;
            if !(options.system_override && options.hidden_local && !options.ignore_local) {
                return Err(test_helpers::figment_error("flags not applied"));
            }
            if options.merge_strategy != MergeStrategy::Deep || options.extension != "cfg" {
                return Err(test_helpers::figment_error("strategy or extension not applied"));
            }
            Ok(())
        })
    }

    #[rstest]
    fn environment_options_survive_absent_flags() -> Result<()> {
        let options = test_helpers::with_jail(|jail| {
            jail.set_env("MOAPP_IGNORE_LOCAL", "true");
            let cli = Cli::try_parse_from(["moapp"]).map_err(test_helpers::figment_error)?;
            cli.load_options().map_err(test_helpers::figment_error)
        })?;
        ensure!(options.ignore_local, "environment option was dropped");
        Ok(())
    }

    #[rstest]
    #[case(&["moapp"], Some("info"), LevelFilter::INFO)]
    #[case(&["moapp", "--verbose"], Some("error"), LevelFilter::ERROR)]
    #[case(&["moapp"], None, LevelFilter::WARN)]
    #[case(&["moapp", "--verbose"], None, LevelFilter::DEBUG)]
    #[case(&["moapp", "--verbose"], Some(""), LevelFilter::DEBUG)]
    fn rust_log_wins_over_the_fallback(
        #[case] args: &[&str],
        #[case] rust_log: Option<&str>,
        #[case] expected: LevelFilter,
    ) -> Result<()> {
        let cli = Cli::try_parse_from(args)?;
        let hint = cli.log_filter(rust_log).max_level_hint();
        ensure!(hint == Some(expected), "expected {expected}, got {hint:?}");
        Ok(())
    }

    #[rstest]
    fn unknown_flag_is_rejected() -> Result<()> {
        match Cli::try_parse_from(["moapp", "--nope"]) {
            Ok(cli) => Err(anyhow!("unexpected parse success: {cli:?}")),
            Err(_) => Ok(()),
        }
    }
}
