//! Runtime configuration

use crate::cli::Cli;

/// How much the binary logs to stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        match (quiet, verbose) {
            (true, _) => Self::Quiet,
            (false, 0) => Self::Normal,
            (false, 1) => Self::Verbose,
            (false, _) => Self::Debug,
        }
    }

    /// Filter directive used when `STACKCALC_LOG` is not set.
    pub const fn filter(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "info",
            Self::Debug => "debug",
        }
    }
}

/// What the binary prints on stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    /// Placed between tokens of a converted expression
    pub separator: String,
    pub output: OutputFormat,
    pub verbosity: Verbosity,
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        Self {
            separator: cli.separator.clone(),
            output: if cli.json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            },
            verbosity: Verbosity::from_flags(cli.verbose, cli.quiet),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["stackcalc", "postfix", "A+B"]);
        assert_eq!(Config::from(&cli), Config::default());
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::parse_from(["stackcalc", "-vv", "--json", "--separator", ",", "prefix", "A"]);
        let config = Config::from(&cli);
        assert_eq!(config.separator, ",");
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.verbosity, Verbosity::Debug);
        assert_eq!(config.verbosity.filter(), "debug");
    }

    #[test]
    fn quiet_wins() {
        assert_eq!(Verbosity::from_flags(3, true), Verbosity::Quiet);
        assert_eq!(Verbosity::from_flags(1, false).filter(), "info");
    }
}
