use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Debug, Parser)]
#[command(
    name = "ais-dashboard",
    version,
    about = "Render the AIS analytics dashboard without a browser"
)]
pub struct CliArgs {
    /// Backend origin (overrides AIS_DASHBOARD_URL)
    #[arg(long = "base-url", value_name = "URL")]
    pub base_url: Option<String>,

    /// Which part of the dashboard to render
    #[arg(long, value_enum, default_value_t = Section::All)]
    pub section: Section,

    /// Risk threshold, 0-100 (overrides AIS_RISK_THRESHOLD)
    #[arg(long, value_name = "N")]
    pub threshold: Option<String>,

    /// Print a JSON summary instead of markup
    #[arg(long)]
    pub json: bool,

    /// Write a standalone HTML page instead of printing fragments
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Section {
    Dashboard,
    Risk,
    RiskMap,
    All,
}

impl Section {
    /// The concrete sections this selection renders, in page order.
    pub fn expand(self) -> Vec<Self> {
        match self {
            Self::All => vec![Self::Dashboard, Self::Risk, Self::RiskMap],
            single => vec![single],
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Risk => "risk",
            Self::RiskMap => "risk-map",
            Self::All => "all",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_render_everything() {
        let args = CliArgs::try_parse_from(["ais-dashboard"]).unwrap();
        assert_eq!(args.section, Section::All);
        assert!(args.base_url.is_none());
        assert!(args.threshold.is_none());
        assert!(!args.json);
        assert!(args.output.is_none());
    }

    #[test]
    fn parses_flags() {
        let args = CliArgs::try_parse_from([
            "ais-dashboard",
            "--base-url",
            "http://10.0.0.5:8000",
            "--section",
            "risk-map",
            "--threshold",
            "55",
            "--json",
            "--debug",
        ])
        .unwrap();
        assert_eq!(args.base_url.as_deref(), Some("http://10.0.0.5:8000"));
        assert_eq!(args.section, Section::RiskMap);
        assert_eq!(args.threshold.as_deref(), Some("55"));
        assert!(args.json && args.debug);
    }

    #[test]
    fn rejects_unknown_section() {
        assert!(CliArgs::try_parse_from(["ais-dashboard", "--section", "marine"]).is_err());
    }

    #[test]
    fn all_expands_in_page_order() {
        assert_eq!(
            Section::All.expand(),
            vec![Section::Dashboard, Section::Risk, Section::RiskMap]
        );
        assert_eq!(Section::Risk.expand(), vec![Section::Risk]);
    }
}
