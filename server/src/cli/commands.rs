// server/src/cli/commands.rs

// Command-line arguments and subcommands for the triage CLI.
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use triage_models::Bleeding;

#[derive(Parser, Debug)]
#[command(name = "triage-cli")]
#[command(version)]
#[command(about = "Wound triage: severity rules, facility ranking and the triage REST API")]
pub struct CliArgs {
    /// Configuration file (YAML, JSON or TOML). Defaults to ./triage_config.yaml when present.
    #[arg(long, short = 'c', global = true, env = "TRIAGE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log at DEBUG level.
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: TriageCommands,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum TriageCommands {
    /// Start the REST API. Ctrl-C stops it.
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(long, short = 'p')]
        port: Option<u16>,
    },
    /// Assess a wound and recommend a level of care.
    Assess {
        #[arg(long, short = 'l')]
        label: String,
        /// Pain on the 0-10 scale.
        #[arg(long, allow_negative_numbers = true)]
        pain: i64,
        /// none, mild or heavy.
        #[arg(long, short = 'b')]
        bleeding: Bleeding,
        #[arg(long, short = 's')]
        swelling: bool,
        #[arg(long, requires = "lng", allow_negative_numbers = true)]
        lat: Option<f64>,
        #[arg(long, requires = "lat", allow_negative_numbers = true)]
        lng: Option<f64>,
    },
    /// List the nearest facilities suited to a tier.
    Facilities {
        /// SelfCare, UrgentCare, ER or TraumaCenter. Anything else searches all facilities.
        #[arg(long, short = 't')]
        tier: String,
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lng: f64,
    },
    /// Run the wound classifier on an image file.
    Classify {
        #[arg(long, short = 'i')]
        image: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_assess_with_location() {
        let args = CliArgs::try_parse_from([
            "triage-cli", "assess", "--label", "Cut", "--pain", "4", "--bleeding", "Mild",
            "--lat", "39.95", "--lng", "-75.16",
        ])
        .unwrap();
        assert_eq!(
            args.command,
            TriageCommands::Assess {
                label: "Cut".to_string(),
                pain: 4,
                bleeding: Bleeding::Mild,
                swelling: false,
                lat: Some(39.95),
                lng: Some(-75.16),
            }
        );
    }

    #[test]
    fn latitude_without_longitude_is_refused() {
        let result = CliArgs::try_parse_from([
            "triage-cli", "assess", "--label", "Cut", "--pain", "4", "--bleeding", "none",
            "--lat", "39.95",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_bleeding_level_is_refused() {
        let result = CliArgs::try_parse_from([
            "triage-cli", "assess", "--label", "Cut", "--pain", "4", "--bleeding", "gushing",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn global_flags_follow_the_subcommand() {
        let args = CliArgs::try_parse_from([
            "triage-cli", "serve", "--port", "9000", "--verbose", "--config", "custom.yaml",
        ])
        .unwrap();
        assert!(args.verbose);
        assert_eq!(args.config, Some(PathBuf::from("custom.yaml")));
        assert_eq!(args.command, TriageCommands::Serve { host: None, port: Some(9000) });
    }
}
