//! Command line address validator
//!
//! Checks cryptocurrency addresses against the built-in currency catalog,
//! optionally extended with definitions from `COINADDR_CURRENCIES`.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use coinaddr::AddressValidator;

mod config;
mod error;
mod report;

use config::{CliConfig, OutputFormat};
use error::CliError;

#[derive(Parser, Debug)]
#[command(name = "coinaddr", version, about = "Validate cryptocurrency addresses")]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate one or more addresses for a currency
    Validate {
        /// Currency name or ticker
        currency: String,

        /// Addresses to check
        #[arg(required = true)]
        addresses: Vec<String>,

        /// Explain why an address is invalid
        #[arg(long)]
        explain: bool,
    },
    /// List known currencies
    List,
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Cli::parse()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            log::error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::from(2)
        }
    }
}

/// Returns whether every address checked was valid.
fn run(cli: Cli) -> Result<bool, CliError> {
    let config = CliConfig::from_env()?;
    let validator = build_validator(&config)?;
    let format = if cli.json {
        OutputFormat::Json
    } else {
        config.output
    };

    match cli.command {
        Command::Validate {
            currency,
            addresses,
            explain,
        } => {
            let reports = addresses
                .iter()
                .map(|address| report::build_report(&validator, &currency, address, explain))
                .collect::<Result<Vec<_>, _>>()?;

            println!("{}", report::render_reports(&reports, format)?);
            Ok(reports.iter().all(|report| report.result.valid))
        }
        Command::List => {
            println!("{}", report::render_catalog(&validator, format)?);
            Ok(true)
        }
    }
}

fn build_validator(config: &CliConfig) -> Result<AddressValidator, CliError> {
    let mut validator = AddressValidator::builtin();

    if let Some(ref path) = config.currencies_file {
        let currencies = config::load_currencies(path)?;
        log::info!("Loading {} currencies from {}", currencies.len(), path.display());
        for currency in currencies {
            validator.register_currency(currency)?;
        }
    }

    Ok(validator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_validate() {
        let cli = Cli::parse_from([
            "coinaddr",
            "validate",
            "btc",
            "1BoatSLRHtKNngkdXEeobR76b53LETtpyT",
            "n2nzi7xDTrMVK9stGpbK3BtrpBCJfH7LRQ",
            "--explain",
            "--json",
        ]);

        assert!(cli.json);
        match cli.command {
            Command::Validate {
                currency,
                addresses,
                explain,
            } => {
                assert_eq!(currency, "btc");
                assert_eq!(addresses.len(), 2);
                assert!(explain);
            }
            Command::List => panic!("expected validate"),
        }
    }

    #[test]
    fn test_validate_requires_address() {
        assert!(Cli::try_parse_from(["coinaddr", "validate", "btc"]).is_err());
    }

    #[test]
    fn test_run_validate() {
        let valid = Cli::parse_from(["coinaddr", "validate", "btc", "1BoatSLRHtKNngkdXEeobR76b53LETtpyT"]);
        assert!(run(valid).unwrap());

        let invalid = Cli::parse_from([
            "coinaddr",
            "validate",
            "eth",
            "0x154985aD8A10AFe32bdF9CE08b8b9dcD082Db34d",
            "0x154985ad8A10AFe32bdF9CE08b8b9dcD082Db34d",
        ]);
        assert!(!run(invalid).unwrap());

        let unknown = Cli::parse_from(["coinaddr", "validate", "not-a-coin", "x"]);
        assert!(matches!(run(unknown), Err(CliError::Validation(_))));
    }

    #[test]
    fn test_build_validator_without_file() {
        let validator = build_validator(&CliConfig::default()).unwrap();
        assert_eq!(validator.catalog().len(), 11);
    }
}
