//! Formatting of validation results and currency listings.

use coinaddr::{
    AddressValidator, CurrencyDefinition, EncodingFamily, EthereumDecoder, ValidationResult,
    VersionMarker,
};
use serde::Serialize;

use crate::config::OutputFormat;
use crate::error::CliError;

/// One validated address, ready for printing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    #[serde(flatten)]
    pub result: ValidationResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

/// Validate `address` and, with `explain`, attach the rejection reason.
pub fn build_report(
    validator: &AddressValidator,
    currency: &str,
    address: &str,
    explain: bool,
) -> Result<Report, CliError> {
    let result = validator.validate(currency, address)?;

    let reason = if explain && !result.valid {
        validator
            .diagnose(currency, address)?
            .err()
            .map(|e| e.to_string())
    } else {
        None
    };

    // A mistyped EIP-55 address is most often a casing problem.
    let family = &validator.catalog().lookup(currency)?.encoding_family;
    let suggestion = match reason {
        Some(_) if *family == EncodingFamily::Ethereum => {
            EthereumDecoder::to_checksum_address(address)
        }
        _ => None,
    };

    Ok(Report {
        result,
        reason,
        suggestion,
    })
}

/// Render reports in the requested format.
pub fn render_reports(reports: &[Report], format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(reports)?),
        OutputFormat::Text => Ok(reports
            .iter()
            .map(|report| {
                let result = &report.result;
                let mut line = format!(
                    "{}\t{}\t{}\t{}",
                    result.ticker,
                    String::from_utf8_lossy(&result.address),
                    if result.valid { "valid" } else { "invalid" },
                    if result.network.is_empty() { "-" } else { &result.network },
                );
                if let Some(ref reason) = report.reason {
                    line.push_str(&format!("\t{}", reason));
                }
                if let Some(ref suggestion) = report.suggestion {
                    line.push_str(&format!("\t(did you mean {}?)", suggestion));
                }
                line
            })
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

/// Render the currency catalog in the requested format.
pub fn render_catalog(validator: &AddressValidator, format: OutputFormat) -> Result<String, CliError> {
    let currencies: Vec<&CurrencyDefinition> = validator.catalog().iter().collect();

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&currencies)?),
        OutputFormat::Text => Ok(currencies
            .iter()
            .map(|currency| {
                format!(
                    "{}\t{}\t{}\t{}",
                    currency.name,
                    currency.ticker,
                    currency.encoding_family,
                    format_networks(currency)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

fn format_networks(currency: &CurrencyDefinition) -> String {
    if currency.networks.is_empty() {
        return "-".to_string();
    }

    currency
        .networks
        .iter()
        .map(|network| {
            let markers: Vec<String> = network
                .markers
                .iter()
                .map(|marker| match marker {
                    VersionMarker::Byte(byte) => format!("{:#04x}", byte),
                    VersionMarker::Hrp(hrp) => hrp.clone(),
                })
                .collect();
            format!("{}={}", network.label, markers.join(","))
        })
        .collect::<Vec<_>>()
        .join(" ")
}
