//! Core types describing a currency's address format.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::AddressError;

/// Network label for mainnet markers.
pub const NETWORK_MAIN: &str = "main";

/// Network label for testnet markers.
pub const NETWORK_TEST: &str = "test";

/// Network label for currencies whose addresses are not network specific.
pub const NETWORK_BOTH: &str = "both";

/// Network reported by bech32 addresses whose HRP matches no network.
pub const NETWORK_UNKNOWN: &str = "unknown";

/// Network reported when no network could be determined.
pub const NETWORK_UNDETERMINED: &str = "";

/// Symbol alphabet used by Ripple's Base58 addresses.
pub const RIPPLE_ALPHABET: &str = "rpshnaf39wBUDNEGHJKLM4PQRST7VWXYZ2bcdeCg65jkm8oFqi1tuvAxyz";

/// Tag selecting the decoder for a currency.
///
/// Unrecognised tags are kept as [`EncodingFamily::Custom`] so third-party
/// decoders can be registered under new names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EncodingFamily {
    /// Bitcoin-style Base58 with a double SHA-256 checksum.
    Base58Check,
    /// Hex addresses with optional EIP-55 mixed-case checksum.
    Ethereum,
    /// SegWit bech32 addresses.
    SegWit,
    /// A family provided by a caller-registered decoder.
    Custom(String),
}

impl EncodingFamily {
    /// The tag as written in currency tables.
    pub fn as_str(&self) -> &str {
        match self {
            EncodingFamily::Base58Check => "Base58Check",
            EncodingFamily::Ethereum => "Ethereum",
            EncodingFamily::SegWit => "SegWitCheck",
            EncodingFamily::Custom(tag) => tag,
        }
    }

    /// Create a custom family tag.
    pub fn custom(tag: impl Into<String>) -> Self {
        Self::from(tag.into())
    }
}

impl From<String> for EncodingFamily {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "Base58Check" => EncodingFamily::Base58Check,
            "Ethereum" => EncodingFamily::Ethereum,
            "SegWitCheck" => EncodingFamily::SegWit,
            _ => EncodingFamily::Custom(tag),
        }
    }
}

impl From<&str> for EncodingFamily {
    fn from(tag: &str) -> Self {
        Self::from(tag.to_string())
    }
}

impl From<EncodingFamily> for String {
    fn from(family: EncodingFamily) -> Self {
        family.as_str().to_string()
    }
}

impl fmt::Display for EncodingFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A marker identifying which network an address belongs to.
///
/// Serialized untagged: numbers are version bytes, strings are HRPs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VersionMarker {
    /// Leading version byte of a Base58Check payload.
    Byte(u8),
    /// Human-readable part of a bech32 address.
    Hrp(String),
}

impl From<u8> for VersionMarker {
    fn from(byte: u8) -> Self {
        VersionMarker::Byte(byte)
    }
}

impl From<&str> for VersionMarker {
    fn from(hrp: &str) -> Self {
        VersionMarker::Hrp(hrp.to_string())
    }
}

/// A network label and the markers that select it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Network {
    /// Label reported in validation results, e.g. `"main"`.
    pub label: String,
    /// Markers belonging to this network.
    pub markers: Vec<VersionMarker>,
}

impl Network {
    /// Create a network from a label and its markers.
    pub fn new<M: Into<VersionMarker>>(
        label: impl Into<String>,
        markers: impl IntoIterator<Item = M>,
    ) -> Self {
        Self {
            label: label.into(),
            markers: markers.into_iter().map(Into::into).collect(),
        }
    }

    /// Check if this network lists the given version byte.
    pub fn has_version(&self, byte: u8) -> bool {
        self.markers.contains(&VersionMarker::Byte(byte))
    }

    /// Check if this network lists the given HRP.
    pub fn has_hrp(&self, hrp: &str) -> bool {
        self.markers
            .iter()
            .any(|marker| matches!(marker, VersionMarker::Hrp(h) if h == hrp))
    }
}

/// Everything needed to validate addresses of one currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyDefinition {
    /// Unique human-readable name, e.g. `"bitcoin"`.
    pub name: String,
    /// Unique short code, e.g. `"btc"`.
    pub ticker: String,
    /// Tag of the decoder used for this currency.
    pub encoding_family: EncodingFamily,
    /// Networks in lookup order.
    #[serde(default)]
    pub networks: Vec<Network>,
    /// Custom Base58 alphabet, for Base58 currencies that need one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alphabet: Option<String>,
}

impl CurrencyDefinition {
    /// Create a definition with no networks.
    pub fn new(
        name: impl Into<String>,
        ticker: impl Into<String>,
        encoding_family: impl Into<EncodingFamily>,
    ) -> Self {
        Self {
            name: name.into(),
            ticker: ticker.into(),
            encoding_family: encoding_family.into(),
            networks: Vec::new(),
            alphabet: None,
        }
    }

    /// Append a network.
    pub fn with_network<M: Into<VersionMarker>>(
        mut self,
        label: impl Into<String>,
        markers: impl IntoIterator<Item = M>,
    ) -> Self {
        self.networks.push(Network::new(label, markers));
        self
    }

    /// Use a custom Base58 alphabet.
    pub fn with_alphabet(mut self, alphabet: impl Into<String>) -> Self {
        self.alphabet = Some(alphabet.into());
        self
    }

    /// Check if `key` is this currency's name or ticker.
    pub fn matches(&self, key: &str) -> bool {
        self.name == key || self.ticker == key
    }

    /// The Base58 alphabet for this currency.
    pub fn base58_alphabet(&self) -> Result<bs58::Alphabet, AddressError> {
        match self.alphabet {
            Some(ref symbols) => parse_alphabet(symbols).map_err(AddressError::InvalidAlphabet),
            None => Ok(*bs58::Alphabet::BITCOIN),
        }
    }
}

/// Build a Base58 alphabet from 58 distinct ASCII symbols.
pub(crate) fn parse_alphabet(symbols: &str) -> Result<bs58::Alphabet, String> {
    let bytes: &[u8; 58] = symbols
        .as_bytes()
        .try_into()
        .map_err(|_| format!("expected 58 symbols, got {}", symbols.len()))?;

    bs58::Alphabet::new(bytes).map_err(|e| e.to_string())
}
