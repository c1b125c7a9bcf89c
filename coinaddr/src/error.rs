//! Error types for address validation.

use thiserror::Error;

/// Reasons an address fails to decode or verify.
///
/// These never escape [`crate::validate`]: the pipeline folds them into
/// `valid = false`. They are exposed so tooling can explain a rejection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// The encoded address is outside the accepted length band.
    #[error("Invalid address length: expected {min}..{max} characters, got {actual}")]
    InvalidLength {
        min: usize,
        max: usize,
        actual: usize,
    },

    /// The address string is not valid Base58 for the alphabet in use.
    #[error("Invalid Base58 encoding: {0}")]
    InvalidBase58(String),

    /// The decoded version byte is not one of the currency's markers.
    #[error("Invalid version byte: {0:#04x}")]
    InvalidVersion(u8),

    /// The address checksum is invalid.
    #[error("Invalid checksum")]
    InvalidChecksum,

    /// The address decodes but is not the canonical encoding of its bytes.
    #[error("Non-canonical encoding")]
    NonCanonical,

    /// The address is not an optionally prefixed 40 digit hex string.
    #[error("Invalid hex address: {0}")]
    InvalidHex(String),

    /// Mixed-case hex address whose letter casing fails EIP-55.
    #[error("EIP-55 checksum mismatch at position {0}")]
    ChecksumCase(usize),

    /// The address bytes are not valid UTF-8 text.
    #[error("Address is not valid UTF-8")]
    NotUtf8,

    /// bech32 decoding or checksum verification failed.
    #[error("Invalid bech32: {0}")]
    Bech32(String),

    /// The bech32 data part carries nothing beyond the checksum.
    #[error("Empty bech32 data part")]
    EmptyData,

    /// The currency's custom Base58 alphabet cannot be used.
    #[error("Invalid alphabet: {0}")]
    InvalidAlphabet(String),

    /// A decoder rejected the address without giving a reason.
    #[error("Address rejected")]
    Rejected,
}

/// Errors caused by how the library is called rather than by the address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// No registered currency has this name or ticker.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// No decoder is registered for this encoding family.
    #[error("Unknown encoding family: {0}")]
    UnknownDecoder(String),

    /// A currency with this name or ticker is already registered.
    #[error("Duplicate currency {field}: {value}")]
    DuplicateCurrency { field: &'static str, value: String },

    /// A decoder is already registered for this encoding family.
    #[error("Duplicate encoding family: {0}")]
    DuplicateDecoder(String),

    /// The currency's alphabet override is not a usable Base58 alphabet.
    #[error("Invalid alphabet for {currency}: {reason}")]
    InvalidAlphabet { currency: String, reason: String },

    /// Text addresses must be ASCII.
    #[error("Address text is not ASCII")]
    NonAsciiAddress,
}
