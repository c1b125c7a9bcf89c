//! Ethereum address validation with EIP-55 mixed-case checksums.
//!
//! An address is 40 hex digits with an optional `0x` prefix. All-lowercase
//! and all-uppercase addresses carry no checksum and are accepted as is.
//! Mixed-case addresses must uppercase exactly the letters whose nibble in
//! `keccak256(lowercase_body)` is greater than 7.

use crate::hash::keccak256;
use crate::{AddressError, Decoder, ValidationRequest, NETWORK_BOTH};

/// Number of hex digits in an address body.
pub const ADDRESS_HEX_LEN: usize = 40;

/// Decoder for Ethereum-style hex addresses.
#[derive(Debug, Clone, Copy, Default)]
pub struct EthereumDecoder;

impl EthereumDecoder {
    /// Check an address string.
    pub fn check(address: &str) -> Result<(), AddressError> {
        let body = strip_prefix(address);
        if body.len() != ADDRESS_HEX_LEN || !body.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(AddressError::InvalidHex(address.to_string()));
        }

        let has_upper = body.bytes().any(|b| b.is_ascii_uppercase());
        let has_lower = body.bytes().any(|b| b.is_ascii_lowercase());
        if !(has_upper && has_lower) {
            return Ok(());
        }

        let expected = checksum_body(body);
        match body.bytes().zip(expected.bytes()).position(|(got, want)| got != want) {
            Some(index) => Err(AddressError::ChecksumCase(index)),
            None => Ok(()),
        }
    }

    /// Format an address with its EIP-55 checksum casing.
    ///
    /// Returns `None` if the input is not a 40 digit hex address.
    pub fn to_checksum_address(address: &str) -> Option<String> {
        let body = strip_prefix(address);
        if body.len() != ADDRESS_HEX_LEN || !body.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        Some(format!("0x{}", checksum_body(body)))
    }
}

impl Decoder for EthereumDecoder {
    fn validate(&self, request: &ValidationRequest<'_>) -> bool {
        self.diagnose(request).is_ok()
    }

    fn network(&self, _request: &ValidationRequest<'_>) -> String {
        NETWORK_BOTH.to_string()
    }

    fn diagnose(&self, request: &ValidationRequest<'_>) -> Result<(), AddressError> {
        Self::check(request.address_str()?)
    }
}

fn strip_prefix(address: &str) -> &str {
    address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
        .unwrap_or(address)
}

/// Apply EIP-55 casing to a 40 digit hex body.
fn checksum_body(body: &str) -> String {
    let lower = body.to_ascii_lowercase();
    let hash = hex::encode(keccak256(lower.as_bytes()));

    lower
        .chars()
        .zip(hash.bytes())
        .map(|(c, digit)| {
            // Hash digits 8-f mark letters that must be uppercase.
            if matches!(digit, b'8'..=b'9' | b'a'..=b'f') {
                c.to_ascii_uppercase()
            } else {
                c
            }
        })
        .collect()
}
