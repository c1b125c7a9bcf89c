//! SegWit address validation using bech32 (BIP-173).

use bech32::primitives::decode::UncheckedHrpstring;
use bech32::Bech32;

use crate::{AddressError, Decoder, ValidationRequest, NETWORK_UNKNOWN};

/// Longest accepted bech32 string.
pub const MAX_ADDRESS_LEN: usize = 90;

/// Shortest possible bech32 string: 1 char HRP, separator, 6 char checksum.
const MIN_ADDRESS_LEN: usize = 8;

/// Symbols in a bech32 checksum.
const CHECKSUM_SYMBOLS: usize = 6;

/// Decoder for bech32 SegWit addresses.
#[derive(Debug, Clone, Copy, Default)]
pub struct SegWitDecoder;

impl SegWitDecoder {
    /// Decode an address and verify its checksum, returning the lowercase HRP.
    pub fn decode(address: &str) -> Result<String, AddressError> {
        if !(MIN_ADDRESS_LEN..=MAX_ADDRESS_LEN).contains(&address.len()) {
            return Err(AddressError::InvalidLength {
                min: MIN_ADDRESS_LEN,
                max: MAX_ADDRESS_LEN + 1,
                actual: address.len(),
            });
        }

        if address.bytes().any(|b| b.is_ascii_uppercase())
            && address.bytes().any(|b| b.is_ascii_lowercase())
        {
            return Err(AddressError::Bech32("mixed case".to_string()));
        }

        let unchecked =
            UncheckedHrpstring::new(address).map_err(|e| AddressError::Bech32(e.to_string()))?;
        unchecked
            .validate_checksum::<Bech32>()
            .map_err(|e| AddressError::Bech32(e.to_string()))?;

        if unchecked.data_part_ascii().len() <= CHECKSUM_SYMBOLS {
            return Err(AddressError::EmptyData);
        }

        Ok(unchecked.hrp().to_lowercase())
    }
}

impl Decoder for SegWitDecoder {
    fn validate(&self, request: &ValidationRequest<'_>) -> bool {
        self.diagnose(request).is_ok()
    }

    fn network(&self, request: &ValidationRequest<'_>) -> String {
        request
            .address_str()
            .ok()
            .and_then(|address| Self::decode(address).ok())
            .and_then(|hrp| request.network_for_hrp(&hrp).map(str::to_string))
            .unwrap_or_else(|| NETWORK_UNKNOWN.to_string())
    }

    fn diagnose(&self, request: &ValidationRequest<'_>) -> Result<(), AddressError> {
        Self::decode(request.address_str()?).map(|_| ())
    }
}
