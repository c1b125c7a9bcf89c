//! Base58Check address decoding (Bitcoin and its descendants).
//!
//! # Address Format
//!
//! ```text
//! base58([version:1][payload:var][checksum:4])
//! checksum = sha256(sha256(version || payload))[..4]
//! ```

use crate::hash::{checksum, CHECKSUM_LEN};
use crate::{AddressError, Decoder, ValidationRequest};

/// Shortest accepted encoded address, in characters.
pub const MIN_ADDRESS_LEN: usize = 25;

/// Encoded addresses must be shorter than this many characters.
pub const MAX_ADDRESS_LEN: usize = 35;

/// Decoder for Base58Check addresses.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base58CheckDecoder;

impl Base58CheckDecoder {
    /// Decode and fully verify an address, returning the raw bytes
    /// (version, payload and checksum).
    pub fn decode(request: &ValidationRequest<'_>) -> Result<Vec<u8>, AddressError> {
        let address = request.address();
        if !(MIN_ADDRESS_LEN..MAX_ADDRESS_LEN).contains(&address.len()) {
            return Err(AddressError::InvalidLength {
                min: MIN_ADDRESS_LEN,
                max: MAX_ADDRESS_LEN,
                actual: address.len(),
            });
        }

        let alphabet = request.alphabet()?;
        let bytes = bs58::decode(address)
            .with_alphabet(&alphabet)
            .into_vec()
            .map_err(|e| AddressError::InvalidBase58(e.to_string()))?;

        if bytes.len() <= CHECKSUM_LEN {
            return Err(AddressError::InvalidChecksum);
        }

        let version = bytes[0];
        if !request.accepts_version(version) {
            return Err(AddressError::InvalidVersion(version));
        }

        let (payload, provided_checksum) = bytes.split_at(bytes.len() - CHECKSUM_LEN);
        if provided_checksum != checksum(payload) {
            return Err(AddressError::InvalidChecksum);
        }

        let reencoded = bs58::encode(&bytes).with_alphabet(&alphabet).into_string();
        if reencoded.as_bytes() != address {
            return Err(AddressError::NonCanonical);
        }

        Ok(bytes)
    }

    /// Read the version byte without verifying the rest of the address.
    fn version_byte(request: &ValidationRequest<'_>) -> Option<u8> {
        let alphabet = request.alphabet().ok()?;
        let bytes = bs58::decode(request.address())
            .with_alphabet(&alphabet)
            .into_vec()
            .ok()?;
        bytes.first().copied()
    }
}

impl Decoder for Base58CheckDecoder {
    fn validate(&self, request: &ValidationRequest<'_>) -> bool {
        self.diagnose(request).is_ok()
    }

    fn network(&self, request: &ValidationRequest<'_>) -> String {
        Self::version_byte(request)
            .and_then(|version| request.network_for_version(version))
            .map(str::to_string)
            .unwrap_or_default()
    }

    fn diagnose(&self, request: &ValidationRequest<'_>) -> Result<(), AddressError> {
        Self::decode(request).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CurrencyDefinition, EncodingFamily, RIPPLE_ALPHABET};

    fn bitcoin() -> CurrencyDefinition {
        CurrencyDefinition::new("bitcoin", "btc", EncodingFamily::Base58Check)
            .with_network("main", [0x00u8, 0x05])
            .with_network("test", [0x6fu8, 0xc4])
    }

    fn ripple() -> CurrencyDefinition {
        CurrencyDefinition::new("ripple", "xrp", EncodingFamily::Base58Check)
            .with_network("both", [0x00u8, 0x05])
            .with_alphabet(RIPPLE_ALPHABET)
    }

    fn check(currency: &CurrencyDefinition, address: &str) -> Result<Vec<u8>, AddressError> {
        Base58CheckDecoder::decode(&ValidationRequest::new(currency, address))
    }

    /// Base58Check-encode a version byte and payload.
    fn encode_check(version: u8, payload: &[u8]) -> String {
        let mut bytes = vec![version];
        bytes.extend_from_slice(payload);
        let sum = checksum(&bytes);
        bytes.extend_from_slice(&sum);
        bs58::encode(&bytes).into_string()
    }

    #[test]
    fn test_valid_addresses() {
        let currency = bitcoin();
        for (address, network) in [
            ("1BoatSLRHtKNngkdXEeobR76b53LETtpyT", "main"),
            ("3QJmV3qfvL9SuYo34YihAf3sRCW3qSinyC", "main"),
            ("n2nzi7xDTrMVK9stGpbK3BtrpBCJfH7LRQ", "test"),
        ] {
            let request = ValidationRequest::new(&currency, address);
            assert!(Base58CheckDecoder.validate(&request), "{address}");
            assert_eq!(Base58CheckDecoder.network(&request), network);
        }
    }

    #[test]
    fn test_decode_roundtrip() {
        let currency = bitcoin();
        let address = "1BoatSLRHtKNngkdXEeobR76b53LETtpyT";

        let bytes = check(&currency, address).unwrap();
        assert_eq!(bytes.len(), 25);
        assert_eq!(bytes[0], 0x00);
        assert_eq!(bs58::encode(&bytes).into_string(), address);
    }

    #[test]
    fn test_generated_address() {
        let currency = bitcoin();
        let address = encode_check(0x6f, &[0x42; 20]);

        assert!(check(&currency, &address).is_ok());
        assert_eq!(
            Base58CheckDecoder.network(&ValidationRequest::new(&currency, address.as_str())),
            "test"
        );
    }

    #[test]
    fn test_corrupted_checksum() {
        let currency = bitcoin();
        let bytes = check(&currency, "1BoatSLRHtKNngkdXEeobR76b53LETtpyT").unwrap();

        for index in bytes.len() - CHECKSUM_LEN..bytes.len() {
            let mut corrupted = bytes.clone();
            corrupted[index] ^= 0x01;
            let address = bs58::encode(&corrupted).into_string();

            // Still decodes structurally, but the checksum no longer matches.
            assert!(bs58::decode(&address).into_vec().is_ok());
            assert_eq!(check(&currency, &address), Err(AddressError::InvalidChecksum));
        }
    }

    #[test]
    fn test_length_band() {
        let currency = bitcoin();

        let too_short = "1BoatSLRHtKNngkdXEeobR7";
        assert!(matches!(
            check(&currency, too_short),
            Err(AddressError::InvalidLength { actual: 23, .. })
        ));

        let too_long = "1BoatSLRHtKNngkdXEeobR76b53LETtpyT1";
        assert!(matches!(
            check(&currency, too_long),
            Err(AddressError::InvalidLength { actual: 35, .. })
        ));

        assert!(matches!(check(&currency, ""), Err(AddressError::InvalidLength { .. })));
    }

    #[test]
    fn test_invalid_symbol() {
        let currency = bitcoin();
        // '0' is not part of the Bitcoin alphabet.
        let result = check(&currency, "1BoatSLRHtKNngkdXEeobR76b53LETtpy0");
        assert!(matches!(result, Err(AddressError::InvalidBase58(_))));
    }

    #[test]
    fn test_unknown_version() {
        let currency = bitcoin();
        let address = encode_check(0x30, &[0x11; 20]);
        assert_eq!(check(&currency, &address), Err(AddressError::InvalidVersion(0x30)));

        let request = ValidationRequest::new(&currency, address.as_str());
        assert!(!Base58CheckDecoder.validate(&request));
        assert_eq!(Base58CheckDecoder.network(&request), "");
    }

    #[test]
    fn test_custom_alphabet() {
        let currency = ripple();
        let request = ValidationRequest::new(&currency, "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh");
        assert!(Base58CheckDecoder.validate(&request));
        assert_eq!(Base58CheckDecoder.network(&request), "both");

        // Bitcoin-alphabet addresses do not survive the Ripple alphabet.
        let request = ValidationRequest::new(&currency, "1BoatSLRHtKNngkdXEeobR76b53LETtpyT");
        assert!(!Base58CheckDecoder.validate(&request));
    }

    #[test]
    fn test_broken_alphabet_never_panics() {
        let currency = bitcoin().with_alphabet("not an alphabet");
        let request = ValidationRequest::new(&currency, "1BoatSLRHtKNngkdXEeobR76b53LETtpyT");

        assert!(matches!(
            Base58CheckDecoder.diagnose(&request),
            Err(AddressError::InvalidAlphabet(_))
        ));
        assert_eq!(Base58CheckDecoder.network(&request), "");
    }

    #[test]
    fn test_non_ascii_bytes() {
        let currency = bitcoin();
        let mut address = b"1BoatSLRHtKNngkdXEeobR76b53LETtpy".to_vec();
        address.push(0xff);

        let request = ValidationRequest::new(&currency, address);
        assert!(!Base58CheckDecoder.validate(&request));
        assert_eq!(Base58CheckDecoder.network(&request), "");
    }
}
