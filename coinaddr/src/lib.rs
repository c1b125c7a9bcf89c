//! Cryptocurrency Address Validation
//!
//! This crate checks whether an address is well formed for a named
//! currency and reports which network it belongs to. It is a cheap
//! pre-flight check for wallets, exchanges and auditing tools; it never
//! generates addresses or touches the network.
//!
//! # Overview
//!
//! Three address encodings are supported out of the box:
//! - **Base58Check**: Bitcoin-style version byte, payload and double SHA-256 checksum
//! - **Ethereum**: 40 hex digits with optional EIP-55 mixed-case checksum
//! - **SegWit**: bech32 strings with a network HRP such as `bc` or `tb`
//!
//! Each [`CurrencyDefinition`] names its [`EncodingFamily`]; the
//! [`AddressValidator`] looks the currency up in its [`CurrencyCatalog`],
//! picks the matching [`Decoder`] from its [`DecoderRegistry`] and
//! assembles a [`ValidationResult`].
//!
//! Malformed addresses are never errors: they come back with
//! `valid = false`. Only mistakes in the call itself (unknown currency,
//! non-ASCII text, duplicate registration) are reported as
//! [`ValidationError`].
//!
//! # Example
//!
//! ```rust
//! use coinaddr::{CurrencyDefinition, EncodingFamily};
//!
//! let result = coinaddr::validate("bitcoin", b"1BoatSLRHtKNngkdXEeobR76b53LETtpyT").unwrap();
//! assert!(result.valid);
//! assert_eq!(result.ticker, "btc");
//! assert_eq!(result.network, "main");
//!
//! // Unknown currencies are a usage error, not an invalid address.
//! assert!(coinaddr::validate("not-a-coin", b"x").is_err());
//!
//! // New Base58Check currencies only need their version bytes.
//! coinaddr::register_currency(
//!     CurrencyDefinition::new("testcoin", "ttc", EncodingFamily::Base58Check)
//!         .with_network("main", [0x00u8, 0x05])
//!         .with_network("test", [0x6fu8, 0xc4]),
//! )
//! .unwrap();
//! assert!(coinaddr::validate("ttc", "1BoatSLRHtKNngkdXEeobR76b53LETtpyT").unwrap().valid);
//! ```

mod base58check;
mod currency;
mod decoder;
mod error;
mod ethereum;
mod hash;
mod segwit;
mod shared;
mod types;
mod validation;

pub use base58check::Base58CheckDecoder;
pub use currency::{builtin_currencies, CurrencyCatalog};
pub use decoder::{Decoder, DecoderRegistry};
pub use error::{AddressError, ValidationError};
pub use ethereum::EthereumDecoder;
pub use segwit::SegWitDecoder;
pub use shared::{register_currency, register_decoder, validate, with_default};
pub use types::{
    CurrencyDefinition, EncodingFamily, Network, VersionMarker, NETWORK_BOTH, NETWORK_MAIN,
    NETWORK_TEST, NETWORK_UNDETERMINED, NETWORK_UNKNOWN, RIPPLE_ALPHABET,
};
pub use validation::{AddressInput, AddressValidator, ValidationRequest, ValidationResult};
