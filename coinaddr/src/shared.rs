//! Process-wide default validator.
//!
//! Starts with the built-in currencies and decoders. Readers take a
//! snapshot of the current validator and release the lock before using
//! it; registrations replace the snapshot copy-on-write. Snapshots taken
//! before a registration keep seeing the old tables.

use std::sync::{Arc, PoisonError, RwLock};

use once_cell::sync::Lazy;

use crate::{
    AddressInput, AddressValidator, CurrencyDefinition, Decoder, EncodingFamily,
    ValidationError, ValidationResult,
};

static DEFAULT_VALIDATOR: Lazy<RwLock<Arc<AddressValidator>>> =
    Lazy::new(|| RwLock::new(Arc::new(AddressValidator::builtin())));

fn snapshot() -> Arc<AddressValidator> {
    let current = DEFAULT_VALIDATOR
        .read()
        .unwrap_or_else(PoisonError::into_inner);
    Arc::clone(&*current)
}

fn update<T>(f: impl FnOnce(&mut AddressValidator) -> T) -> T {
    let mut current = DEFAULT_VALIDATOR
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    f(Arc::make_mut(&mut *current))
}

/// Validate an address with the default validator.
///
/// # Arguments
/// * `currency` - Name or ticker, e.g. `"bitcoin"` or `"btc"`
/// * `address` - Address text (ASCII) or bytes
///
/// # Returns
/// * `Ok(ValidationResult)` - Validation completed (check the `valid` field)
/// * `Err(ValidationError)` - Unknown currency or non-ASCII text
///
/// # Example
/// ```rust
/// let result = coinaddr::validate("btc", b"n2nzi7xDTrMVK9stGpbK3BtrpBCJfH7LRQ").unwrap();
/// assert!(result.valid);
/// assert_eq!(result.network, "test");
/// ```
pub fn validate(
    currency: &str,
    address: impl Into<AddressInput>,
) -> Result<ValidationResult, ValidationError> {
    with_default(|validator| validator.validate(currency, address))
}

/// Add a currency to the default validator.
pub fn register_currency(currency: CurrencyDefinition) -> Result<(), ValidationError> {
    update(|validator| validator.register_currency(currency))
}

/// Add a decoder to the default validator.
pub fn register_decoder(
    family: EncodingFamily,
    decoder: impl Decoder + 'static,
) -> Result<(), ValidationError> {
    update(|validator| validator.register_decoder(family, decoder))
}

/// Run `f` with a snapshot of the default validator.
///
/// No lock is held while `f` runs, so `f` may register currencies or
/// decoders; those registrations are not visible through the snapshot.
///
/// # Example
/// ```rust
/// use coinaddr::{CurrencyDefinition, EncodingFamily};
///
/// let added = coinaddr::with_default(|validator| {
///     coinaddr::register_currency(CurrencyDefinition::new(
///         "docscoin",
///         "dcs",
///         EncodingFamily::Ethereum,
///     ))
///     .unwrap();
///     validator.catalog().contains("dcs")
/// });
/// assert!(!added);
/// assert!(coinaddr::with_default(|validator| validator.catalog().contains("dcs")));
/// ```
pub fn with_default<T>(f: impl FnOnce(&AddressValidator) -> T) -> T {
    f(&snapshot())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValidationRequest;
    use std::sync::mpsc;
    use std::thread;
    use std::time::Duration;

    struct Prefixed;

    impl Decoder for Prefixed {
        fn validate(&self, request: &ValidationRequest<'_>) -> bool {
            request.address().starts_with(b"shr:")
        }

        fn network(&self, _request: &ValidationRequest<'_>) -> String {
            "main".to_string()
        }
    }

    #[test]
    fn test_default_validate() {
        let result = validate("bitcoin", b"1BoatSLRHtKNngkdXEeobR76b53LETtpyT").unwrap();
        assert!(result.valid);
        assert_eq!(result.name, "bitcoin");
        assert_eq!(result.ticker, "btc");
        assert_eq!(result.network, "main");
    }

    #[test]
    fn test_default_extension() {
        register_decoder(EncodingFamily::custom("SharedPrefix"), Prefixed).unwrap();
        register_currency(CurrencyDefinition::new(
            "sharedcoin",
            "shr",
            EncodingFamily::custom("SharedPrefix"),
        ))
        .unwrap();

        assert!(validate("shr", "shr:abc").unwrap().valid);
        assert!(!validate("sharedcoin", "abc").unwrap().valid);

        assert!(matches!(
            register_currency(CurrencyDefinition::new("sharedcoin", "sh2", EncodingFamily::Ethereum)),
            Err(ValidationError::DuplicateCurrency { .. })
        ));
    }

    #[test]
    fn test_concurrent_validation() {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                thread::spawn(|| {
                    (0..50)
                        .map(|_| validate("eth", "0x154985aD8A10AFe32bdF9CE08b8b9dcD082Db34d"))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        for handle in handles {
            for result in handle.join().unwrap() {
                let result = result.unwrap();
                assert!(result.valid);
                assert_eq!(result.network, "both");
            }
        }
    }

    #[test]
    fn test_register_inside_with_default() {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let outcome = with_default(|validator| {
                let registered = register_currency(CurrencyDefinition::new(
                    "nestedcoin",
                    "nst",
                    EncodingFamily::Ethereum,
                ));
                (registered, validator.catalog().contains("nst"))
            });
            let _ = tx.send(outcome);
        });

        let (registered, seen_in_snapshot) = rx
            .recv_timeout(Duration::from_secs(5))
            .expect("registration inside with_default did not return");
        assert_eq!(registered, Ok(()));
        assert!(!seen_in_snapshot);

        let result = validate("nst", "0x154985aD8A10AFe32bdF9CE08b8b9dcD082Db34d").unwrap();
        assert!(result.valid);
        assert_eq!(result.name, "nestedcoin");
    }

    #[test]
    fn test_with_default_catalog() {
        let known = with_default(|validator| validator.catalog().contains("doge"));
        assert!(known);
    }
}
