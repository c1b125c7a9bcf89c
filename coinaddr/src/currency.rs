//! Currency catalog and the built-in currency table.

use crate::types::parse_alphabet;
use crate::{
    CurrencyDefinition, EncodingFamily, ValidationError, NETWORK_BOTH, NETWORK_MAIN,
    NETWORK_TEST, RIPPLE_ALPHABET,
};

/// Registered currencies, looked up by name or ticker.
#[derive(Debug, Clone, Default)]
pub struct CurrencyCatalog {
    currencies: Vec<CurrencyDefinition>,
}

impl CurrencyCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog holding [`builtin_currencies`].
    pub fn builtin() -> Self {
        Self {
            currencies: builtin_currencies(),
        }
    }

    /// Add a currency.
    ///
    /// Fails if its name or ticker is already used as a name or ticker,
    /// or if its alphabet override is not a valid Base58 alphabet.
    pub fn register(&mut self, currency: CurrencyDefinition) -> Result<(), ValidationError> {
        if self.contains(&currency.name) {
            return Err(ValidationError::DuplicateCurrency {
                field: "name",
                value: currency.name,
            });
        }

        if self.contains(&currency.ticker) {
            return Err(ValidationError::DuplicateCurrency {
                field: "ticker",
                value: currency.ticker,
            });
        }

        if let Some(ref symbols) = currency.alphabet {
            parse_alphabet(symbols).map_err(|reason| ValidationError::InvalidAlphabet {
                currency: currency.name.clone(),
                reason,
            })?;
        }

        log::info!(
            "Registered currency {} ({}) using {}",
            currency.name,
            currency.ticker,
            currency.encoding_family
        );
        self.currencies.push(currency);
        Ok(())
    }

    /// Find a currency by name or ticker.
    pub fn lookup(&self, key: &str) -> Result<&CurrencyDefinition, ValidationError> {
        self.get(key)
            .ok_or_else(|| ValidationError::UnknownCurrency(key.to_string()))
    }

    /// Find a currency by name or ticker, if registered.
    pub fn get(&self, key: &str) -> Option<&CurrencyDefinition> {
        self.currencies.iter().find(|currency| currency.matches(key))
    }

    /// Check if a name or ticker is registered.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterate currencies in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CurrencyDefinition> {
        self.currencies.iter()
    }

    /// Number of registered currencies.
    pub fn len(&self) -> usize {
        self.currencies.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.currencies.is_empty()
    }
}

/// Currencies known out of the box.
pub fn builtin_currencies() -> Vec<CurrencyDefinition> {
    use EncodingFamily::{Base58Check, Ethereum, SegWit};

    vec![
        CurrencyDefinition::new("bitcoin", "btc", Base58Check)
            .with_network(NETWORK_MAIN, [0x00u8, 0x05])
            .with_network(NETWORK_TEST, [0x6fu8, 0xc4]),
        CurrencyDefinition::new("bitcoin-segwit", "btc-segwit", SegWit)
            .with_network(NETWORK_MAIN, ["bc"])
            .with_network(NETWORK_TEST, ["tb"]),
        CurrencyDefinition::new("bitcoin-cash", "bch", Base58Check)
            .with_network(NETWORK_MAIN, [0x00u8, 0x05])
            .with_network(NETWORK_TEST, [0x6fu8, 0xc4]),
        CurrencyDefinition::new("litecoin", "ltc", Base58Check)
            .with_network(NETWORK_MAIN, [0x30u8, 0x05, 0x32])
            .with_network(NETWORK_TEST, [0x6fu8, 0xc4]),
        CurrencyDefinition::new("dogecoin", "doge", Base58Check)
            .with_network(NETWORK_MAIN, [0x1eu8, 0x16])
            .with_network(NETWORK_TEST, [0x71u8, 0xc4]),
        CurrencyDefinition::new("dashcoin", "dash", Base58Check)
            .with_network(NETWORK_MAIN, [0x4cu8, 0x10])
            .with_network(NETWORK_TEST, [0x8cu8, 0x13]),
        CurrencyDefinition::new("neocoin", "neo", Base58Check)
            .with_network(NETWORK_BOTH, [0x17u8]),
        CurrencyDefinition::new("ripple", "xrp", Base58Check)
            .with_network(NETWORK_BOTH, [0x00u8, 0x05])
            .with_alphabet(RIPPLE_ALPHABET),
        CurrencyDefinition::new("ethereum", "eth", Ethereum),
        CurrencyDefinition::new("ether-zero", "etz", Ethereum),
        CurrencyDefinition::new("ethereum-classic", "etc", Ethereum),
    ]
}
