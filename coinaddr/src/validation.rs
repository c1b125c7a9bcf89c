//! Validation requests, results and the validation pipeline.

use serde::{Serialize, Serializer};

use crate::{
    AddressError, CurrencyCatalog, CurrencyDefinition, Decoder, DecoderRegistry, EncodingFamily,
    ValidationError, VersionMarker,
};

/// An address as supplied by the caller.
///
/// Bytes are used unchanged. Text must be ASCII.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressInput {
    /// Raw address bytes.
    Bytes(Vec<u8>),
    /// Address text.
    Text(String),
}

impl AddressInput {
    /// Normalize to address bytes.
    pub fn into_bytes(self) -> Result<Vec<u8>, ValidationError> {
        match self {
            AddressInput::Bytes(bytes) => Ok(bytes),
            AddressInput::Text(text) if text.is_ascii() => Ok(text.into_bytes()),
            AddressInput::Text(_) => Err(ValidationError::NonAsciiAddress),
        }
    }
}

impl From<Vec<u8>> for AddressInput {
    fn from(bytes: Vec<u8>) -> Self {
        AddressInput::Bytes(bytes)
    }
}

impl From<&[u8]> for AddressInput {
    fn from(bytes: &[u8]) -> Self {
        AddressInput::Bytes(bytes.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for AddressInput {
    fn from(bytes: &[u8; N]) -> Self {
        AddressInput::Bytes(bytes.to_vec())
    }
}

impl From<String> for AddressInput {
    fn from(text: String) -> Self {
        AddressInput::Text(text)
    }
}

impl From<&str> for AddressInput {
    fn from(text: &str) -> Self {
        AddressInput::Text(text.to_string())
    }
}

/// One address to check against one currency.
#[derive(Debug, Clone)]
pub struct ValidationRequest<'a> {
    currency: &'a CurrencyDefinition,
    address: Vec<u8>,
}

impl<'a> ValidationRequest<'a> {
    /// Create a request for a resolved currency.
    pub fn new(currency: &'a CurrencyDefinition, address: impl Into<Vec<u8>>) -> Self {
        Self {
            currency,
            address: address.into(),
        }
    }

    /// The currency being validated against.
    pub fn currency(&self) -> &'a CurrencyDefinition {
        self.currency
    }

    /// The address bytes.
    pub fn address(&self) -> &[u8] {
        &self.address
    }

    /// The address as text.
    pub fn address_str(&self) -> Result<&str, AddressError> {
        std::str::from_utf8(&self.address).map_err(|_| AddressError::NotUtf8)
    }

    /// The Base58 alphabet for this currency.
    pub fn alphabet(&self) -> Result<bs58::Alphabet, AddressError> {
        self.currency.base58_alphabet()
    }

    /// All markers of all networks, in network order.
    pub fn markers(&self) -> impl Iterator<Item = &'a VersionMarker> {
        self.currency
            .networks
            .iter()
            .flat_map(|network| network.markers.iter())
    }

    /// Check if any network lists this version byte.
    pub fn accepts_version(&self, byte: u8) -> bool {
        self.markers()
            .any(|marker| *marker == VersionMarker::Byte(byte))
    }

    /// Label of the first network listing this version byte.
    pub fn network_for_version(&self, byte: u8) -> Option<&'a str> {
        self.currency
            .networks
            .iter()
            .find(|network| network.has_version(byte))
            .map(|network| network.label.as_str())
    }

    /// Label of the first network listing this HRP.
    pub fn network_for_hrp(&self, hrp: &str) -> Option<&'a str> {
        self.currency
            .networks
            .iter()
            .find(|network| network.has_hrp(hrp))
            .map(|network| network.label.as_str())
    }
}

/// Outcome of validating one address.
///
/// Serializes with the address as text; bytes that are not UTF-8 are
/// replaced with U+FFFD.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ValidationResult {
    /// Currency name.
    pub name: String,
    /// Currency ticker.
    pub ticker: String,
    /// The address exactly as validated.
    #[serde(serialize_with = "serialize_address")]
    pub address: Vec<u8>,
    /// Whether the address is well formed for the currency.
    pub valid: bool,
    /// Network label, `""` when undetermined, `"unknown"` for unmatched bech32 HRPs.
    pub network: String,
}

impl ValidationResult {
    /// Same as reading `valid`.
    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

fn serialize_address<S: Serializer>(address: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&String::from_utf8_lossy(address))
}

impl From<ValidationResult> for bool {
    fn from(result: ValidationResult) -> Self {
        result.valid
    }
}

impl From<&ValidationResult> for bool {
    fn from(result: &ValidationResult) -> Self {
        result.valid
    }
}

/// Currency catalog plus decoders: everything needed to validate addresses.
///
/// Register currencies and decoders during startup, then share the
/// validator by reference; validation only needs `&self`.
#[derive(Clone)]
pub struct AddressValidator {
    catalog: CurrencyCatalog,
    decoders: DecoderRegistry,
}

impl AddressValidator {
    /// Create a validator from existing tables.
    pub fn new(catalog: CurrencyCatalog, decoders: DecoderRegistry) -> Self {
        Self { catalog, decoders }
    }

    /// Create a validator with the built-in currencies and decoders.
    pub fn builtin() -> Self {
        Self::new(CurrencyCatalog::builtin(), DecoderRegistry::builtin())
    }

    /// The currency catalog.
    pub fn catalog(&self) -> &CurrencyCatalog {
        &self.catalog
    }

    /// The decoder registry.
    pub fn decoders(&self) -> &DecoderRegistry {
        &self.decoders
    }

    /// Register a currency whose encoding family already has a decoder.
    pub fn register_currency(&mut self, currency: CurrencyDefinition) -> Result<(), ValidationError> {
        if !self.decoders.contains(&currency.encoding_family) {
            return Err(ValidationError::UnknownDecoder(
                currency.encoding_family.to_string(),
            ));
        }
        self.catalog.register(currency)
    }

    /// Register a decoder for a new encoding family.
    pub fn register_decoder(
        &mut self,
        family: EncodingFamily,
        decoder: impl Decoder + 'static,
    ) -> Result<(), ValidationError> {
        self.decoders.register(family, decoder)
    }

    /// Validate an address for the currency with the given name or ticker.
    ///
    /// # Returns
    /// * `Ok(ValidationResult)` - Validation completed (check the `valid` field)
    /// * `Err(ValidationError)` - Unknown currency or unusable input
    ///
    /// # Example
    /// ```rust
    /// use coinaddr::AddressValidator;
    ///
    /// let validator = AddressValidator::builtin();
    /// let result = validator.validate("btc", "1BoatSLRHtKNngkdXEeobR76b53LETtpyT").unwrap();
    /// assert!(result.valid);
    /// assert_eq!(result.network, "main");
    /// ```
    pub fn validate(
        &self,
        currency: &str,
        address: impl Into<AddressInput>,
    ) -> Result<ValidationResult, ValidationError> {
        let (request, decoder) = self.prepare(currency, address)?;

        let valid = decoder.validate(&request);
        let network = decoder.network(&request);
        let definition = request.currency();

        if !valid && log::log_enabled!(log::Level::Debug) {
            if let Err(reason) = decoder.diagnose(&request) {
                log::debug!(
                    "Rejected {} address {:?}: {}",
                    definition.ticker,
                    String::from_utf8_lossy(request.address()),
                    reason
                );
            }
        }

        log::trace!(
            "Validated {} address {:?}: valid={} network={:?}",
            definition.ticker,
            String::from_utf8_lossy(request.address()),
            valid,
            network
        );

        Ok(ValidationResult {
            name: definition.name.clone(),
            ticker: definition.ticker.clone(),
            address: request.address,
            valid,
            network,
        })
    }

    /// Explain why an address is invalid.
    ///
    /// The outer `Result` carries usage errors, the inner one the
    /// decoder's verdict.
    pub fn diagnose(
        &self,
        currency: &str,
        address: impl Into<AddressInput>,
    ) -> Result<Result<(), AddressError>, ValidationError> {
        let (request, decoder) = self.prepare(currency, address)?;
        let verdict = decoder.diagnose(&request);

        if let Err(ref reason) = verdict {
            log::debug!(
                "Rejected {} address {:?}: {}",
                request.currency().ticker,
                String::from_utf8_lossy(request.address()),
                reason
            );
        }
        Ok(verdict)
    }

    fn prepare(
        &self,
        currency: &str,
        address: impl Into<AddressInput>,
    ) -> Result<(ValidationRequest<'_>, &dyn Decoder), ValidationError> {
        let definition = self.catalog.lookup(currency)?;
        let address = address.into().into_bytes()?;
        let decoder = self.decoders.resolve(&definition.encoding_family)?;
        Ok((ValidationRequest::new(definition, address), decoder))
    }
}

impl Default for AddressValidator {
    fn default() -> Self {
        Self::builtin()
    }
}
