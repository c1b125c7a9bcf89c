//! Decoder trait and the table mapping encoding families to decoders.

use std::collections::HashMap;
use std::sync::Arc;

use crate::base58check::Base58CheckDecoder;
use crate::ethereum::EthereumDecoder;
use crate::segwit::SegWitDecoder;
use crate::{AddressError, EncodingFamily, ValidationError, ValidationRequest};

/// Address checks for one encoding family.
///
/// Implementations must not panic on arbitrary input: every decode
/// failure is reported as `false` from [`Decoder::validate`].
pub trait Decoder: Send + Sync {
    /// Check the address format and checksum.
    fn validate(&self, request: &ValidationRequest<'_>) -> bool;

    /// Network label for the address.
    ///
    /// What an undetermined network looks like is up to the family:
    /// Base58Check reports `""`, SegWit reports `"unknown"`.
    fn network(&self, request: &ValidationRequest<'_>) -> String;

    /// Explain why [`Decoder::validate`] rejects an address.
    fn diagnose(&self, request: &ValidationRequest<'_>) -> Result<(), AddressError> {
        if self.validate(request) {
            Ok(())
        } else {
            Err(AddressError::Rejected)
        }
    }
}

/// Registered decoders keyed by encoding family.
///
/// Decoders are shared, so cloning a registry is cheap.
#[derive(Clone, Default)]
pub struct DecoderRegistry {
    decoders: HashMap<EncodingFamily, Arc<dyn Decoder>>,
}

impl DecoderRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the Base58Check, Ethereum and SegWit decoders.
    pub fn builtin() -> Self {
        let mut decoders: HashMap<EncodingFamily, Arc<dyn Decoder>> = HashMap::new();
        decoders.insert(EncodingFamily::Base58Check, Arc::new(Base58CheckDecoder));
        decoders.insert(EncodingFamily::Ethereum, Arc::new(EthereumDecoder));
        decoders.insert(EncodingFamily::SegWit, Arc::new(SegWitDecoder));
        Self { decoders }
    }

    /// Register a decoder for a new encoding family.
    pub fn register(
        &mut self,
        family: EncodingFamily,
        decoder: impl Decoder + 'static,
    ) -> Result<(), ValidationError> {
        if self.decoders.contains_key(&family) {
            return Err(ValidationError::DuplicateDecoder(family.to_string()));
        }

        log::info!("Registered decoder for {}", family);
        self.decoders.insert(family, Arc::new(decoder));
        Ok(())
    }

    /// Get the decoder for an encoding family.
    pub fn resolve(&self, family: &EncodingFamily) -> Result<&dyn Decoder, ValidationError> {
        self.decoders
            .get(family)
            .map(|decoder| decoder.as_ref())
            .ok_or_else(|| ValidationError::UnknownDecoder(family.to_string()))
    }

    /// Check if a decoder is registered for an encoding family.
    pub fn contains(&self, family: &EncodingFamily) -> bool {
        self.decoders.contains_key(family)
    }

    /// Registered encoding families, in no particular order.
    pub fn tags(&self) -> impl Iterator<Item = &EncodingFamily> {
        self.decoders.keys()
    }
}
