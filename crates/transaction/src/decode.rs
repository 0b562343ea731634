use alloy_consensus::{Transaction, TxEnvelope, TxType};
use alloy_eip2930::AccessListItem;
use alloy_eips::eip2718::{Decodable2718, Eip2718Error};
use primitives::B256;
use thiserror::Error;

/// Raw bytes are not a valid transaction encoding.
#[derive(Debug, Error)]
#[error("failed to decode transaction: {0}")]
pub struct DecodeError(#[from] pub Eip2718Error);

/// A transaction decoded from its EIP-2718 encoding.
///
/// Legacy transactions are plain RLP lists, typed transactions carry a one byte type prefix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedTransaction {
    envelope: TxEnvelope,
}

impl DecodedTransaction {
    /// Decodes `bytes`, rejecting trailing data.
    pub fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        let envelope = TxEnvelope::decode_2718_exact(bytes)?;
        Ok(Self { envelope })
    }

    /// Returns the decoded envelope.
    #[inline]
    pub fn envelope(&self) -> &TxEnvelope {
        &self.envelope
    }

    /// Returns the transaction type.
    #[inline]
    pub fn tx_type(&self) -> TxType {
        self.envelope.tx_type()
    }

    /// Returns the declared gas limit.
    #[inline]
    pub fn gas_limit(&self) -> u64 {
        self.envelope.gas_limit()
    }

    /// Returns the call data, or the initcode of a contract creation.
    #[inline]
    pub fn input(&self) -> &[u8] {
        self.envelope.input()
    }

    /// Returns `true` if the transaction creates a contract.
    #[inline]
    pub fn is_create(&self) -> bool {
        self.envelope.kind().is_create()
    }

    /// Returns the access list, empty for transactions that can not carry one.
    pub fn access_list(&self) -> &[AccessListItem] {
        self.envelope
            .access_list()
            .map(|list| list.0.as_slice())
            .unwrap_or_default()
    }

    /// Returns the number of EIP-7702 authorizations.
    pub fn authorization_count(&self) -> u64 {
        self.envelope
            .authorization_list()
            .map_or(0, |list| list.len() as u64)
    }

    /// Transaction hash, the keccak256 of the canonical encoding.
    ///
    /// Blob transactions in network form hash without their sidecar.
    pub fn hash(&self) -> B256 {
        *self.envelope.tx_hash()
    }
}
