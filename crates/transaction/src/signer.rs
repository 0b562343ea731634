use crate::{recover::ecrecover, DecodedTransaction};
use alloy_consensus::{SignableTransaction, Transaction, TxEnvelope, TxType};
use primitives::{Address, Signature, B256, SECP256K1N, SECP256K1N_HALF, U256};
use thiserror::Error;

/// Sender recovery failed.
#[derive(Debug, Error)]
pub enum SignatureError {
    /// The scheme predates the transaction type.
    #[error("transaction type {ty:#04x} not supported")]
    UnsupportedTxType {
        /// EIP-2718 type byte.
        ty: u8,
    },
    /// A replay protected transaction was given to a scheme without replay protection.
    #[error("replay protected transaction for chain {chain_id} not supported")]
    ProtectedTransaction {
        /// Chain id the transaction commits to.
        chain_id: u64,
    },
    /// The transaction commits to another chain.
    #[error("invalid chain id for signer: have {got} want {expected}")]
    ChainIdMismatch {
        /// Chain id of the transaction.
        got: u64,
        /// Chain id of the signer.
        expected: u64,
    },
    /// `r` or `s` out of range, or `s` in the upper half of the curve order after Homestead.
    #[error("invalid transaction v, r, s values")]
    InvalidValues,
    /// No public key recovers from the signature.
    #[error("sender recovery failed: {0}")]
    Recovery(#[from] k256::ecdsa::Error),
}

/// Rules used to recover the sender of a transaction.
///
/// Consecutive forks share a scheme when the signed transaction format did not change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SignatureScheme {
    /// Legacy transactions without replay protection.
    Frontier,
    /// Frontier with EIP-2 low `s` values.
    Homestead,
    /// EIP-155: legacy transactions, optionally bound to a chain id.
    Eip155,
    /// EIP-2930: adds access list transactions.
    Eip2930,
    /// EIP-1559: adds dynamic fee transactions.
    London,
    /// EIP-4844: adds blob transactions.
    Cancun,
    /// EIP-7702: adds set code transactions.
    Prague,
}

impl SignatureScheme {
    /// Returns `true` if transactions of type `ty` can be recovered.
    pub const fn supports(self, ty: TxType) -> bool {
        let oldest = match ty {
            TxType::Legacy => Self::Frontier,
            TxType::Eip2930 => Self::Eip2930,
            TxType::Eip1559 => Self::London,
            TxType::Eip4844 => Self::Cancun,
            TxType::Eip7702 => Self::Prague,
        };
        self as u8 >= oldest as u8
    }

    /// Returns `true` if signatures may commit to a chain id.
    pub const fn is_replay_protected(self) -> bool {
        self as u8 >= Self::Eip155 as u8
    }

    /// Returns `true` if EIP-2 signature malleability rules apply.
    pub const fn is_homestead(self) -> bool {
        !matches!(self, Self::Frontier)
    }

    /// Binds the scheme to a chain id.
    pub const fn signer(self, chain_id: u64) -> Signer {
        Signer {
            scheme: self,
            chain_id,
        }
    }
}

/// A [`SignatureScheme`] bound to a chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Signer {
    scheme: SignatureScheme,
    chain_id: u64,
}

impl Signer {
    /// Returns the scheme.
    pub const fn scheme(&self) -> SignatureScheme {
        self.scheme
    }

    /// Returns the chain id protected signatures must commit to.
    pub const fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Recovers the sender of `tx`.
    ///
    /// Unprotected legacy transactions recover with Homestead rules under every later scheme.
    pub fn recover_sender(&self, tx: &DecodedTransaction) -> Result<Address, SignatureError> {
        let envelope = tx.envelope();
        let ty = envelope.tx_type();
        if !self.scheme.supports(ty) {
            return Err(SignatureError::UnsupportedTxType { ty: ty as u8 });
        }

        match envelope.chain_id() {
            Some(chain_id) if !self.scheme.is_replay_protected() => {
                return Err(SignatureError::ProtectedTransaction { chain_id })
            }
            Some(got) if got != self.chain_id => {
                return Err(SignatureError::ChainIdMismatch {
                    got,
                    expected: self.chain_id,
                })
            }
            _ => {}
        }

        let (signature, signature_hash) = signature_parts(envelope);
        recover_plain(&signature_hash, signature, self.scheme.is_homestead())
    }
}

fn signature_parts(envelope: &TxEnvelope) -> (&Signature, B256) {
    match envelope {
        TxEnvelope::Legacy(tx) => (tx.signature(), tx.tx().signature_hash()),
        TxEnvelope::Eip2930(tx) => (tx.signature(), tx.tx().signature_hash()),
        TxEnvelope::Eip1559(tx) => (tx.signature(), tx.tx().signature_hash()),
        TxEnvelope::Eip4844(tx) => (tx.signature(), tx.tx().signature_hash()),
        TxEnvelope::Eip7702(tx) => (tx.signature(), tx.tx().signature_hash()),
    }
}

/// Validates the signature values and recovers the signer of `hash`.
fn recover_plain(
    hash: &B256,
    signature: &Signature,
    homestead: bool,
) -> Result<Address, SignatureError> {
    let (r, s) = (signature.r(), signature.s());
    if !validate_signature_values(r, s, homestead) {
        return Err(SignatureError::InvalidValues);
    }

    let mut sig = [0u8; 64];
    sig[..32].copy_from_slice(&r.to_be_bytes::<32>());
    sig[32..].copy_from_slice(&s.to_be_bytes::<32>());
    Ok(ecrecover(&sig, signature.v() as u8, hash)?)
}

/// Checks `r` and `s` are in `[1, n)`, and `s <= n / 2` when `homestead` is set.
pub fn validate_signature_values(r: U256, s: U256, homestead: bool) -> bool {
    if r.is_zero() || s.is_zero() {
        return false;
    }
    if homestead && s > SECP256K1N_HALF {
        return false;
    }
    r < SECP256K1N && s < SECP256K1N
}
