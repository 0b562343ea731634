//! Validation of a raw transaction under one rule set.
use crate::ValidationError;
use gas::{intrinsic_gas, IntrinsicGasInput};
use primitives::{Address, B256};
use specification::Rules;
use transaction::{DecodedTransaction, SignatureScheme};

/// Values derived from a transaction that is valid under a fork.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ValidatedTx {
    /// Recovered sender.
    pub sender: Address,
    /// Transaction hash.
    pub hash: B256,
    /// Intrinsic gas requirement.
    pub intrinsic_gas: u64,
}

/// Decodes `raw`, recovers its sender with `scheme` and checks the gas limit covers the
/// intrinsic gas under `rules`.
///
/// The execution-time calldata floor is not part of this check.
pub fn validate(
    raw: &[u8],
    scheme: SignatureScheme,
    rules: &Rules,
) -> Result<ValidatedTx, ValidationError> {
    let tx = DecodedTransaction::decode(raw)?;
    let sender = scheme.signer(rules.chain_id).recover_sender(&tx)?;

    let required = intrinsic_gas(
        rules,
        &IntrinsicGasInput {
            input: tx.input(),
            is_create: tx.is_create(),
            access_list: tx.access_list(),
            authorization_count: tx.authorization_count(),
        },
    )?;
    let declared = tx.gas_limit();
    if declared < required {
        return Err(ValidationError::InsufficientGas { required, declared });
    }

    Ok(ValidatedTx {
        sender,
        hash: tx.hash(),
        intrinsic_gas: required,
    })
}
