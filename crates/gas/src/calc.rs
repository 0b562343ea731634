use super::constants::*;
use alloy_eip2930::AccessListItem;
use specification::Rules;
use thiserror::Error;

/// Intrinsic gas could not be represented.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GasError {
    /// The requirement does not fit in a `u64`.
    #[error("intrinsic gas overflows u64")]
    Overflow,
}

/// Payload shape the intrinsic gas is computed from.
#[derive(Clone, Copy, Debug, Default)]
pub struct IntrinsicGasInput<'a> {
    /// Call data, or initcode for contract creation.
    pub input: &'a [u8],
    /// Whether the transaction creates a contract.
    pub is_create: bool,
    /// EIP-2930 access list.
    pub access_list: &'a [AccessListItem],
    /// Number of EIP-7702 authorizations.
    pub authorization_count: u64,
}

/// Number of 32 byte words needed to hold `len` bytes.
#[inline]
pub const fn num_words(len: u64) -> u64 {
    len.div_ceil(32)
}

/// Initial gas that is deducted for transaction to be included.
/// Initial gas contains initial stipend gas, gas for access list and input data.
pub fn intrinsic_gas(rules: &Rules, tx: &IntrinsicGasInput<'_>) -> Result<u64, GasError> {
    // base stipend
    let mut gas = if tx.is_create && rules.is_homestead {
        // EIP-2: Homestead Hard-fork Changes
        TRANSACTION_CREATE_HOMESTEAD
    } else {
        TRANSACTION
    };

    let data_len = tx.input.len() as u64;
    let zero_data_len = tx.input.iter().filter(|v| **v == 0).count() as u64;
    let non_zero_data_len = data_len - zero_data_len;

    // EIP-2028: Transaction data gas cost reduction
    let non_zero_cost = if rules.is_istanbul {
        TRANSACTION_NON_ZERO_DATA_ISTANBUL
    } else {
        TRANSACTION_NON_ZERO_DATA_FRONTIER
    };
    gas = add_mul(gas, non_zero_data_len, non_zero_cost)?;
    gas = add_mul(gas, zero_data_len, TRANSACTION_ZERO_DATA)?;

    // EIP-3860: Limit and meter initcode
    if tx.is_create && rules.is_shanghai {
        gas = add_mul(gas, num_words(data_len), INITCODE_WORD_COST)?;
    }

    // Access lists only exist on typed transactions, which are rejected before Berlin.
    let accessed_slots: usize = tx
        .access_list
        .iter()
        .map(|item| item.storage_keys.len())
        .sum();
    gas = add_mul(gas, tx.access_list.len() as u64, ACCESS_LIST_ADDRESS)?;
    gas = add_mul(gas, accessed_slots as u64, ACCESS_LIST_STORAGE_KEY)?;

    // EIP-7702
    gas = add_mul(gas, tx.authorization_count, PER_EMPTY_ACCOUNT_COST)?;

    Ok(gas)
}

#[inline]
fn add_mul(gas: u64, count: u64, cost: u64) -> Result<u64, GasError> {
    count
        .checked_mul(cost)
        .and_then(|extra| gas.checked_add(extra))
        .ok_or(GasError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use primitives::{Address, B256};
    use rstest::rstest;
    use specification::{resolve_rules, ChainConfig};

    fn rules(fork: &str) -> Rules {
        resolve_rules(&ChainConfig::mainnet(), fork).unwrap()
    }

    #[rstest]
    #[case::frontier_transfer("Frontier", &[], false, 21000)]
    #[case::frontier_create("Frontier", &[], true, 21000)]
    #[case::homestead_create("Homestead", &[], true, 53000)]
    #[case::frontier_data("Frontier", &[0, 1, 0, 2], false, 21000 + 2 * 4 + 2 * 68)]
    #[case::istanbul_data("Istanbul", &[0, 1, 0, 2], false, 21000 + 2 * 4 + 2 * 16)]
    // 33 bytes are two initcode words.
    #[case::shanghai_initcode("Shanghai", &[1; 33], true, 53000 + 33 * 16 + 2 * 2)]
    #[case::paris_no_initcode_cost("Paris", &[1; 33], true, 53000 + 33 * 16)]
    fn payload_costs(
        #[case] fork: &str,
        #[case] input: &[u8],
        #[case] is_create: bool,
        #[case] expected: u64,
    ) {
        let tx = IntrinsicGasInput {
            input,
            is_create,
            ..Default::default()
        };
        assert_eq!(intrinsic_gas(&rules(fork), &tx), Ok(expected));
    }

    #[test]
    fn access_and_authorization_lists() {
        let access_list = [
            AccessListItem {
                address: Address::ZERO,
                storage_keys: vec![B256::ZERO, B256::with_last_byte(1)],
            },
            AccessListItem {
                address: Address::with_last_byte(1),
                storage_keys: vec![],
            },
        ];
        let tx = IntrinsicGasInput {
            access_list: &access_list,
            authorization_count: 3,
            ..Default::default()
        };
        assert_eq!(
            intrinsic_gas(&rules("Prague"), &tx),
            Ok(21000 + 2 * 2400 + 2 * 1900 + 3 * 25000)
        );
    }

    #[test]
    fn overflow_is_reported() {
        let tx = IntrinsicGasInput {
            authorization_count: u64::MAX / 2,
            ..Default::default()
        };
        assert_eq!(intrinsic_gas(&rules("Prague"), &tx), Err(GasError::Overflow));
    }
}
