use primitives::{deserializer::deserialize_hex_or_decimal, Address, B256};
use serde::{Deserialize, Serialize};

/// Expected result of checking the transaction under one fork.
///
/// Either `sender` and `hash` are set and validation must succeed with exactly these values, or
/// `exception` is set and validation must fail. The exception text is descriptive only.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpectedOutcome {
    /// Recovered sender.
    #[serde(default)]
    pub sender: Option<Address>,
    /// Transaction hash.
    #[serde(default)]
    pub hash: Option<B256>,
    /// Expected failure.
    #[serde(default)]
    pub exception: Option<String>,
    /// Intrinsic gas requirement.
    #[serde(default, deserialize_with = "deserialize_hex_or_decimal")]
    pub intrinsic_gas: u64,
}

impl ExpectedOutcome {
    /// Expects validation to succeed.
    pub fn success(sender: Address, hash: B256, intrinsic_gas: u64) -> Self {
        Self {
            sender: Some(sender),
            hash: Some(hash),
            exception: None,
            intrinsic_gas,
        }
    }

    /// Expects validation to fail.
    pub fn failure(exception: impl Into<String>) -> Self {
        Self {
            exception: Some(exception.into()),
            ..Default::default()
        }
    }

    /// Returns `true` if validation is expected to succeed.
    #[inline]
    pub fn expects_success(&self) -> bool {
        self.hash.is_some()
    }
}
