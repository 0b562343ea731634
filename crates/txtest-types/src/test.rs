use primitives::Bytes;
use serde::Deserialize;
use std::collections::BTreeMap;

use crate::{ExpectedOutcome, MalformedRecord};

/// Expectations keyed by fork name. `None` leaves the fork unchecked.
pub type ForkExpectations = BTreeMap<String, Option<ExpectedOutcome>>;

/// A raw transaction and its expected outcome per fork.
///
/// Expectations are read from the `result` object used by the public transaction test
/// fixtures. Fork keys placed next to `txbytes` are accepted as well; other top level keys
/// starting with `_`, like `_info`, are metadata and skipped.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawTransactionTest")]
pub struct TransactionTest {
    /// Encoded transaction.
    pub txbytes: Option<Bytes>,
    /// Expected outcome per fork.
    pub result: ForkExpectations,
}

impl TransactionTest {
    /// Creates a record without expectations.
    pub fn new(txbytes: impl Into<Bytes>) -> Self {
        Self {
            txbytes: Some(txbytes.into()),
            result: BTreeMap::new(),
        }
    }

    /// Adds the expectation for `fork`.
    pub fn with_expectation(mut self, fork: impl Into<String>, outcome: ExpectedOutcome) -> Self {
        self.result.insert(fork.into(), Some(outcome));
        self
    }

    /// Returns the expectation for `fork`, if the fork is checked.
    pub fn expected(&self, fork: &str) -> Option<&ExpectedOutcome> {
        self.result.get(fork).and_then(Option::as_ref)
    }

    /// Checks the structural rules of the record.
    pub fn validate(&self) -> Result<(), MalformedRecord> {
        if self.txbytes.is_none() {
            return Err(MalformedRecord::MissingTxBytes);
        }
        for (fork, outcome) in &self.result {
            let Some(outcome) = outcome else {
                continue;
            };
            let fork = fork.clone();
            match (&outcome.hash, &outcome.exception) {
                (None, None) => return Err(MalformedRecord::MissingHashAndException { fork }),
                (Some(_), Some(_)) => return Err(MalformedRecord::HashAndException { fork }),
                (Some(_), None) if outcome.sender.is_none() => {
                    return Err(MalformedRecord::MissingSender { fork })
                }
                _ => {}
            }
        }
        Ok(())
    }
}

#[derive(Deserialize)]
struct RawTransactionTest {
    #[serde(default)]
    txbytes: Option<Bytes>,
    #[serde(default, alias = "Result")]
    result: Option<ForkExpectations>,
    #[serde(flatten)]
    rest: BTreeMap<String, serde_json::Value>,
}

impl TryFrom<RawTransactionTest> for TransactionTest {
    type Error = serde_json::Error;

    fn try_from(raw: RawTransactionTest) -> Result<Self, Self::Error> {
        let mut result = raw.result.unwrap_or_default();
        for (key, value) in raw.rest {
            if key.starts_with('_') {
                continue;
            }
            let outcome = serde_json::from_value(value)?;
            if result.insert(key.clone(), outcome).is_some() {
                return Err(serde::de::Error::custom(format!(
                    "duplicate expectation for {key}"
                )));
            }
        }
        Ok(Self {
            txbytes: raw.txbytes,
            result,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TestSuite;
    use primitives::{address, b256};

    const SUITE: &str = r#"{
        "String10MbData": {
            "_info": { "comment": "", "filling-rpc-server": "evm" },
            "result": {
                "Berlin": {
                    "hash": "0x33469b22e9f636356c4160a87eb19df52b7412e8eac32a4a55ffe88ea8350788",
                    "intrinsicGas": "0x5208",
                    "sender": "0x9d8a62f656a8d1615c1294fd71e9cfb3e4855a4f"
                },
                "Frontier": { "exception": "TransactionException.INVALID_SIGNATURE_VRS", "intrinsicGas": "0x00" },
                "Homestead": null
            },
            "txbytes": "0xf86c098504a817c800825208943535353535353535353535353535353535353535880de0b6b3a76400008025a028ef61340bd939bc2195fe537567866003e1a15d3c71ff63e1590620aa636276a067cbe9d8997f761aecb703304b3800ccf555c9f3dc64214b297fb1966a3b6d83"
        }
    }"#;

    #[test]
    fn parses_fixture_layout() {
        let suite: TestSuite = serde_json::from_str(SUITE).unwrap();
        let test = &suite.0["String10MbData"];
        test.validate().unwrap();

        assert_eq!(test.txbytes.as_ref().map(|b| b.len()), Some(110));
        assert_eq!(test.result.len(), 3);
        assert_eq!(test.expected("Homestead"), None);
        assert_eq!(test.expected("London"), None);
        assert_eq!(
            test.expected("Berlin"),
            Some(&ExpectedOutcome::success(
                address!("9d8a62f656a8d1615c1294fd71e9cfb3e4855a4f"),
                b256!("33469b22e9f636356c4160a87eb19df52b7412e8eac32a4a55ffe88ea8350788"),
                21000,
            ))
        );
        let frontier = test.expected("Frontier").unwrap();
        assert!(!frontier.expects_success());
        assert_eq!(frontier.intrinsic_gas, 0);
    }

    #[test]
    fn parses_flat_layout() {
        let test: TransactionTest = serde_json::from_str(
            r#"{
                "txbytes": "0x01",
                "_info": {},
                "Frontier": { "exception": "bad" },
                "London": { "sender": "9d8a62f656a8d1615c1294fd71e9cfb3e4855a4f", "hash": "33469b22e9f636356c4160a87eb19df52b7412e8eac32a4a55ffe88ea8350788", "intrinsicGas": 21000 },
                "Paris": null
            }"#,
        )
        .unwrap();
        assert_eq!(test.result.len(), 3);
        assert_eq!(test.expected("Frontier"), Some(&ExpectedOutcome::failure("bad")));
        assert_eq!(test.expected("London").unwrap().intrinsic_gas, 21000);
        test.validate().unwrap();
    }

    #[test]
    fn rejects_duplicate_expectations() {
        let res = serde_json::from_str::<TransactionTest>(
            r#"{ "txbytes": "0x01", "result": { "Frontier": null }, "Frontier": null }"#,
        );
        assert!(res.is_err());
    }

    #[test]
    fn malformed_records() {
        assert_eq!(
            TransactionTest::default().validate(),
            Err(MalformedRecord::MissingTxBytes)
        );

        let base = TransactionTest::new(vec![0x01]);
        let missing_both = base
            .clone()
            .with_expectation("Berlin", ExpectedOutcome::default());
        assert_eq!(
            missing_both.validate(),
            Err(MalformedRecord::MissingHashAndException {
                fork: "Berlin".into()
            })
        );

        let missing_sender = base.clone().with_expectation(
            "London",
            ExpectedOutcome {
                hash: Some(Default::default()),
                ..Default::default()
            },
        );
        assert_eq!(
            missing_sender.validate(),
            Err(MalformedRecord::MissingSender {
                fork: "London".into()
            })
        );

        let both = base.with_expectation(
            "Paris",
            ExpectedOutcome {
                exception: Some("x".into()),
                ..ExpectedOutcome::success(Default::default(), Default::default(), 0)
            },
        );
        assert_eq!(
            both.validate(),
            Err(MalformedRecord::HashAndException {
                fork: "Paris".into()
            })
        );
    }
}
