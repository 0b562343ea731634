use serde::Deserialize;
use std::collections::BTreeMap;

use crate::TransactionTest;

/// A fixture file: transaction tests keyed by name.
#[derive(Debug, PartialEq, Eq, Deserialize)]
pub struct TestSuite(pub BTreeMap<String, TransactionTest>);
