//! Runs a test record across forks.
use crate::{reconcile, validate, ForkCase, TestError, FORK_CASES};
use specification::{resolve_rules, ChainConfig};
use tracing::{debug, trace};
use txtest_types::{MalformedRecord, TransactionTest};

/// Checks `test` under every fork in [`FORK_CASES`].
pub fn run(test: &TransactionTest, config: &ChainConfig) -> Result<(), TestError> {
    run_cases(test, config, &FORK_CASES)
}

/// Checks `test` under `cases`, in order, stopping at the first failing fork.
///
/// The record is checked for structural errors before any transaction is decoded. Forks without
/// an expectation are skipped and never resolve rules.
pub fn run_cases(
    test: &TransactionTest,
    config: &ChainConfig,
    cases: &[ForkCase],
) -> Result<(), TestError> {
    test.validate()?;
    let txbytes = test
        .txbytes
        .as_ref()
        .ok_or(MalformedRecord::MissingTxBytes)?;

    for case in cases {
        let Some(expected) = test.expected(case.name) else {
            trace!(fork = case.name, "no expectation, skipping");
            continue;
        };

        let rules = resolve_rules(config, case.name)?;
        let outcome = validate(txbytes, case.scheme, &rules);
        debug!(
            fork = case.name,
            scheme = ?case.scheme,
            expects_success = expected.expects_success(),
            ?outcome,
            "validated transaction"
        );
        reconcile(case, Some(expected), outcome)?;
    }
    Ok(())
}
