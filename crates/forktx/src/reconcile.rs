//! Comparison of a validation outcome with the expectation of a fork.
use crate::{ForkCase, ForkErrorKind, TestError, ValidatedTx, ValidationError};
use txtest_types::ExpectedOutcome;

/// Checks `outcome` against `expected` for `case`.
///
/// A failure passes whenever a failure is expected, the exception text is not compared. A
/// success must match hash, sender and intrinsic gas, checked in that order. Forks without an
/// expectation always pass.
pub fn reconcile(
    case: &ForkCase,
    expected: Option<&ExpectedOutcome>,
    outcome: Result<ValidatedTx, ValidationError>,
) -> Result<(), TestError> {
    let Some(expected) = expected else {
        return Ok(());
    };
    compare(expected, outcome).map_err(|kind| TestError::Fork {
        fork: case.name,
        kind,
    })
}

fn compare(
    expected: &ExpectedOutcome,
    outcome: Result<ValidatedTx, ValidationError>,
) -> Result<(), ForkErrorKind> {
    let tx = match outcome {
        Err(err) if expected.hash.is_some() => return Err(ForkErrorKind::UnexpectedError(err)),
        Err(_) => return Ok(()),
        Ok(tx) => tx,
    };

    if let Some(exception) = &expected.exception {
        return Err(ForkErrorKind::ExpectedErrorGotNone {
            expected: exception.clone(),
        });
    }
    if let Some(hash) = expected.hash {
        if hash != tx.hash {
            return Err(ForkErrorKind::HashMismatch {
                got: tx.hash,
                expected: hash,
            });
        }
    }
    if let Some(sender) = expected.sender {
        if sender != tx.sender {
            return Err(ForkErrorKind::SenderMismatch {
                got: tx.sender,
                expected: sender,
            });
        }
    }
    if expected.intrinsic_gas != tx.intrinsic_gas {
        return Err(ForkErrorKind::IntrinsicGasMismatch {
            got: tx.intrinsic_gas,
            expected: expected.intrinsic_gas,
        });
    }
    Ok(())
}
