//! secp256k1 public key recovery, backed by `k256`.
use k256::ecdsa::{Error, RecoveryId, Signature, VerifyingKey};
use primitives::{Address, B256};

/// Recovers the address that signed `msg`.
///
/// `sig` is `r || s` and `recid` the y parity of the signature point.
pub fn ecrecover(sig: &[u8; 64], mut recid: u8, msg: &B256) -> Result<Address, Error> {
    // parse signature
    let mut sig = Signature::from_slice(sig.as_slice())?;

    // normalize signature and flip recovery id if needed.
    if let Some(sig_normalized) = sig.normalize_s() {
        sig = sig_normalized;
        recid ^= 1;
    }
    let recid = RecoveryId::from_byte(recid).ok_or_else(Error::new)?;

    // recover key
    let recovered_key = VerifyingKey::recover_from_prehash(&msg[..], &sig, recid)?;
    let public_key = recovered_key.to_encoded_point(/* compress = */ false);
    Ok(Address::from_raw_public_key(&public_key.as_bytes()[1..]))
}
