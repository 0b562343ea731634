use alloy_primitives::{uint, U256};

/// Chain id of Ethereum mainnet.
pub const MAINNET_CHAIN_ID: u64 = 1;

/// Order of the secp256k1 curve.
pub const SECP256K1N: U256 =
    uint!(0xfffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141_U256);

/// Half of [`SECP256K1N`].
///
/// EIP-2: signatures with `s` above this value are rejected from Homestead on.
pub const SECP256K1N_HALF: U256 =
    uint!(0x7fffffffffffffffffffffffffffffff5d576e7357a4501ddfe92f46681b20a0_U256);
