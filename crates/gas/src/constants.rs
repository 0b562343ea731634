/// Base cost of every transaction.
pub const TRANSACTION: u64 = 21000;
/// Base cost of a contract creating transaction from Homestead on (EIP-2).
pub const TRANSACTION_CREATE_HOMESTEAD: u64 = 53000;

/// Cost of a zero byte of transaction data.
pub const TRANSACTION_ZERO_DATA: u64 = 4;
/// Cost of a non-zero byte of transaction data.
pub const TRANSACTION_NON_ZERO_DATA_FRONTIER: u64 = 68;
/// EIP-2028: Transaction data gas cost reduction.
pub const TRANSACTION_NON_ZERO_DATA_ISTANBUL: u64 = 16;

/// EIP-2930: Cost per address in the access list.
pub const ACCESS_LIST_ADDRESS: u64 = 2400;
/// EIP-2930: Cost per storage key in the access list.
pub const ACCESS_LIST_STORAGE_KEY: u64 = 1900;

/// EIP-3860: Cost per 32 byte word of initcode.
pub const INITCODE_WORD_COST: u64 = 2;

/// EIP-7702: Cost per authorization, charged as if it created a new account.
pub const PER_EMPTY_ACCOUNT_COST: u64 = 25000;
