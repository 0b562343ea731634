/// Rule set in force for one fork.
///
/// Derived from a [`ChainConfig`](crate::ChainConfig) by [`resolve_rules`](crate::resolve_rules)
/// and owned by a single validation pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rules {
    /// Chain identifier that protected signatures must commit to.
    pub chain_id: u64,
    /// EIP-2, EIP-7: Homestead changes, among them more expensive contract creation.
    pub is_homestead: bool,
    /// EIP-150: Gas cost changes for IO-heavy operations.
    pub is_eip150: bool,
    /// EIP-155: Simple replay attack protection.
    pub is_eip155: bool,
    /// EIP-158: State clearing.
    pub is_eip158: bool,
    /// Byzantium.
    pub is_byzantium: bool,
    /// Constantinople.
    pub is_constantinople: bool,
    /// Petersburg.
    pub is_petersburg: bool,
    /// EIP-2028: Transaction data gas cost reduction.
    pub is_istanbul: bool,
    /// EIP-2930: Optional access lists.
    pub is_berlin: bool,
    /// EIP-1559: Fee market change.
    pub is_london: bool,
    /// Proof of stake.
    pub is_merge: bool,
    /// EIP-3860: Limit and meter initcode.
    pub is_shanghai: bool,
    /// EIP-4844: Shard blob transactions.
    pub is_cancun: bool,
    /// EIP-7702: Set EOA account code.
    pub is_prague: bool,
}
