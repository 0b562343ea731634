//! Forks a transaction test is checked under, oldest first.
use specification::hardfork::name;
use transaction::SignatureScheme;

/// A fork name paired with the signature scheme its transactions are recovered with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ForkCase {
    /// Fork name as used for expectation keys and rule resolution.
    pub name: &'static str,
    /// Sender recovery rules.
    pub scheme: SignatureScheme,
}

impl ForkCase {
    /// Pairs `name` with `scheme`.
    pub const fn new(name: &'static str, scheme: SignatureScheme) -> Self {
        Self { name, scheme }
    }
}

/// Every checked fork, in historical order.
pub const FORK_CASES: [ForkCase; 13] = [
    ForkCase::new(name::FRONTIER, SignatureScheme::Frontier),
    ForkCase::new(name::HOMESTEAD, SignatureScheme::Homestead),
    ForkCase::new(name::EIP150, SignatureScheme::Homestead),
    ForkCase::new(name::EIP158, SignatureScheme::Eip155),
    ForkCase::new(name::BYZANTIUM, SignatureScheme::Eip155),
    ForkCase::new(name::CONSTANTINOPLE, SignatureScheme::Eip155),
    ForkCase::new(name::ISTANBUL, SignatureScheme::Eip155),
    ForkCase::new(name::BERLIN, SignatureScheme::Eip2930),
    ForkCase::new(name::LONDON, SignatureScheme::London),
    ForkCase::new(name::PARIS, SignatureScheme::London),
    ForkCase::new(name::SHANGHAI, SignatureScheme::London),
    ForkCase::new(name::CANCUN, SignatureScheme::Cancun),
    ForkCase::new(name::PRAGUE, SignatureScheme::Prague),
];
