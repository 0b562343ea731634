use core::{fmt, str::FromStr};

/// Hardforks a transaction can be checked against, in activation order.
///
/// Names follow the keys used by the Ethereum transaction test fixtures, so
/// Tangerine Whistle is `EIP150` and Spurious Dragon is `EIP158`.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Fork {
    /// Activated at block 0
    Frontier = 0,
    /// Activated at block 1150000
    Homestead,
    /// Tangerine Whistle, activated at block 2463000
    EIP150,
    /// Spurious Dragon, activated at block 2675000
    EIP158,
    /// Activated at block 4370000
    Byzantium,
    /// Activated at block 7280000 together with Petersburg
    Constantinople,
    /// Activated at block 9069000
    Istanbul,
    /// Activated at block 12244000
    Berlin,
    /// Activated at block 12965000
    London,
    /// The Merge, activated at block 15537394 (TTD: 58750000000000000000000)
    Paris,
    /// Activated at timestamp 1681338455
    Shanghai,
    /// Activated at timestamp 1710338135
    Cancun,
    /// Activated at timestamp 1746612311
    Prague,
}

impl Fork {
    /// All forks, oldest first.
    pub const ALL: [Fork; 13] = [
        Fork::Frontier,
        Fork::Homestead,
        Fork::EIP150,
        Fork::EIP158,
        Fork::Byzantium,
        Fork::Constantinople,
        Fork::Istanbul,
        Fork::Berlin,
        Fork::London,
        Fork::Paris,
        Fork::Shanghai,
        Fork::Cancun,
        Fork::Prague,
    ];

    /// Returns `true` if `other` is active whenever `self` is.
    #[inline]
    pub const fn is_enabled_in(self, other: Self) -> bool {
        self as u8 >= other as u8
    }

    /// Fixture name of the fork.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Frontier => name::FRONTIER,
            Self::Homestead => name::HOMESTEAD,
            Self::EIP150 => name::EIP150,
            Self::EIP158 => name::EIP158,
            Self::Byzantium => name::BYZANTIUM,
            Self::Constantinople => name::CONSTANTINOPLE,
            Self::Istanbul => name::ISTANBUL,
            Self::Berlin => name::BERLIN,
            Self::London => name::LONDON,
            Self::Paris => name::PARIS,
            Self::Shanghai => name::SHANGHAI,
            Self::Cancun => name::CANCUN,
            Self::Prague => name::PRAGUE,
        }
    }
}

/// String identifiers for hardforks.
pub mod name {
    /// String identifier for the Frontier hardfork
    pub const FRONTIER: &str = "Frontier";
    /// String identifier for the Homestead hardfork
    pub const HOMESTEAD: &str = "Homestead";
    /// String identifier for the Tangerine Whistle hardfork
    pub const EIP150: &str = "EIP150";
    /// String identifier for the Spurious Dragon hardfork
    pub const EIP158: &str = "EIP158";
    /// String identifier for the Byzantium hardfork
    pub const BYZANTIUM: &str = "Byzantium";
    /// String identifier for the Constantinople hardfork
    pub const CONSTANTINOPLE: &str = "Constantinople";
    /// String identifier for the Istanbul hardfork
    pub const ISTANBUL: &str = "Istanbul";
    /// String identifier for the Berlin hardfork
    pub const BERLIN: &str = "Berlin";
    /// String identifier for the London hardfork
    pub const LONDON: &str = "London";
    /// String identifier for the Paris/Merge hardfork
    pub const PARIS: &str = "Paris";
    /// String identifier for the Shanghai hardfork
    pub const SHANGHAI: &str = "Shanghai";
    /// String identifier for the Cancun hardfork
    pub const CANCUN: &str = "Cancun";
    /// String identifier for the Prague hardfork
    pub const PRAGUE: &str = "Prague";
}

/// Error type for unknown hardfork names. Returned by [`Fork::from_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, thiserror::Error)]
#[error("unknown hardfork")]
pub struct UnknownFork;

impl FromStr for Fork {
    type Err = UnknownFork;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|fork| fork.name() == s)
            .ok_or(UnknownFork)
    }
}

impl fmt::Display for Fork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Fork> for &'static str {
    fn from(fork: Fork) -> Self {
        fork.name()
    }
}
