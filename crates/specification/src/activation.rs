//! Rule resolution for named forks.
//!
//! Every fork is switched on in one of three ways and [`ChainConfig::fork_rules`] has a single
//! dispatch over them:
//!
//! * [`ActivationKind::Block`]: rules are evaluated at the fork block, before the merge.
//! * [`ActivationKind::Merge`]: rules are evaluated at the London block with the merge flag set.
//! * [`ActivationKind::Timestamp`]: as for the merge, at the fork timestamp.
use crate::{ChainConfig, Fork, Rules};
use thiserror::Error;

/// How a fork is switched on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActivationKind {
    /// Activated at a block number.
    Block,
    /// Activated by reaching the terminal total difficulty.
    Merge,
    /// Activated at a block timestamp.
    Timestamp,
}

/// Activation point of a fork as found in a chain configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Activation {
    /// Pre-merge fork switching on at `block`.
    Block(u64),
    /// The merge, evaluated at the last pre-merge fork block.
    Merge {
        /// London block.
        block: u64,
    },
    /// Post-merge fork switching on at `timestamp`.
    Timestamp {
        /// London block.
        block: u64,
        /// Fork time.
        timestamp: u64,
    },
}

/// Errors returned when a rule set can not be derived.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RulesError {
    /// The fork name is not known.
    #[error("unsupported fork {name:?}")]
    UnsupportedFork {
        /// Name that failed to resolve.
        name: String,
    },
    /// The chain configuration has no activation point for the fork.
    #[error("chain config has no activation point for {fork}")]
    MissingActivation {
        /// Fork without activation point.
        fork: Fork,
    },
}

impl Fork {
    /// Returns how the fork is switched on.
    pub const fn activation_kind(self) -> ActivationKind {
        match self {
            Fork::Paris => ActivationKind::Merge,
            Fork::Shanghai | Fork::Cancun | Fork::Prague => ActivationKind::Timestamp,
            _ => ActivationKind::Block,
        }
    }
}

impl ChainConfig {
    /// Returns the activation point of `fork`, or `None` if it is not configured.
    pub fn activation(&self, fork: Fork) -> Option<Activation> {
        match fork.activation_kind() {
            ActivationKind::Block => self.fork_block(fork).map(Activation::Block),
            ActivationKind::Merge => self.london_block.map(|block| Activation::Merge { block }),
            ActivationKind::Timestamp => Some(Activation::Timestamp {
                block: self.london_block?,
                timestamp: self.fork_timestamp(fork)?,
            }),
        }
    }

    /// Derives the rule set of `fork`.
    pub fn fork_rules(&self, fork: Fork) -> Result<Rules, RulesError> {
        let activation = self
            .activation(fork)
            .ok_or(RulesError::MissingActivation { fork })?;
        Ok(match activation {
            Activation::Block(block) => self.rules(block, false, 0),
            Activation::Merge { block } => self.rules(block, true, 0),
            Activation::Timestamp { block, timestamp } => self.rules(block, true, timestamp),
        })
    }
}

/// Resolves the rule set of the fork called `name`.
pub fn resolve_rules(config: &ChainConfig, name: &str) -> Result<Rules, RulesError> {
    let fork = name
        .parse::<Fork>()
        .map_err(|_| RulesError::UnsupportedFork {
            name: name.to_string(),
        })?;
    config.fork_rules(fork)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::frontier("Frontier", Activation::Block(0))]
    #[case::homestead("Homestead", Activation::Block(1_150_000))]
    #[case::eip150("EIP150", Activation::Block(2_463_000))]
    #[case::eip158("EIP158", Activation::Block(2_675_000))]
    #[case::istanbul("Istanbul", Activation::Block(9_069_000))]
    #[case::london("London", Activation::Block(12_965_000))]
    #[case::paris("Paris", Activation::Merge { block: 12_965_000 })]
    #[case::shanghai("Shanghai", Activation::Timestamp { block: 12_965_000, timestamp: 1_681_338_455 })]
    #[case::prague("Prague", Activation::Timestamp { block: 12_965_000, timestamp: 1_746_612_311 })]
    fn mainnet_activation(#[case] name: &str, #[case] expected: Activation) {
        let fork: Fork = name.parse().unwrap();
        assert_eq!(ChainConfig::mainnet().activation(fork), Some(expected));
    }

    #[test]
    fn each_fork_enables_its_own_rules() {
        let config = ChainConfig::mainnet();
        let rules = |name| resolve_rules(&config, name).unwrap();

        let frontier = rules("Frontier");
        assert_eq!(frontier, Rules { chain_id: 1, ..Default::default() });

        assert!(rules("Homestead").is_homestead && !rules("Homestead").is_eip150);
        assert!(rules("EIP158").is_eip155 && rules("EIP158").is_eip158);
        assert!(rules("Istanbul").is_istanbul && !rules("Istanbul").is_berlin);
        assert!(rules("Berlin").is_berlin && !rules("Berlin").is_london);

        let london = rules("London");
        assert!(london.is_london && !london.is_merge);

        let paris = rules("Paris");
        assert!(paris.is_merge && !paris.is_shanghai);

        let shanghai = rules("Shanghai");
        assert!(shanghai.is_shanghai && !shanghai.is_cancun);

        let cancun = rules("Cancun");
        assert!(cancun.is_cancun && !cancun.is_prague);

        let prague = rules("Prague");
        assert!(prague.is_merge && prague.is_shanghai && prague.is_cancun && prague.is_prague);
    }

    #[test]
    fn unknown_fork_name() {
        assert_eq!(
            resolve_rules(&ChainConfig::mainnet(), "Foo"),
            Err(RulesError::UnsupportedFork { name: "Foo".into() })
        );
    }

    #[test]
    fn missing_timestamp_is_an_error() {
        let config = ChainConfig {
            prague_time: None,
            ..ChainConfig::mainnet()
        };
        assert_eq!(
            resolve_rules(&config, "Prague"),
            Err(RulesError::MissingActivation { fork: Fork::Prague })
        );
        // Other forks are unaffected.
        assert!(resolve_rules(&config, "Cancun").unwrap().is_cancun);
    }

    #[test]
    fn missing_london_block_breaks_post_merge_forks() {
        let config = ChainConfig {
            london_block: None,
            ..ChainConfig::mainnet()
        };
        for fork in [Fork::London, Fork::Paris, Fork::Shanghai] {
            assert_eq!(
                config.fork_rules(fork),
                Err(RulesError::MissingActivation { fork })
            );
        }
        assert!(config.fork_rules(Fork::Berlin).is_ok());
    }

    #[test]
    fn activation_kinds() {
        assert_eq!(Fork::London.activation_kind(), ActivationKind::Block);
        assert_eq!(Fork::Paris.activation_kind(), ActivationKind::Merge);
        assert_eq!(Fork::Cancun.activation_kind(), ActivationKind::Timestamp);
    }
}
