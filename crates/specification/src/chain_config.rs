use crate::{Fork, Rules};
use primitives::{
    deserializer::{deserialize_hex_or_decimal, deserialize_opt_hex_or_decimal},
    MAINNET_CHAIN_ID,
};
use serde::{Deserialize, Serialize};

/// Fork activation points of a chain.
///
/// The layout mirrors the `config` object of an execution client genesis file. Keys that
/// do not influence the rule set, such as difficulty bomb delays, are ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainConfig {
    /// Chain identifier used for replay protection.
    #[serde(deserialize_with = "deserialize_hex_or_decimal")]
    pub chain_id: u64,
    /// Homestead switch block.
    #[serde(default, deserialize_with = "deserialize_opt_hex_or_decimal")]
    pub homestead_block: Option<u64>,
    /// EIP-150 (Tangerine Whistle) switch block.
    #[serde(default, deserialize_with = "deserialize_opt_hex_or_decimal")]
    pub eip150_block: Option<u64>,
    /// EIP-155 replay protection switch block.
    #[serde(default, deserialize_with = "deserialize_opt_hex_or_decimal")]
    pub eip155_block: Option<u64>,
    /// EIP-158 (Spurious Dragon) switch block.
    #[serde(default, deserialize_with = "deserialize_opt_hex_or_decimal")]
    pub eip158_block: Option<u64>,
    /// Byzantium switch block.
    #[serde(default, deserialize_with = "deserialize_opt_hex_or_decimal")]
    pub byzantium_block: Option<u64>,
    /// Constantinople switch block.
    #[serde(default, deserialize_with = "deserialize_opt_hex_or_decimal")]
    pub constantinople_block: Option<u64>,
    /// Petersburg switch block.
    #[serde(default, deserialize_with = "deserialize_opt_hex_or_decimal")]
    pub petersburg_block: Option<u64>,
    /// Istanbul switch block.
    #[serde(default, deserialize_with = "deserialize_opt_hex_or_decimal")]
    pub istanbul_block: Option<u64>,
    /// Berlin switch block.
    #[serde(default, deserialize_with = "deserialize_opt_hex_or_decimal")]
    pub berlin_block: Option<u64>,
    /// London switch block.
    ///
    /// Post-merge rule sets are evaluated at this block.
    #[serde(default, deserialize_with = "deserialize_opt_hex_or_decimal")]
    pub london_block: Option<u64>,
    /// Shanghai switch time.
    #[serde(default, deserialize_with = "deserialize_opt_hex_or_decimal")]
    pub shanghai_time: Option<u64>,
    /// Cancun switch time.
    #[serde(default, deserialize_with = "deserialize_opt_hex_or_decimal")]
    pub cancun_time: Option<u64>,
    /// Prague switch time.
    #[serde(default, deserialize_with = "deserialize_opt_hex_or_decimal")]
    pub prague_time: Option<u64>,
}

/// Either a bare chain configuration or a genesis file wrapping one.
#[derive(Deserialize)]
#[serde(untagged)]
enum ConfigFile {
    Genesis { config: ChainConfig },
    Bare(ChainConfig),
}

impl ChainConfig {
    /// Ethereum mainnet activation points.
    pub const fn mainnet() -> Self {
        Self {
            chain_id: MAINNET_CHAIN_ID,
            homestead_block: Some(1_150_000),
            eip150_block: Some(2_463_000),
            eip155_block: Some(2_675_000),
            eip158_block: Some(2_675_000),
            byzantium_block: Some(4_370_000),
            constantinople_block: Some(7_280_000),
            petersburg_block: Some(7_280_000),
            istanbul_block: Some(9_069_000),
            berlin_block: Some(12_244_000),
            london_block: Some(12_965_000),
            shanghai_time: Some(1_681_338_455),
            cancun_time: Some(1_710_338_135),
            prague_time: Some(1_746_612_311),
        }
    }

    /// Parses a chain configuration, either bare or as the `config` field of a genesis file.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<ConfigFile>(json).map(|file| match file {
            ConfigFile::Genesis { config } | ConfigFile::Bare(config) => config,
        })
    }

    /// Block at which a block activated fork switches on.
    ///
    /// Returns `None` for forks that are not activated by block number or are not configured.
    pub const fn fork_block(&self, fork: Fork) -> Option<u64> {
        match fork {
            Fork::Frontier => Some(0),
            Fork::Homestead => self.homestead_block,
            Fork::EIP150 => self.eip150_block,
            Fork::EIP158 => self.eip158_block,
            Fork::Byzantium => self.byzantium_block,
            Fork::Constantinople => self.constantinople_block,
            Fork::Istanbul => self.istanbul_block,
            Fork::Berlin => self.berlin_block,
            Fork::London => self.london_block,
            Fork::Paris | Fork::Shanghai | Fork::Cancun | Fork::Prague => None,
        }
    }

    /// Time at which a timestamp activated fork switches on.
    ///
    /// Returns `None` for forks that are not activated by timestamp or are not configured.
    pub const fn fork_timestamp(&self, fork: Fork) -> Option<u64> {
        match fork {
            Fork::Shanghai => self.shanghai_time,
            Fork::Cancun => self.cancun_time,
            Fork::Prague => self.prague_time,
            _ => None,
        }
    }

    /// Derives the rule set in force at the given block, merge status and timestamp.
    ///
    /// Timestamp activated forks only apply after the merge and from London on.
    pub fn rules(&self, block: u64, is_merge: bool, timestamp: u64) -> Rules {
        let is_london = is_block_forked(self.london_block, block);
        let is_post_merge = is_merge && is_london;
        Rules {
            chain_id: self.chain_id,
            is_homestead: is_block_forked(self.homestead_block, block),
            is_eip150: is_block_forked(self.eip150_block, block),
            is_eip155: is_block_forked(self.eip155_block, block),
            is_eip158: is_block_forked(self.eip158_block, block),
            is_byzantium: is_block_forked(self.byzantium_block, block),
            is_constantinople: is_block_forked(self.constantinople_block, block),
            is_petersburg: is_block_forked(self.petersburg_block, block),
            is_istanbul: is_block_forked(self.istanbul_block, block),
            is_berlin: is_block_forked(self.berlin_block, block),
            is_london,
            is_merge,
            is_shanghai: is_post_merge && is_timestamp_forked(self.shanghai_time, timestamp),
            is_cancun: is_post_merge && is_timestamp_forked(self.cancun_time, timestamp),
            is_prague: is_post_merge && is_timestamp_forked(self.prague_time, timestamp),
        }
    }
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self::mainnet()
    }
}

#[inline]
fn is_block_forked(activation: Option<u64>, block: u64) -> bool {
    activation.is_some_and(|at| at <= block)
}

#[inline]
fn is_timestamp_forked(activation: Option<u64>, timestamp: u64) -> bool {
    activation.is_some_and(|at| at <= timestamp)
}
