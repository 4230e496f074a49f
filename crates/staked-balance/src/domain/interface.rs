//! Read interfaces of the supported staking pools.
//!
//! Every staking kind exposes exactly one function returning the staked
//! balance of a holder. The function descriptors ship as JSON ABI documents
//! with the crate.

use {
    alloy::json_abi::Function,
    std::{str::FromStr, sync::LazyLock},
    thiserror::Error,
};

static OPEN_STAKING: LazyLock<Function> =
    LazyLock::new(|| descriptor(include_str!("../../abi/open_staking.json")));

static STANDARD_STAKING: LazyLock<Function> =
    LazyLock::new(|| descriptor(include_str!("../../abi/standard_staking.json")));

/// Takes the first function of a bundled JSON ABI document.
fn descriptor(abi: &str) -> Function {
    serde_json::from_str::<Vec<Function>>(abi)
        .ok()
        .and_then(|functions| functions.into_iter().next())
        .expect("bundled staking ABI documents contain a function")
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum StakingKind {
    /// Pools holding stakes of many tokens, queried per token and staker.
    Open,
    /// Single token pools, queried per account.
    Standard,
}

impl StakingKind {
    pub fn interface(self) -> &'static Function {
        match self {
            Self::Open => &*OPEN_STAKING,
            Self::Standard => &*STANDARD_STAKING,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid staking type {0:?}")]
pub struct UnsupportedKind(pub String);

/// Returns the read interface for a pool's declared staking type.
pub fn resolve(staking_type: &str) -> Result<&'static Function, UnsupportedKind> {
    let kind =
        StakingKind::from_str(staking_type).map_err(|_| UnsupportedKind(staking_type.to_owned()))?;
    Ok(kind.interface())
}
