mod domain;
mod infra;
mod run;
#[cfg(test)]
mod tests;

pub use {
    domain::{
        AccountTotals,
        Error,
        Input,
        PoolConfig,
        PoolError,
        StakingKind,
        Strategy,
        UnsupportedKind,
        eth::{self, Network, Snapshot},
    },
    run::start,
};
