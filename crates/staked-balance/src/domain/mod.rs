pub mod batch;
pub mod eth;
pub mod interface;
pub mod pool;
pub mod strategy;
pub mod totals;

pub use {
    interface::{StakingKind, UnsupportedKind},
    pool::PoolConfig,
    strategy::{Error, Input, PoolError, Strategy},
    totals::AccountTotals,
};
