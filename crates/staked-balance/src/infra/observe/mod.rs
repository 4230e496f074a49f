//! Logging and metrics hooks for the scoring workflow.

use {
    crate::domain::{PoolConfig, PoolError, strategy::Input},
    bigdecimal::BigDecimal,
};

pub mod metrics;

pub fn scoring(input: &Input) {
    tracing::info!(
        network = %input.network,
        snapshot = %input.snapshot,
        accounts = input.addresses.len(),
        pools = input.options.len(),
        "scoring accounts",
    );
}

/// Reads against the latest block are not pinned: each pool may be read at a
/// different, later block than the one before it.
pub fn unpinned_snapshot(pools: usize) {
    tracing::debug!(
        pools,
        "reading pools at the latest block, totals may mix chain states"
    );
}

pub fn fetched(pool: &PoolConfig, balances: usize) {
    tracing::debug!(
        pool = %pool.staking_pool_contract_address,
        kind = %pool.staking_type,
        balances,
        "fetched staked balances",
    );
    metrics::get()
        .pool_fetches
        .with_label_values(&["success"])
        .inc();
}

pub fn fetch_failed(pool: &PoolConfig, err: &PoolError) {
    tracing::warn!(
        pool = %pool.staking_pool_contract_address,
        kind = %pool.staking_type,
        reason = err.kind(),
        ?err,
        "failed to fetch staked balances, pool is skipped",
    );
    metrics::get()
        .pool_fetches
        .with_label_values(&[err.kind()])
        .inc();
}

pub fn filtered(threshold: &BigDecimal, removed: usize) {
    tracing::debug!(%threshold, removed, "dropped accounts below minimum staked balance");
    metrics::get().below_threshold.inc_by(u64::try_from(removed).unwrap_or(u64::MAX));
}

pub fn scored(accounts: usize) {
    tracing::info!(accounts, "computed scores");
    metrics::get()
        .scored_accounts
        .set(i64::try_from(accounts).unwrap_or(i64::MAX));
}
