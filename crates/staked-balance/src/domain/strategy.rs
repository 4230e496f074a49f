//! Scores accounts by the balance they stake across a list of pools.

use {
    crate::{
        domain::{
            batch,
            eth::{Address, Network, Snapshot},
            interface::{self, UnsupportedKind},
            pool::PoolConfig,
            totals::AccountTotals,
        },
        infra::observe,
    },
    alloy::{dyn_abi::DynSolValue, json_abi::Function},
    bigdecimal::BigDecimal,
    ethrpc::{
        Nodes,
        multicall::{self, BatchCallExecuting},
    },
    std::{collections::BTreeMap, sync::Arc},
    thiserror::Error,
};

/// One scoring request.
#[derive(Clone, Debug)]
pub struct Input {
    pub network: Network,
    pub addresses: Vec<Address>,
    pub options: Vec<PoolConfig>,
    pub snapshot: Snapshot,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    UnsupportedKind(#[from] UnsupportedKind),
}

/// Reasons for a pool not contributing to the scores.
#[derive(Debug, Error)]
pub enum PoolError {
    #[error("no node configured for network {0}")]
    NoNode(Network),
    #[error(transparent)]
    Execution(#[from] multicall::Error),
    #[error("result {index} is not a balance: {value:?}")]
    Decoding {
        index: usize,
        value: Option<DynSolValue>,
    },
}

impl PoolError {
    /// Coarse classification used as a log field and metric label.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NoNode(_) => "no_node",
            Self::Execution(err) => err.kind(),
            Self::Decoding { .. } => "decoding",
        }
    }
}

pub struct Strategy {
    nodes: Nodes,
    executor: Arc<dyn BatchCallExecuting>,
}

impl Strategy {
    pub fn new(nodes: Nodes, executor: Arc<dyn BatchCallExecuting>) -> Self {
        Self { nodes, executor }
    }

    /// Computes the combined staked balance of every address over all pools
    /// of the input.
    ///
    /// Pools are read one after the other. A pool whose batched read fails is
    /// skipped and adds nothing to any account. Accounts whose total ends up
    /// strictly below the minimum staked balance of the *first* pool are
    /// omitted from the result. Without any pool there is no minimum and the
    /// result is empty rather than an error.
    pub async fn score(&self, input: &Input) -> Result<BTreeMap<String, f64>, Error> {
        observe::scoring(input);
        let interfaces = input
            .options
            .iter()
            .map(|pool| interface::resolve(&pool.staking_type))
            .collect::<Result<Vec<_>, _>>()?;
        if input.snapshot == Snapshot::Latest && input.options.len() > 1 {
            observe::unpinned_snapshot(input.options.len());
        }

        let mut totals = AccountTotals::default();
        for (pool, interface) in input.options.iter().zip(interfaces) {
            match self.fetch(input, pool, interface).await {
                Ok(balances) => {
                    observe::fetched(pool, balances.len());
                    totals.add_all(&input.addresses, balances);
                }
                Err(err) => observe::fetch_failed(pool, &err),
            }
        }

        if let Some(first) = input.options.first() {
            let threshold = first.min_balance();
            let removed = totals.retain_at_least(&threshold);
            observe::filtered(&threshold, removed);
        }

        let scores = totals.into_scores();
        observe::scored(scores.len());
        Ok(scores)
    }

    /// Reads the staked balance of every input address from one pool.
    async fn fetch(
        &self,
        input: &Input,
        pool: &PoolConfig,
        interface: &Function,
    ) -> Result<Vec<BigDecimal>, PoolError> {
        let node = self
            .nodes
            .get(input.network.as_str())
            .ok_or_else(|| PoolError::NoNode(input.network.clone()))?;
        let calls = batch::build(interface, pool, &input.addresses);
        let results = self
            .executor
            .execute(
                input.network.as_str(),
                node,
                std::slice::from_ref(interface),
                &calls,
                input.snapshot.block_id(),
            )
            .await?;
        if results.len() != calls.len() {
            return Err(multicall::Error::LengthMismatch {
                expected: calls.len(),
                actual: results.len(),
            }
            .into());
        }

        results
            .into_iter()
            .enumerate()
            .map(|(index, outputs)| match outputs.into_iter().next() {
                Some(DynSolValue::Uint(raw, _)) => Ok(number::units::to_decimal(raw, pool.decimals)),
                value => Err(PoolError::Decoding { index, value }),
            })
            .collect()
    }
}
