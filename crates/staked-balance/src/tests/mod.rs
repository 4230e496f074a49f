//! Scoring tests against a mocked batch executor.


use {
    crate::domain::{
        PoolConfig,
        Strategy,
        eth::{Address, Network, Snapshot, U256},
        strategy::Input,
    },
    alloy::{dyn_abi::DynSolValue, primitives::address},
    ethrpc::multicall::{Call, Error, MockBatchCallExecuting},
    std::{collections::HashMap, sync::Arc},
};

pub const NETWORK: &str = "1";

pub const STANDARD_POOL: Address = address!("0x1000000000000000000000000000000000000001");
pub const OPEN_POOL: Address = address!("0x1000000000000000000000000000000000000002");
pub const TOKEN: Address = address!("0x2000000000000000000000000000000000000002");

pub const ALICE: Address = address!("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed");
pub const BOB: Address = address!("0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359");

pub fn standard_pool(decimals: u8, min_staked_balance: U256) -> PoolConfig {
    PoolConfig {
        staking_pool_contract_address: STANDARD_POOL,
        staking_type: "standard".to_owned(),
        token_contract_address: TOKEN,
        decimals,
        min_staked_balance,
    }
}

pub fn open_pool(decimals: u8, min_staked_balance: U256) -> PoolConfig {
    PoolConfig {
        staking_pool_contract_address: OPEN_POOL,
        staking_type: "open".to_owned(),
        token_contract_address: TOKEN,
        decimals,
        min_staked_balance,
    }
}

pub fn input(addresses: Vec<Address>, options: Vec<PoolConfig>) -> Input {
    Input {
        network: Network::from(NETWORK),
        addresses,
        options,
        snapshot: Snapshot::Block(17_000_000),
    }
}

/// The account a call reads the stake of. Holders are always the last
/// argument of the bundled interfaces.
fn holder(call: &Call) -> Address {
    match call.args.last() {
        Some(Some(DynSolValue::Address(account))) => *account,
        other => panic!("call without holder argument: {other:?}"),
    }
}

/// Staked balances per `(pool, account)`. Accounts missing from the table
/// have no stake.
pub type Stakes = HashMap<(Address, Address), U256>;

/// An executor answering every call from `stakes`, except for calls to
/// `failing` pools, which fail the whole batch.
pub fn executor(stakes: Stakes, failing: &[Address]) -> MockBatchCallExecuting {
    let failing = failing.to_vec();
    let mut executor = MockBatchCallExecuting::new();
    executor
        .expect_execute()
        .returning(move |_, _, _, calls, _| {
            if calls.iter().any(|call| failing.contains(&call.target)) {
                return Err(Error::LengthMismatch {
                    expected: calls.len(),
                    actual: 0,
                });
            }
            Ok(calls
                .iter()
                .map(|call| {
                    let stake = stakes
                        .get(&(call.target, holder(call)))
                        .copied()
                        .unwrap_or_default();
                    vec![DynSolValue::Uint(stake, 256)]
                })
                .collect())
        });
    executor
}

pub fn strategy(executor: MockBatchCallExecuting) -> Strategy {
    Strategy::new(ethrpc::dummy_nodes(NETWORK), Arc::new(executor))
}
