use {
    crate::domain::{eth::Address, pool::PoolConfig},
    alloy::{
        dyn_abi::DynSolValue,
        json_abi::{Function, Param},
    },
    ethrpc::multicall::Call,
};

/// What a parameter of a staking interface stands for, derived from its name.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Role {
    /// The staked token.
    Token,
    /// The account whose stake is read.
    Holder,
    Unknown,
}

impl Role {
    fn of(param: &Param) -> Self {
        match param.name.as_str() {
            "id" => Self::Token,
            "staker" | "account" => Self::Holder,
            _ => Self::Unknown,
        }
    }
}

/// Builds one call of `interface` on the pool per account.
///
/// The calls are in the same order as `accounts`. Parameters that are neither
/// the token nor the holder are left unresolved.
pub fn build(interface: &Function, pool: &PoolConfig, accounts: &[Address]) -> Vec<Call> {
    accounts
        .iter()
        .map(|account| Call {
            target: pool.staking_pool_contract_address,
            function: interface.name.clone(),
            args: interface
                .inputs
                .iter()
                .map(|param| match Role::of(param) {
                    Role::Token => Some(DynSolValue::Address(pool.token_contract_address)),
                    Role::Holder => Some(DynSolValue::Address(*account)),
                    Role::Unknown => None,
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::domain::{eth::U256, interface},
        alloy::primitives::address,
    };

    const POOL: Address = address!("0x1111111111111111111111111111111111111111");
    const TOKEN: Address = address!("0x2222222222222222222222222222222222222222");
    const ALICE: Address = address!("0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa");
    const BOB: Address = address!("0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb");

    fn pool(staking_type: &str) -> PoolConfig {
        PoolConfig {
            staking_pool_contract_address: POOL,
            staking_type: staking_type.to_owned(),
            token_contract_address: TOKEN,
            decimals: 18,
            min_staked_balance: U256::ZERO,
        }
    }

    #[test]
    fn binds_token_and_staker_for_open_pools() {
        let interface = interface::resolve("open").unwrap();
        let calls = build(interface, &pool("open"), &[ALICE, BOB]);

        assert_eq!(
            calls,
            vec![
                Call {
                    target: POOL,
                    function: "stakedBalanceOf".to_owned(),
                    args: vec![
                        Some(DynSolValue::Address(TOKEN)),
                        Some(DynSolValue::Address(ALICE)),
                    ],
                },
                Call {
                    target: POOL,
                    function: "stakedBalanceOf".to_owned(),
                    args: vec![
                        Some(DynSolValue::Address(TOKEN)),
                        Some(DynSolValue::Address(BOB)),
                    ],
                },
            ]
        );
    }

    #[test]
    fn binds_account_for_standard_pools() {
        let interface = interface::resolve("standard").unwrap();
        let calls = build(interface, &pool("standard"), &[BOB, ALICE]);

        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].function, "balanceOf");
        assert_eq!(calls[0].args, vec![Some(DynSolValue::Address(BOB))]);
        assert_eq!(calls[1].args, vec![Some(DynSolValue::Address(ALICE))]);
    }

    #[test]
    fn leaves_unknown_parameters_unresolved() {
        let interface: Function = serde_json::from_value(serde_json::json!({
            "type": "function",
            "name": "stakeAt",
            "stateMutability": "view",
            "inputs": [
                { "name": "staker", "type": "address" },
                { "name": "epoch", "type": "uint256" }
            ],
            "outputs": [{ "name": "", "type": "uint256" }]
        }))
        .unwrap();

        let calls = build(&interface, &pool("open"), &[ALICE]);
        assert_eq!(calls[0].args, vec![Some(DynSolValue::Address(ALICE)), None]);
    }

    #[test]
    fn no_accounts_no_calls() {
        let interface = interface::resolve("standard").unwrap();
        assert!(build(interface, &pool("standard"), &[]).is_empty());
    }
}
