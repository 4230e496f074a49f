use {
    crate::domain::eth::{Address, U256},
    bigdecimal::BigDecimal,
    number::serialization::HexOrDecimalU256,
    serde::{Deserialize, Serialize},
    serde_with::serde_as,
};

/// One entry of the strategy options: a staking pool whose stakes count
/// towards the score.
#[serde_as]
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolConfig {
    pub staking_pool_contract_address: Address,
    /// Either `open` or `standard`. Any other value is rejected when the
    /// pool's interface gets resolved.
    pub staking_type: String,
    pub token_contract_address: Address,
    pub decimals: u8,
    /// Raw amount in the smallest unit of the token.
    #[serde_as(as = "HexOrDecimalU256")]
    pub min_staked_balance: U256,
}

impl PoolConfig {
    /// The minimum staked balance scaled by the pool's decimals.
    pub fn min_balance(&self) -> BigDecimal {
        number::units::to_decimal(self.min_staked_balance, self.decimals)
    }
}

#[cfg(test)]
mod tests {
    use {super::*, alloy::primitives::address, std::str::FromStr};

    #[test]
    fn deserializes_strategy_options() {
        let options: Vec<PoolConfig> = serde_json::from_str(
            r#"[
                {
                    "stakingPoolContractAddress": "0x1111111111111111111111111111111111111111",
                    "stakingType": "open",
                    "tokenContractAddress": "0x2222222222222222222222222222222222222222",
                    "decimals": 18,
                    "minStakedBalance": "1500000000000000000"
                },
                {
                    "stakingPoolContractAddress": "0x3333333333333333333333333333333333333333",
                    "stakingType": "standard",
                    "tokenContractAddress": "0x4444444444444444444444444444444444444444",
                    "decimals": 6,
                    "minStakedBalance": "0"
                }
            ]"#,
        )
        .unwrap();

        assert_eq!(
            options[0],
            PoolConfig {
                staking_pool_contract_address: address!(
                    "0x1111111111111111111111111111111111111111"
                ),
                staking_type: "open".to_owned(),
                token_contract_address: address!("0x2222222222222222222222222222222222222222"),
                decimals: 18,
                min_staked_balance: U256::from(1_500_000_000_000_000_000u64),
            }
        );
        assert_eq!(
            options[0].min_balance(),
            BigDecimal::from_str("1.5").unwrap()
        );
        assert_eq!(options[1].staking_type, "standard");
        assert_eq!(options[1].min_balance(), BigDecimal::from(0));
    }

    #[test]
    fn keeps_unknown_staking_types_for_resolution() {
        let pool: PoolConfig = serde_json::from_str(
            r#"{
                "stakingPoolContractAddress": "0x1111111111111111111111111111111111111111",
                "stakingType": "delegated",
                "tokenContractAddress": "0x2222222222222222222222222222222222222222",
                "decimals": 18,
                "minStakedBalance": "0"
            }"#,
        )
        .unwrap();
        assert_eq!(pool.staking_type, "delegated");
    }
}
