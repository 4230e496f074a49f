use {
    alloy::primitives::U256,
    bigdecimal::BigDecimal,
    num::{BigInt, ToPrimitive, bigint::Sign},
};

pub trait TokenUnit: Sized {
    /// Returns the amount expressed in the smallest unit of a token with the
    /// given number of decimals (i.e. `self * 10^decimals`).
    fn atoms(self, decimals: u8) -> U256;

    /// Returns the amount as atoms of an 18 decimal token.
    fn eth(self) -> U256 {
        self.atoms(18)
    }
}

impl TokenUnit for u64 {
    fn atoms(self, decimals: u8) -> U256 {
        U256::from(self) * U256::from(10).pow(U256::from(decimals))
    }
}

impl TokenUnit for u128 {
    fn atoms(self, decimals: u8) -> U256 {
        U256::from(self) * U256::from(10).pow(U256::from(decimals))
    }
}

/// Scales a raw on-chain amount down by its decimal precision, i.e. computes
/// `amount / 10^decimals` without any loss of precision.
pub fn to_decimal(amount: U256, decimals: u8) -> BigDecimal {
    let digits = BigInt::from_bytes_be(Sign::Plus, &amount.to_be_bytes::<32>());
    BigDecimal::new(digits, i64::from(decimals))
}

/// Converts a decimal amount into the closest float. Saturates to infinity for
/// values outside of the `f64` range.
pub fn to_f64(value: &BigDecimal) -> f64 {
    value.to_f64().unwrap_or(f64::INFINITY)
}
