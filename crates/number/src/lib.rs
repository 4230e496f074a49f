//! Numeric helpers for token amounts: scaling raw on-chain integers by their
//! decimal precision and (de)serializing them from configuration.
pub mod serialization;
pub mod units;
