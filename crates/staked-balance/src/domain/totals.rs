use {
    crate::domain::eth::{self, Address},
    bigdecimal::BigDecimal,
    std::collections::{BTreeMap, HashMap},
};

/// Running staked balance per account, summed over all pools processed so
/// far.
///
/// Sums are exact, so the totals do not depend on the order in which pools
/// are added.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AccountTotals(HashMap<Address, BigDecimal>);

impl AccountTotals {
    /// Adds `amount` to the account's total, starting from zero for accounts
    /// that have no total yet.
    pub fn add(&mut self, account: Address, amount: BigDecimal) {
        *self.0.entry(account).or_default() += amount;
    }

    /// Adds one balance per account, matched up by position.
    pub fn add_all(&mut self, accounts: &[Address], balances: Vec<BigDecimal>) {
        for (account, balance) in accounts.iter().zip(balances) {
            self.add(*account, balance);
        }
    }

    pub fn get(&self, account: &Address) -> Option<&BigDecimal> {
        self.0.get(account)
    }

    /// Drops every account whose total is strictly below `threshold`.
    /// Returns the number of dropped accounts.
    pub fn retain_at_least(&mut self, threshold: &BigDecimal) -> usize {
        let before = self.0.len();
        self.0.retain(|_, total| &*total >= threshold);
        before - self.0.len()
    }

    /// Final scores keyed by checksummed address.
    pub fn into_scores(self) -> BTreeMap<String, f64> {
        self.0
            .into_iter()
            .map(|(account, total)| (eth::checksum(&account), number::units::to_f64(&total)))
            .collect()
    }
}
