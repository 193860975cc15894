use super::{Account, TransactionError};
use crate::Amount;

impl Account {
    /// Base withdrawal rule: the amount must be positive and covered by the
    /// current balance. A successful withdrawal never drives the balance
    /// negative.
    pub(super) fn apply_withdrawal(&mut self, amount: Amount) -> Result<(), TransactionError> {
        if amount <= Amount::ZERO {
            return Err(TransactionError::InvalidAmount);
        }
        if amount > self.balance.amount() {
            return Err(TransactionError::InsufficientFunds);
        }

        self.balance.debit(amount)
    }
}
