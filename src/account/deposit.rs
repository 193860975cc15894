use super::{Account, TransactionError};
use crate::Amount;

impl Account {
    /// Base deposit rule: any positive amount is accepted.
    pub(super) fn apply_deposit(&mut self, amount: Amount) -> Result<(), TransactionError> {
        if amount <= Amount::ZERO {
            return Err(TransactionError::InvalidAmount);
        }

        self.balance.credit(amount)
    }
}
