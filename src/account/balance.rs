use super::TransactionError;
use crate::Amount;

/// An account balance, kept as the sum of credits and the sum of debits.
///
/// The observable balance is `credit - debit`. Both sides only grow;
/// individual movements live in the account's history, not here.
#[derive(Clone)]
pub(super) struct Balance {
    credit: Amount,
    debit: Amount,
}

impl Balance {
    pub(super) const fn zero() -> Self {
        Self {
            credit: Amount::ZERO,
            debit: Amount::ZERO,
        }
    }

    pub(super) fn amount(&self) -> Amount {
        self.credit - self.debit
    }

    pub(super) fn credit(&mut self, amount: Amount) -> Result<(), TransactionError> {
        self.credit = self
            .credit
            .checked_add(amount)
            .ok_or(TransactionError::Overflow)?;

        Ok(())
    }

    pub(super) fn debit(&mut self, amount: Amount) -> Result<(), TransactionError> {
        self.debit = self
            .debit
            .checked_add(amount)
            .ok_or(TransactionError::Overflow)?;

        Ok(())
    }
}
