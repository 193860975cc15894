use crate::account::{BankAccount, TransactionError};
use crate::{Amount, DECIMAL_PRECISION};
use serde::Serialize;

/// Variant tag of a transaction, as recorded in an account's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Kind {
    Deposit,
    Withdrawal,
}

/// A single operation to run against an account.
///
/// Applying a transaction is the only way records enter an account's
/// history: the matching account primitive runs first, and the transaction
/// logs itself only once the primitive succeeded. New transaction kinds slot
/// in here without touching accounts or customers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transaction {
    Deposit(Amount),    // Add money to the balance.
    Withdrawal(Amount), // Take money out of the balance.
}

impl Transaction {
    // The constructors ensure we only carry amounts at the crate-wide
    // decimal precision.

    /// A deposit of `amount`, rounded to whole cents.
    pub fn deposit(amount: Amount) -> Self {
        Self::Deposit(amount.round_dp(DECIMAL_PRECISION))
    }

    /// A withdrawal of `amount`, rounded to whole cents.
    pub fn withdrawal(amount: Amount) -> Self {
        Self::Withdrawal(amount.round_dp(DECIMAL_PRECISION))
    }

    /// The fixed decimal value this transaction moves.
    pub fn amount(&self) -> Amount {
        match self {
            Self::Deposit(amount) | Self::Withdrawal(amount) => *amount,
        }
    }

    /// The tag recorded in an account's history for this transaction.
    pub fn kind(&self) -> Kind {
        match self {
            Self::Deposit(_) => Kind::Deposit,
            Self::Withdrawal(_) => Kind::Withdrawal,
        }
    }

    /// Run this transaction against `account`.
    ///
    /// On success the transaction is appended to the account's history; on
    /// failure the account and its history are left untouched.
    pub fn apply(&self, account: &mut dyn BankAccount) -> Result<(), TransactionError> {
        match self {
            Self::Deposit(amount) => account.deposit(*amount)?,
            Self::Withdrawal(amount) => account.withdraw(*amount)?,
        }
        account.history_mut().record(self.kind(), self.amount());
        Ok(())
    }
}
