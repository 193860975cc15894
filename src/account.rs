//! Accounts and the operations that can be performed on them.

mod balance;
mod checking;
mod deposit;
mod withdraw;

pub use checking::CheckingAccount;

use crate::clock::{Clock, SystemClock};
use crate::customer::Customer;
use crate::history::History;
use crate::{AccountNumber, Amount, CustomerId, BRANCH_CODE};
use balance::Balance;
use thiserror::Error;

/// Why a withdraw or deposit attempt was refused.
///
/// Note: errors are kept simple here. A real-world ledger would carry some
/// debugging info on each variant (account number, amount, current balance).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransactionError {
    /// The amount is zero or negative.
    #[error("the informed amount is invalid")]
    InvalidAmount,

    /// Funds in the account are insufficient for the withdrawal.
    #[error("insufficient balance for this withdrawal")]
    InsufficientFunds,

    /// The withdrawal exceeds the checking account's per-withdrawal limit.
    #[error("the withdrawal amount exceeds the account limit")]
    WithdrawalLimitExceeded,

    /// The checking account's maximum number of withdrawals has been reached.
    #[error("maximum number of withdrawals exceeded")]
    WithdrawalCountExceeded,

    /// Moving more money through the balance would overflow.
    #[error("the operation would overflow the balance")]
    Overflow,
}

/// Capability shared by every account variant.
///
/// Transactions and customers only ever talk to accounts through this trait,
/// so account variants with extra rules plug in without touching either.
pub trait BankAccount {
    /// The caller-assigned, unique account number.
    fn number(&self) -> AccountNumber;

    /// The fixed branch code.
    fn branch(&self) -> &'static str;

    /// Id of the owning customer.
    fn holder(&self) -> CustomerId;

    /// The current balance.
    fn balance(&self) -> Amount;

    /// The transactions that succeeded against this account, oldest first.
    fn history(&self) -> &History;

    /// Appending seam used by `Transaction::apply`; records only ever enter
    /// the history through it.
    fn history_mut(&mut self) -> &mut History;

    /// Take `amount` out of the account.
    fn withdraw(&mut self, amount: Amount) -> Result<(), TransactionError>;

    /// Put `amount` into the account.
    fn deposit(&mut self, amount: Amount) -> Result<(), TransactionError>;
}

/// A plain bank account: a balance, identifying numbers, the owning customer
/// and the history of every transaction that succeeded against it.
///
/// The balance starts at zero and is only ever updated through the withdraw
/// and deposit primitives.
pub struct Account {
    number: AccountNumber,
    holder: CustomerId,
    balance: Balance,
    history: History,
}

impl Account {
    /// A fresh account bound to `customer` under the caller-assigned
    /// `number`, with a zero balance and an empty history.
    pub fn new(customer: &Customer, number: AccountNumber) -> Self {
        Self::with_clock(customer, number, Box::new(SystemClock))
    }

    /// Same as `new`, with the history clock injected. Tests use this to pin
    /// record timestamps.
    pub fn with_clock(
        customer: &Customer,
        number: AccountNumber,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            number,
            holder: customer.id(),
            balance: Balance::zero(),
            history: History::with_clock(clock),
        }
    }
}

impl BankAccount for Account {
    fn number(&self) -> AccountNumber {
        self.number
    }

    fn branch(&self) -> &'static str {
        BRANCH_CODE
    }

    fn holder(&self) -> CustomerId {
        self.holder
    }

    fn balance(&self) -> Amount {
        self.balance.amount()
    }

    fn history(&self) -> &History {
        &self.history
    }

    fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    fn withdraw(&mut self, amount: Amount) -> Result<(), TransactionError> {
        self.apply_withdrawal(amount)
    }

    fn deposit(&mut self, amount: Amount) -> Result<(), TransactionError> {
        self.apply_deposit(amount)
    }
}
