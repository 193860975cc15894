use super::{Account, BankAccount, TransactionError};
use crate::clock::Clock;
use crate::customer::{Customer, IndividualCustomer};
use crate::history::History;
use crate::{AccountNumber, Amount, CustomerId};
use rust_decimal_macros::dec;

/// A checking account: the base account rules plus a per-withdrawal limit
/// and a cap on how many withdrawals may ever succeed.
///
/// Both caps gate withdrawals only; deposits behave exactly like the base
/// account's. The withdrawal count is read back from the history, so only
/// withdrawals that actually went through use up the allowance.
pub struct CheckingAccount {
    account: Account,
    withdrawal_limit: Amount,
    max_withdrawals: usize,
}

impl CheckingAccount {
    /// A fresh checking account with the default caps: withdrawals up to
    /// 500, at most 3 of them.
    pub fn new(customer: &Customer, number: AccountNumber) -> Self {
        Self::with_limits(customer, number, dec!(500), 3)
    }

    pub fn with_limits(
        customer: &Customer,
        number: AccountNumber,
        withdrawal_limit: Amount,
        max_withdrawals: usize,
    ) -> Self {
        Self {
            account: Account::new(customer, number),
            withdrawal_limit,
            max_withdrawals,
        }
    }

    /// Same as `with_limits`, with the history clock injected.
    pub fn with_clock(
        customer: &Customer,
        number: AccountNumber,
        withdrawal_limit: Amount,
        max_withdrawals: usize,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            account: Account::with_clock(customer, number, clock),
            withdrawal_limit,
            max_withdrawals,
        }
    }

    pub fn withdrawal_limit(&self) -> Amount {
        self.withdrawal_limit
    }

    pub fn max_withdrawals(&self) -> usize {
        self.max_withdrawals
    }

    /// Display-only account header: branch, number and holder name.
    ///
    /// Accounts link to their holder by id, so rendering the name takes the
    /// holder itself.
    pub fn summary(&self, holder: &IndividualCustomer) -> String {
        format!(
            "Branch: {}\nAccount: {}\nHolder: {}",
            self.branch(),
            self.number(),
            holder.name()
        )
    }
}

impl BankAccount for CheckingAccount {
    fn number(&self) -> AccountNumber {
        self.account.number()
    }

    fn branch(&self) -> &'static str {
        self.account.branch()
    }

    fn holder(&self) -> CustomerId {
        self.account.holder()
    }

    fn balance(&self) -> Amount {
        self.account.balance()
    }

    fn history(&self) -> &History {
        self.account.history()
    }

    fn history_mut(&mut self) -> &mut History {
        self.account.history_mut()
    }

    /// The base rules, preceded by the two checking-account gates: the
    /// per-withdrawal limit first, then the withdrawal count. The amount and
    /// balance checks stay in the base rule, evaluated last.
    fn withdraw(&mut self, amount: Amount) -> Result<(), TransactionError> {
        if amount > self.withdrawal_limit {
            return Err(TransactionError::WithdrawalLimitExceeded);
        }
        if self.account.history().withdrawal_count() >= self.max_withdrawals {
            return Err(TransactionError::WithdrawalCountExceeded);
        }

        self.account.withdraw(amount)
    }

    fn deposit(&mut self, amount: Amount) -> Result<(), TransactionError> {
        self.account.deposit(amount)
    }
}
