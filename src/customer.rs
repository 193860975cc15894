use crate::account::{BankAccount, TransactionError};
use crate::transaction::Transaction;
use crate::{AccountNumber, CustomerId};
use chrono::NaiveDate;

/// Someone the bank knows by address, holding any number of accounts.
///
/// The account list holds account numbers: accounts themselves stay owned by
/// the application, and customers refer to them the same way accounts refer
/// back to their holder (by id).
pub struct Customer {
    id: CustomerId,
    address: String,
    accounts: Vec<AccountNumber>,
}

impl Customer {
    pub fn new(id: CustomerId, address: impl Into<String>) -> Self {
        Self {
            id,
            address: address.into(),
            accounts: Vec::new(),
        }
    }

    pub fn id(&self) -> CustomerId {
        self.id
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Numbers of the accounts this customer owns, in registration order.
    pub fn accounts(&self) -> &[AccountNumber] {
        &self.accounts
    }

    /// Register an account as owned by this customer. Appends, no dedup.
    pub fn add_account(&mut self, account: &dyn BankAccount) {
        self.accounts.push(account.number());
    }

    /// Run `transaction` against `account`.
    ///
    /// The account is taken as given: nothing verifies it belongs to this
    /// customer.
    pub fn perform_transaction(
        &self,
        account: &mut dyn BankAccount,
        transaction: &Transaction,
    ) -> Result<(), TransactionError> {
        transaction.apply(account)
    }
}

/// A natural person holding accounts: a customer plus identity attributes.
pub struct IndividualCustomer {
    customer: Customer,
    name: String,
    birth_date: NaiveDate,
    cpf: String,
}

impl IndividualCustomer {
    pub fn new(
        id: CustomerId,
        name: impl Into<String>,
        birth_date: NaiveDate,
        cpf: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            customer: Customer::new(id, address),
            name: name.into(),
            birth_date,
            cpf: cpf.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    /// The holder's tax id.
    pub fn cpf(&self) -> &str {
        &self.cpf
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    /// See `Customer::add_account`.
    pub fn add_account(&mut self, account: &dyn BankAccount) {
        self.customer.add_account(account);
    }

    /// See `Customer::perform_transaction`.
    pub fn perform_transaction(
        &self,
        account: &mut dyn BankAccount,
        transaction: &Transaction,
    ) -> Result<(), TransactionError> {
        self.customer.perform_transaction(account, transaction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::{Account, CheckingAccount};
    use crate::transaction::Kind;
    use rust_decimal_macros::dec;

    fn maria() -> IndividualCustomer {
        IndividualCustomer::new(
            1,
            "Maria Souza",
            NaiveDate::from_ymd_opt(1990, 5, 17).unwrap(),
            "123.456.789-00",
            "52 Rua das Laranjeiras",
        )
    }

    #[test]
    fn test_add_account_keeps_registration_order_without_dedup() {
        let mut customer = Customer::new(1, "1 Main Street");
        let first = Account::new(&customer, 10);
        let second = Account::new(&customer, 11);

        customer.add_account(&first);
        customer.add_account(&second);
        customer.add_account(&first);

        assert_eq!(vec![10, 11, 10], customer.accounts());
    }

    #[test]
    fn test_individual_customer_identity() {
        let maria = maria();

        assert_eq!("Maria Souza", maria.name());
        assert_eq!("123.456.789-00", maria.cpf());
        assert_eq!(NaiveDate::from_ymd_opt(1990, 5, 17).unwrap(), maria.birth_date());
        assert_eq!("52 Rua das Laranjeiras", maria.customer().address());
        assert_eq!(1, maria.customer().id());
        assert!(maria.customer().accounts().is_empty());
    }

    #[test]
    fn test_individual_customer_registers_accounts_through_the_base() {
        let mut maria = maria();
        let account = CheckingAccount::new(maria.customer(), 42);

        maria.add_account(&account);

        assert_eq!(vec![42], maria.customer().accounts());
    }

    #[test]
    fn test_checking_account_end_to_end() {
        let maria = maria();
        let mut account = CheckingAccount::new(maria.customer(), 42);

        assert_eq!(
            Ok(()),
            maria.perform_transaction(&mut account, &Transaction::deposit(dec!(1000)))
        );
        assert_eq!(dec!(1000), account.balance());
        assert_eq!(1, account.history().len());

        for want_balance in vec![dec!(700), dec!(400), dec!(100)] {
            assert_eq!(
                Ok(()),
                maria.perform_transaction(&mut account, &Transaction::withdrawal(dec!(300)))
            );
            assert_eq!(want_balance, account.balance());
        }
        assert_eq!(4, account.history().len());
        let kinds: Vec<Kind> = account
            .history()
            .entries()
            .iter()
            .map(|entry| entry.kind)
            .collect();
        assert_eq!(
            vec![Kind::Deposit, Kind::Withdrawal, Kind::Withdrawal, Kind::Withdrawal],
            kinds
        );

        // allowance exhausted: a 4th withdrawal fails although the balance
        // could cover it
        assert_eq!(
            Err(TransactionError::WithdrawalCountExceeded),
            maria.perform_transaction(&mut account, &Transaction::withdrawal(dec!(50)))
        );
        assert_eq!(dec!(100), account.balance());
        assert_eq!(4, account.history().len());
    }

    #[test]
    fn test_withdrawal_from_an_empty_account_changes_nothing() {
        let maria = maria();
        let mut account = Account::new(maria.customer(), 7);

        assert_eq!(
            Err(TransactionError::InsufficientFunds),
            maria.perform_transaction(&mut account, &Transaction::withdrawal(dec!(10)))
        );
        assert_eq!(dec!(0), account.balance());
        assert!(account.history().is_empty());
    }

    #[test]
    fn test_transactions_against_another_customers_account_are_not_refused() {
        // ownership of the target account is deliberately not verified
        let maria = maria();
        let other = Customer::new(2, "9 Elsewhere Road");
        let mut account = Account::new(&other, 99);

        assert_eq!(
            Ok(()),
            maria.perform_transaction(&mut account, &Transaction::deposit(dec!(5)))
        );
    }
}
