//! Models a minimal bank ledger: customers own accounts, and accounts accept
//! deposit and withdrawal transactions.
//!
//! Every account keeps an append-only `History` of the transactions that
//! succeeded against it. A `Transaction` applies itself to any `BankAccount`
//! implementation and logs itself on success; a refused attempt never reaches
//! the history.

pub mod account;
pub mod clock;
pub mod customer;
pub mod history;
pub mod transaction;

pub use account::{Account, BankAccount, CheckingAccount, TransactionError};
pub use clock::{Clock, SystemClock};
pub use customer::{Customer, IndividualCustomer};
pub use history::{Entry, History};
pub use transaction::{Kind, Transaction};

// Using named types doesn't provide any compiler help, but it helps a lot
// with readability: `holder: CustomerId` reads better than `holder: u32`,
// and widening an id later is a one-line change.
pub type CustomerId = u32;
pub type AccountNumber = u32;

// A decimal library instead of a float keeps money arithmetic exact and the
// decimal precision easy to deal with.
pub type Amount = rust_decimal::Decimal;
pub(crate) const DECIMAL_PRECISION: u32 = 2;

/// Every account is held at the single fixed branch.
pub const BRANCH_CODE: &str = "0001";
