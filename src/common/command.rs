use crate::common::money::Money;
use crate::domain::account::AccountId;

/// A parsed request from the shell (prompt or script) to the processor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    CreateAccount { holder: String, initial: Money },
    Deposit { account: AccountId, amount: Money },
    Withdraw { account: AccountId, amount: Money },
    CheckBalance { account: AccountId },
    ListAccounts,
}
