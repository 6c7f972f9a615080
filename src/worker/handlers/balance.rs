use crate::{
    common::outcome::Outcome,
    domain::{account::AccountId, ledger::Ledger},
};

pub fn handle(ledger: &Ledger, account: AccountId) -> Outcome {
    match ledger.find_account(account) {
        Some(acc) => Outcome::info(format!("Balance: {}", acc.balance())),
        None => Outcome::failure("Account not found!"),
    }
}
