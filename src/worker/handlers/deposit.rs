use crate::{
    common::{money::Money, outcome::Outcome},
    domain::{account::AccountId, ledger::Ledger},
};

pub fn handle(ledger: &mut Ledger, account: AccountId, amount: Money) -> Outcome {
    match ledger.deposit(account, amount) {
        Ok(()) => Outcome::success("Deposit successful!"),
        Err(e) => e.into(),
    }
}
