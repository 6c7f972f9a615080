use crate::{
    common::{money::Money, outcome::Outcome},
    domain::ledger::Ledger,
};

pub fn handle(ledger: &mut Ledger, holder: String, initial: Money) -> Outcome {
    match ledger.create_account(holder, initial) {
        Ok(id) => Outcome::success(format!(
            "Account created successfully! Account number: {id}"
        )),
        Err(e) => e.into(),
    }
}
