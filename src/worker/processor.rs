use crate::{
    common::{command::Command, error::AppError, outcome::Outcome},
    domain::ledger::Ledger,
    worker::handlers::{balance, create, deposit, list, withdraw},
};

/// Routes each parsed command to its handler.
#[derive(Debug, Default)]
pub struct Processor {}
impl Processor {
    pub fn new() -> Self {
        Self {}
    }

    pub fn process(&mut self, ledger: &mut Ledger, command: Command) -> Result<Outcome, AppError> {
        let outcome = match command {
            Command::CreateAccount { holder, initial } => create::handle(ledger, holder, initial),
            Command::Deposit { account, amount } => deposit::handle(ledger, account, amount),
            Command::Withdraw { account, amount } => withdraw::handle(ledger, account, amount),
            Command::CheckBalance { account } => balance::handle(ledger, account),
            Command::ListAccounts => list::handle(ledger)?,
        };
        Ok(outcome)
    }
}
