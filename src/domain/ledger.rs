use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::{
    common::{error::LedgerError, money::Money},
    domain::account::{Account, AccountId},
};

/// In-memory owner of every account opened during this run.
///
/// Accounts are never removed, so the next id is always `len() + 1` and ids
/// stay dense starting at 1.
#[derive(Debug, Default)]
pub struct Ledger {
    accounts: HashMap<AccountId, Account>,
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            accounts: HashMap::new(),
        }
    }

    pub fn accounts(&self) -> &HashMap<AccountId, Account> {
        &self.accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Opens an account and returns its id. Names may repeat and the opening
    /// balance may be negative. Fails only once every `AccountId` is taken.
    pub fn create_account(
        &mut self,
        holder_name: impl Into<String>,
        initial: Money,
    ) -> Result<AccountId, LedgerError> {
        let id = next_id(self.accounts.len())?;
        let account = Account::new(id, holder_name, initial);
        if initial.is_negative() {
            warn!(account = id, %initial, "account opened with negative balance");
        }
        info!(account = id, holder = account.holder_name(), %initial, "account created");
        self.accounts.insert(id, account);
        Ok(id)
    }

    pub fn find_account(&self, id: AccountId) -> Option<&Account> {
        let found = self.accounts.get(&id);
        debug!(account = id, found = found.is_some(), "account lookup");
        found
    }

    pub fn deposit(&mut self, id: AccountId, amount: Money) -> Result<(), LedgerError> {
        let account = self
            .accounts
            .get_mut(&id)
            .ok_or(LedgerError::AccountNotFound(id))?;
        if amount.is_negative() {
            warn!(account = id, %amount, "negative deposit");
        }
        if let Err(e) = account.deposit(amount) {
            warn!(error = %e, "deposit rejected");
            return Err(e);
        }
        info!(account = id, %amount, balance = %account.balance(), "deposit applied");
        Ok(())
    }

    pub fn withdraw(&mut self, id: AccountId, amount: Money) -> Result<(), LedgerError> {
        let account = self
            .accounts
            .get_mut(&id)
            .ok_or(LedgerError::AccountNotFound(id))?;
        if let Err(e) = account.withdraw(amount) {
            warn!(error = %e, "withdrawal rejected");
            return Err(e);
        }
        info!(account = id, %amount, balance = %account.balance(), "withdrawal applied");
        Ok(())
    }
}

/// Id for the account opened after `existing` others.
fn next_id(existing: usize) -> Result<AccountId, LedgerError> {
    existing
        .checked_add(1)
        .and_then(|n| AccountId::try_from(n).ok())
        .ok_or(LedgerError::IdsExhausted)
}
