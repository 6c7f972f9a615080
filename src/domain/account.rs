use crate::common::{error::LedgerError, money::Money};

pub type AccountId = u32;

/// One holder's account. Identity is fixed at creation; only the balance moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    id: AccountId,
    holder_name: String,
    balance: Money,
}

impl Account {
    pub fn new(id: AccountId, holder_name: impl Into<String>, balance: Money) -> Self {
        Self {
            id,
            holder_name: holder_name.into(),
            balance,
        }
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Adds `amount`, negative amounts included. Only a result that does not
    /// fit in `Money` is refused.
    pub fn deposit(&mut self, amount: Money) -> Result<(), LedgerError> {
        let Some(next) = self.balance.checked_add(amount) else {
            return Err(self.overflow(amount));
        };
        self.balance = next;
        Ok(())
    }

    /// Takes `amount` out if the balance covers it. On any error the balance
    /// is left alone.
    pub fn withdraw(&mut self, amount: Money) -> Result<(), LedgerError> {
        if self.balance < amount {
            return Err(LedgerError::InsufficientFunds {
                id: self.id,
                balance: self.balance,
                requested: amount,
            });
        }
        let Some(next) = self.balance.checked_sub(amount) else {
            return Err(self.overflow(amount));
        };
        self.balance = next;
        Ok(())
    }

    fn overflow(&self, amount: Money) -> LedgerError {
        LedgerError::AmountOverflow {
            id: self.id,
            balance: self.balance,
            amount,
        }
    }
}
