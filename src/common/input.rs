use std::str::FromStr;

use crate::common::{error::InputError, money::Money};
use crate::domain::account::AccountId;

/// Parses a user-typed account number. Only positive integers are valid ids.
pub fn parse_account_id(raw: &str) -> Result<AccountId, InputError> {
    let t = raw.trim();
    match t.parse::<AccountId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(InputError::InvalidAccountId(t.to_string())),
    }
}

/// Parses a user-typed amount. The sign is not checked here; the ledger
/// accepts negative deposits and opening balances.
pub fn parse_amount(raw: &str) -> Result<Money, InputError> {
    Money::from_str(raw).map_err(|_| InputError::InvalidAmount(raw.trim().to_string()))
}

pub fn parse_holder_name(raw: &str) -> Result<String, InputError> {
    let t = raw.trim();
    if t.is_empty() {
        return Err(InputError::EmptyHolderName);
    }
    Ok(t.to_string())
}

/// Top-level menu entries, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CreateAccount,
    Deposit,
    Withdraw,
    CheckBalance,
    ListAccounts,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::CreateAccount,
        MenuChoice::Deposit,
        MenuChoice::Withdraw,
        MenuChoice::CheckBalance,
        MenuChoice::ListAccounts,
        MenuChoice::Exit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::CreateAccount => "Create Account",
            MenuChoice::Deposit => "Deposit",
            MenuChoice::Withdraw => "Withdraw",
            MenuChoice::CheckBalance => "Check Balance",
            MenuChoice::ListAccounts => "List Accounts",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl FromStr for MenuChoice {
    type Err = InputError;

    /// Accepts the 1-based menu number or the label, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if let Ok(n) = t.parse::<usize>() {
            if (1..=Self::ALL.len()).contains(&n) {
                return Ok(Self::ALL[n - 1]);
            }
        }
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(t))
            .ok_or_else(|| InputError::UnknownChoice(t.to_string()))
    }
}
