use crate::common::error::{InputError, LedgerError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Failure,
    Info,
}

/// What the shell should tell the user after a command ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub tone: Tone,
    pub message: String,
}

impl Outcome {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            tone: Tone::Success,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            tone: Tone::Failure,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            tone: Tone::Info,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.tone != Tone::Failure
    }
}

impl From<LedgerError> for Outcome {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::AccountNotFound(_) => Outcome::failure("Account not found!"),
            LedgerError::InsufficientFunds { .. } => Outcome::failure("Insufficient balance!"),
            LedgerError::AmountOverflow { .. } => Outcome::failure("Amount out of range!"),
            LedgerError::IdsExhausted => Outcome::failure("No more account numbers available!"),
        }
    }
}

impl From<InputError> for Outcome {
    fn from(err: InputError) -> Self {
        Outcome::failure(format!("Invalid input: {err}"))
    }
}
