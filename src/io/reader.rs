use crate::common::{
    command::Command,
    error::AppError,
    input::{parse_account_id, parse_amount, parse_holder_name},
};
use std::io::Read;

#[derive(serde::Deserialize)]
/// Internal CSV row representation for command scripts. Unused columns stay
/// empty, e.g. `account` for `create` rows.
struct ScriptRow {
    op: String,
    account: Option<String>,
    holder: Option<String>,
    amount: Option<String>,
}

impl ScriptRow {
    fn require<'a>(field: &'a Option<String>, name: &str, op: &str) -> Result<&'a str, String> {
        field
            .as_deref()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| format!("{op} missing {name}"))
    }

    fn into_command(self) -> Result<Command, String> {
        let op = self.op.trim().to_ascii_lowercase();
        match op.as_str() {
            "create" => {
                let holder = parse_holder_name(self.holder.as_deref().unwrap_or_default())
                    .map_err(|e| e.to_string())?;
                let initial = parse_amount(Self::require(&self.amount, "amount", &op)?)
                    .map_err(|e| e.to_string())?;
                Ok(Command::CreateAccount { holder, initial })
            }
            "deposit" | "withdraw" => {
                let account = parse_account_id(Self::require(&self.account, "account", &op)?)
                    .map_err(|e| e.to_string())?;
                let amount = parse_amount(Self::require(&self.amount, "amount", &op)?)
                    .map_err(|e| e.to_string())?;
                if op == "deposit" {
                    Ok(Command::Deposit { account, amount })
                } else {
                    Ok(Command::Withdraw { account, amount })
                }
            }
            "balance" => {
                let account = parse_account_id(Self::require(&self.account, "account", &op)?)
                    .map_err(|e| e.to_string())?;
                Ok(Command::CheckBalance { account })
            }
            "list" => Ok(Command::ListAccounts),
            other => Err(format!("unknown operation: {other}")),
        }
    }
}

/// Reads commands from a CSV script.
///
/// Supported headers: `op,account,holder,amount`. Operations are
/// `create`, `deposit`, `withdraw`, `balance` and `list` (any case). Errors
/// carry the 1-based line number of the offending row.
///
/// # Examples
///
/// ```
/// use bank_simulator::common::command::Command;
/// use bank_simulator::io::reader::read_commands;
/// use csv::ReaderBuilder;
///
/// let data = "op,account,holder,amount\n\
/// create,,Alice,100\n\
/// balance,1,,\n";
/// let mut rdr = ReaderBuilder::new().from_reader(data.as_bytes());
/// let commands: Vec<_> = read_commands(&mut rdr).unwrap().collect();
///
/// assert!(matches!(commands[0], Ok(Command::CreateAccount { .. })));
/// assert!(matches!(commands[1], Ok(Command::CheckBalance { account: 1 })));
/// ```
pub fn read_commands<R: Read>(
    rdr: &mut csv::Reader<R>,
) -> Result<impl Iterator<Item = Result<Command, AppError>> + '_, AppError> {
    let headers = rdr.headers()?.clone();

    Ok(rdr.records().map(move |res| -> Result<Command, AppError> {
        let record = res?;
        let line = record.position().map_or(0, |p| p.line());
        let row: ScriptRow = record
            .deserialize(Some(&headers))
            .map_err(|e| AppError::Script {
                line,
                reason: e.to_string(),
            })?;
        row.into_command()
            .map_err(|reason| AppError::Script { line, reason })
    }))
}
