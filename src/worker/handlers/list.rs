use crate::{
    common::{error::AppError, outcome::Outcome},
    domain::ledger::Ledger,
    io::writer,
};

pub fn handle(ledger: &Ledger) -> Result<Outcome, AppError> {
    if ledger.is_empty() {
        return Ok(Outcome::info("No accounts yet."));
    }

    let mut out = Vec::new();
    writer::write_accounts(&mut out, ledger.accounts())?;
    let table = String::from_utf8_lossy(&out);
    Ok(Outcome::info(table.trim_end()))
}
