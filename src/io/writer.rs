use std::{collections::HashMap, io::Write};

use crate::domain::account::{Account, AccountId};

#[derive(serde::Serialize)]
/// One line of the account listing: `id,holder,balance`.
struct ListingRow<'a> {
    id: AccountId,
    holder: &'a str,
    balance: String,
}

/// Writes every account as CSV, sorted by id ascending.
///
/// Balances are formatted with two decimals via `Money`'s `Display`.
///
/// # Errors
///
/// Returns a `csv::Error` if writing/serializing any row fails.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use bank_simulator::common::money::Money;
/// use bank_simulator::domain::account::Account;
/// use bank_simulator::io::writer::write_accounts;
///
/// let mut accounts = HashMap::new();
/// accounts.insert(2, Account::new(2, "Bob", Money::from_units(5)));
/// accounts.insert(1, Account::new(1, "Alice", Money::zero()));
///
/// let mut out = Vec::new();
/// write_accounts(&mut out, &accounts).unwrap();
///
/// let s = String::from_utf8(out).unwrap();
/// assert_eq!(s, "id,holder,balance\n1,Alice,0.00\n2,Bob,5.00\n");
/// ```
pub fn write_accounts<W: Write>(
    writer: W,
    accounts: &HashMap<AccountId, Account>,
) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    let mut sorted: Vec<&Account> = accounts.values().collect();
    sorted.sort_unstable_by_key(|acc| acc.id());

    for acc in sorted {
        wtr.serialize(ListingRow {
            id: acc.id(),
            holder: acc.holder_name(),
            balance: acc.balance().to_string(),
        })?;
    }

    wtr.flush()?;
    Ok(())
}
