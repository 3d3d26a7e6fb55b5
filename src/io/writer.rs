use std::io::Write;

use crate::{
    domain::directory::AccountDirectory,
    view::{self, MovementRow},
};

#[derive(serde::Serialize)]
/// Internal CSV output row for the all-accounts summary table.
///
/// Headers written (in this order): `username,balance,deposits,withdrawals,interest`.
/// Monetary fields are formatted to 4 decimal places as strings.
struct SummaryRow {
    username: String,
    balance: String,
    deposits: String,
    withdrawals: String,
    interest: String,
}

#[derive(serde::Serialize)]
/// Internal CSV output row for one statement line: `row,kind,amount`.
struct StatementRow {
    row: usize,
    kind: &'static str,
    amount: String,
}

/// Writes the summary figures of every account to a CSV writer.
///
/// The output includes a header row: `username,balance,deposits,withdrawals,interest`.
/// For deterministic output, accounts are sorted by username ascending before
/// writing, and monetary fields carry exactly 4 decimal places.
///
/// # Errors
///
/// Returns a `csv::Error` if writing/serializing any row fails.
///
/// # Examples
///
/// ```
/// use bankist_core::domain::directory::AccountDirectory;
/// use bankist_core::io::writer::write_accounts;
///
/// let directory = AccountDirectory::seeded().unwrap();
///
/// let mut out = Vec::new();
/// write_accounts(&mut out, &directory).unwrap();
///
/// let s = String::from_utf8(out).unwrap();
/// assert!(s.starts_with("username,balance,deposits,withdrawals,interest\n"));
/// assert!(s.contains("\njs,3840.0000,"));
/// ```
pub fn write_accounts<W: Write>(
    writer: W,
    directory: &AccountDirectory,
) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    // Deterministic output: sort by username.
    let mut usernames: Vec<&String> = directory.accounts().keys().collect();
    usernames.sort_unstable();

    for username in usernames {
        let acc = directory.accounts().get(username).expect("account exists");
        let summary = view::summarize(acc);
        let row = SummaryRow {
            username: username.clone(),
            balance: summary.balance.to_string_4dp(),
            deposits: summary.deposits.to_string_4dp(),
            withdrawals: summary.withdrawals.to_string_4dp(),
            interest: summary.interest.to_string_4dp(),
        };
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Writes one account's statement to a CSV writer, one line per movement in
/// the order the view projection produced them. Header: `row,kind,amount`.
pub fn write_statement<W: Write>(writer: W, rows: &[MovementRow]) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    for row in rows {
        wtr.serialize(StatementRow {
            row: row.row,
            kind: row.kind.as_str(),
            amount: row.amount.to_string_4dp(),
        })?;
    }

    wtr.flush()?;
    Ok(())
}
