use std::io::{stdout, BufWriter, Write};

use crate::{
    common::error::AppError,
    domain::directory::AccountDirectory,
    io::{reader, writer},
    view,
    worker::teller::Teller,
};

/// Seeds the demo accounts, replays a session script, and writes the
/// resulting view to stdout: the logged-in account's statement (when a
/// session survived the script), then the all-accounts summary table.
pub fn run<I, S>(args: I) -> Result<(), AppError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(|s| s.into()).collect();
    if args.len() < 2 {
        return Err(AppError::MissingArg);
    }
    let input_path = &args[1];

    let file = std::fs::File::open(input_path)?;
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(file);
    let events = reader::read_session_events(&mut reader);

    let mut directory = AccountDirectory::seeded()?;
    let mut teller = Teller::new();

    for event in events {
        let event = event.map_err(AppError::Parse)?;
        // Rejections are silent; a UI on top of this would decide whether to
        // show feedback.
        let _ = teller.process(&mut directory, event);
    }

    let stdout = stdout();
    let mut out = BufWriter::new(stdout.lock());

    if let Some(username) = teller.session().current() {
        if let Some(acc) = directory.find_by_username(username) {
            let rows = view::movement_rows(acc, teller.session().sorted());
            writer::write_statement(&mut out, &rows)?;
            writeln!(out)?;
        }
    }
    writer::write_accounts(&mut out, &directory)?;

    Ok(())
}
