use crate::{
    common::money::Money,
    domain::{directory::AccountDirectory, ledger, session::Session},
    worker::teller::Outcome,
};

pub fn handle(
    session: &Session,
    directory: &mut AccountDirectory,
    to: &str,
    amount: Money,
) -> Outcome {
    let Some(from) = session.current() else {
        return Outcome::Rejected;
    };
    let from = from.to_string();

    if !amount.is_positive() {
        return Outcome::Rejected;
    }
    if directory.find_by_username(to).is_none() {
        return Outcome::Rejected;
    }
    if to == from {
        return Outcome::Rejected;
    }
    match directory.find_by_username(&from) {
        Some(sender) if ledger::balance(sender) >= amount => {}
        _ => return Outcome::Rejected,
    }

    // Debit before credit, so an audit trail reads in cause order.
    if let Some(sender) = directory.find_by_username_mut(&from) {
        ledger::record_movement(sender, -amount);
    }
    if let Some(receiver) = directory.find_by_username_mut(to) {
        ledger::record_movement(receiver, amount);
    }
    Outcome::Applied
}
