use crate::{
    common::money::Money,
    domain::{directory::AccountDirectory, ledger, session::Session},
    worker::teller::Outcome,
};

pub fn handle(session: &Session, directory: &mut AccountDirectory, amount: Money) -> Outcome {
    let Some(username) = session.current() else {
        return Outcome::Rejected;
    };

    if !amount.is_positive() {
        return Outcome::Rejected;
    }

    let Some(acc) = directory.find_by_username_mut(username) else {
        return Outcome::Rejected;
    };

    // The bank wants one prior movement worth at least a tenth of the
    // request. Compared as m * 10 >= amount so the tenth is exact.
    let qualifies = acc
        .movements
        .iter()
        .any(|m| m.as_i64() * 10 >= amount.as_i64());
    if !qualifies {
        return Outcome::Rejected;
    }

    ledger::record_movement(acc, amount);
    Outcome::Applied
}
