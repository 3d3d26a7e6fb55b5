use crate::{
    domain::{directory::AccountDirectory, session::Session},
    worker::teller::Outcome,
};

pub fn handle(
    session: &mut Session,
    directory: &AccountDirectory,
    username: &str,
    pin: u32,
) -> Outcome {
    // Any failed attempt clears the session. A bad login never falls back to
    // whoever was logged in before.
    match directory.find_by_credentials(username, pin) {
        Some(acc) => {
            session.log_in(acc.username.clone());
            Outcome::Applied
        }
        None => {
            session.log_out();
            Outcome::Rejected
        }
    }
}
