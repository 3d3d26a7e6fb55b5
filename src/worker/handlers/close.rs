use crate::{
    domain::{directory::AccountDirectory, session::Session},
    worker::teller::Outcome,
};

pub fn handle(
    session: &mut Session,
    directory: &mut AccountDirectory,
    username: &str,
    pin: u32,
) -> Outcome {
    let Some(current) = session.current() else {
        return Outcome::Rejected;
    };
    // Only the logged-in account can be closed, and the pin must be retyped
    // correctly.
    if username != current {
        return Outcome::Rejected;
    }
    match directory.find_by_username(username) {
        Some(acc) if acc.pin == pin => {}
        _ => return Outcome::Rejected,
    }

    directory.remove(username);
    session.log_out();
    Outcome::Applied
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::worker::handlers::login;

    fn logged_in(username: &str) -> (Session, AccountDirectory) {
        let directory = AccountDirectory::seeded().unwrap();
        let mut session = Session::new();
        session.log_in(username.to_string());
        (session, directory)
    }

    #[test]
    fn closing_removes_the_account_and_ends_the_session() {
        let (mut session, mut directory) = logged_in("stw");

        let outcome = handle(&mut session, &mut directory, "stw", 3333);

        assert_eq!(outcome, Outcome::Applied);
        assert_eq!(session.current(), None);
        assert!(directory.find_by_username("stw").is_none());

        // a later login with the closed account fails
        let relogin = login::handle(&mut session, &directory, "stw", 3333);
        assert_eq!(relogin, Outcome::Rejected);
    }

    #[test]
    fn rejected_when_username_is_not_the_logged_in_account() {
        let (mut session, mut directory) = logged_in("js");

        let outcome = handle(&mut session, &mut directory, "jd", 2222);

        assert_eq!(outcome, Outcome::Rejected);
        assert_eq!(session.current(), Some("js"));
        assert!(directory.find_by_username("jd").is_some());
    }

    #[test]
    fn rejected_for_wrong_pin() {
        let (mut session, mut directory) = logged_in("js");

        let outcome = handle(&mut session, &mut directory, "js", 9999);

        assert_eq!(outcome, Outcome::Rejected);
        assert_eq!(session.current(), Some("js"));
        assert!(directory.find_by_username("js").is_some());
    }

    #[test]
    fn rejected_without_a_session() {
        let mut directory = AccountDirectory::seeded().unwrap();
        let mut session = Session::new();

        let outcome = handle(&mut session, &mut directory, "js", 1111);

        assert_eq!(outcome, Outcome::Rejected);
        assert!(directory.find_by_username("js").is_some());
    }
}
