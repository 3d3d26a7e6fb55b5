/// The single active login plus the display-only sort flag. Lives for the
/// process; cleared on logout, account closure, or any failed login.
#[derive(Debug, Default)]
pub struct Session {
    current: Option<String>,
    sorted: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log_in(&mut self, username: String) {
        self.current = Some(username);
    }

    pub fn log_out(&mut self) {
        self.current = None;
    }

    /// Username of the logged-in account, if any.
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn sorted(&self) -> bool {
        self.sorted
    }

    /// Flips the display ordering. Never touches stored movements.
    pub fn toggle_sort(&mut self) {
        self.sorted = !self.sorted;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_logged_out_and_unsorted() {
        let session = Session::new();
        assert_eq!(session.current(), None);
        assert!(!session.sorted());
    }

    #[test]
    fn login_logout_roundtrip() {
        let mut session = Session::new();

        session.log_in("js".to_string());
        assert_eq!(session.current(), Some("js"));

        session.log_out();
        assert_eq!(session.current(), None);
    }

    #[test]
    fn sort_toggle_flips_back_and_forth() {
        let mut session = Session::new();

        session.toggle_sort();
        assert!(session.sorted());
        session.toggle_sort();
        assert!(!session.sorted());
    }
}
