use crate::{
    common::event::SessionEvent,
    domain::{directory::AccountDirectory, session::Session},
    worker::handlers::{close, loan, login, transfer},
};

/// What became of a requested operation. Every rejection collapses into the
/// same value; there is no reason code for the caller to branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Rejected,
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }
}

/// Dispatches user actions against the directory and owns the session.
/// Each event is one atomic check-then-mutate step; rejected events leave
/// the directory untouched.
#[derive(Debug, Default)]
pub struct Teller {
    session: Session,
}

impl Teller {
    pub fn new() -> Self {
        Self {
            session: Session::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn process(&mut self, directory: &mut AccountDirectory, event: SessionEvent) -> Outcome {
        match event {
            SessionEvent::Login { username, pin } => {
                login::handle(&mut self.session, directory, &username, pin)
            }
            SessionEvent::Transfer { to, amount } => {
                transfer::handle(&self.session, directory, &to, amount)
            }
            SessionEvent::Loan { amount } => loan::handle(&self.session, directory, amount),
            SessionEvent::Close { username, pin } => {
                close::handle(&mut self.session, directory, &username, pin)
            }
            SessionEvent::SortToggle => {
                self.session.toggle_sort();
                Outcome::Applied
            }
            SessionEvent::Logout => {
                self.session.log_out();
                Outcome::Applied
            }
        }
    }
}
