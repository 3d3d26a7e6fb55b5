use crate::common::money::Money;

/// A user action replayed from the session script into the teller.
#[derive(Debug)]
pub enum SessionEvent {
    Login { username: String, pin: u32 },
    Transfer { to: String, amount: Money },
    Loan { amount: Money },
    Close { username: String, pin: u32 },
    SortToggle,
    Logout,
}
