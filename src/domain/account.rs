use crate::common::money::{InterestRate, Money};

#[derive(Debug, Clone)]
pub struct Account {
    /// Display name, free text.
    pub owner: String,
    /// Directory lookup key, derived from the owner's initials at creation
    /// and immutable afterwards.
    pub username: String,
    /// Compared for exact equality on login and closure. No hashing.
    pub pin: u32,
    /// Signed movements, oldest first. Append-only; the whole account is
    /// removed on closure.
    pub movements: Vec<Money>,
    pub interest_rate: InterestRate,
}

impl Account {
    pub fn new(
        owner: impl Into<String>,
        username: impl Into<String>,
        pin: u32,
        interest_rate: InterestRate,
        movements: Vec<Money>,
    ) -> Self {
        Self {
            owner: owner.into(),
            username: username.into(),
            pin,
            movements,
            interest_rate,
        }
    }
}
