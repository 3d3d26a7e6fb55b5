use std::collections::HashMap;

use crate::{
    common::{
        error::AppError,
        money::{InterestRate, Money},
    },
    domain::account::Account,
};

/// Derives the login identifier from an owner name: lowercased initials of
/// each whitespace-separated token, concatenated in order.
///
/// # Examples
///
/// ```
/// use bankist_core::domain::directory::derive_username;
///
/// assert_eq!(derive_username("Jonas Schmedtmann"), "js");
/// assert_eq!(derive_username("Steven Thomas Williams"), "stw");
/// ```
pub fn derive_username(owner: &str) -> String {
    owner
        .to_lowercase()
        .split_whitespace()
        .filter_map(|token| token.chars().next())
        .collect()
}

/// Owns the full account set, keyed by derived username. Handlers and the
/// ledger reach accounts only through this directory.
#[derive(Debug, Default)]
pub struct AccountDirectory {
    accounts: HashMap<String, Account>,
}

impl AccountDirectory {
    pub fn new() -> Self {
        Self {
            accounts: HashMap::new(),
        }
    }

    /// The four fixed demo accounts created at process start.
    pub fn seeded() -> Result<Self, AppError> {
        let mut dir = Self::new();
        dir.add_account(
            "Jonas Schmedtmann",
            1111,
            InterestRate::from_basis_points(120),
            &[200, 450, -400, 3000, -650, -130, 70, 1300],
        )?;
        dir.add_account(
            "Jessica Davis",
            2222,
            InterestRate::from_basis_points(150),
            &[5000, 3400, -150, -790, -3210, -1000, 8500, -30],
        )?;
        dir.add_account(
            "Steven Thomas Williams",
            3333,
            InterestRate::from_basis_points(70),
            &[200, -200, 340, -300, -20, 50, 400, -460],
        )?;
        dir.add_account(
            "Sarah Smith",
            4444,
            InterestRate::from_basis_points(100),
            &[430, 1000, 700, 50, 90],
        )?;
        Ok(dir)
    }

    /// Registers an account under its derived username. An owner name that
    /// yields an empty username is a configuration error. Username collisions
    /// are not validated; the last insert wins.
    pub fn add_account(
        &mut self,
        owner: &str,
        pin: u32,
        interest_rate: InterestRate,
        movements: &[i64],
    ) -> Result<(), AppError> {
        let username = derive_username(owner);
        if username.is_empty() {
            return Err(AppError::Seed(format!(
                "cannot derive a username from owner {owner:?}"
            )));
        }

        let movements = movements.iter().copied().map(Money::from_major).collect();
        self.accounts.insert(
            username.clone(),
            Account::new(owner, username, pin, interest_rate, movements),
        );
        Ok(())
    }

    pub fn accounts(&self) -> &HashMap<String, Account> {
        &self.accounts
    }

    pub fn find_by_username(&self, username: &str) -> Option<&Account> {
        self.accounts.get(username)
    }

    pub fn find_by_username_mut(&mut self, username: &str) -> Option<&mut Account> {
        self.accounts.get_mut(username)
    }

    /// Unknown username and wrong pin both come back as `None`. The caller
    /// cannot tell which check failed.
    pub fn find_by_credentials(&self, username: &str, pin: u32) -> Option<&Account> {
        self.accounts.get(username).filter(|acc| acc.pin == pin)
    }

    pub fn remove(&mut self, username: &str) -> Option<Account> {
        self.accounts.remove(username)
    }
}
