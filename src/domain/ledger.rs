//! Derived figures over a single account's movements. Everything here is
//! recomputed from the movement list on every call; nothing is cached, so a
//! read can never be stale.

use crate::{common::money::Money, domain::account::Account};

/// Current balance: the sum of all movements.
pub fn balance(acc: &Account) -> Money {
    acc.movements.iter().copied().sum()
}

/// Sum of the positive movements.
pub fn total_deposits(acc: &Account) -> Money {
    acc.movements
        .iter()
        .copied()
        .filter(Money::is_positive)
        .sum()
}

/// Absolute value of the sum of the negative movements.
pub fn total_withdrawals(acc: &Account) -> Money {
    let out: Money = acc
        .movements
        .iter()
        .copied()
        .filter(|m| !m.is_positive())
        .sum();
    -out
}

/// Interest earned across deposits, keeping only per-deposit terms of at
/// least 1. The cutoff is part of the observable contract.
pub fn qualifying_interest(acc: &Account) -> Money {
    acc.movements
        .iter()
        .copied()
        .filter(Money::is_positive)
        .map(|deposit| acc.interest_rate.term_for(deposit))
        .filter(|term| *term >= Money::from_major(1))
        .sum()
}

/// Appends a movement. There is no rollback; callers validate first.
pub fn record_movement(acc: &mut Account, amount: Money) {
    acc.movements.push(amount);
}
