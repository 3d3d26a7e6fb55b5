//! Display-ready projections of one account: the movement rows for the
//! statement panel and the summary figures. Pure reads; the rendering layer
//! that consumes them is out of scope.

use crate::{
    common::money::Money,
    domain::{account::Account, ledger},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementKind {
    Deposit,
    Withdrawal,
}

impl MovementKind {
    /// A zero movement counts as a withdrawal; only strictly positive
    /// amounts are deposits.
    pub fn of(amount: Money) -> Self {
        if amount.is_positive() {
            MovementKind::Deposit
        } else {
            MovementKind::Withdrawal
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MovementKind::Deposit => "deposit",
            MovementKind::Withdrawal => "withdrawal",
        }
    }
}

/// One statement line. `row` is the 1-based chronological position of the
/// movement, and it stays attached to the movement when the view is sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovementRow {
    pub row: usize,
    pub kind: MovementKind,
    pub amount: Money,
}

/// Orders an account's movements for display without touching storage order.
///
/// Unsorted: newest first. Sorted: ascending by amount, stable.
///
/// # Examples
///
/// ```
/// use bankist_core::common::money::{InterestRate, Money};
/// use bankist_core::domain::account::Account;
/// use bankist_core::view::movement_rows;
///
/// let acc = Account::new(
///     "Ada Lovelace",
///     "al",
///     1234,
///     InterestRate::from_basis_points(100),
///     vec![Money::from_major(100), Money::from_major(-30)],
/// );
///
/// let rows = movement_rows(&acc, false);
/// assert_eq!((rows[0].row, rows[1].row), (2, 1));
///
/// let rows = movement_rows(&acc, true);
/// assert_eq!((rows[0].row, rows[1].row), (2, 1)); // -30 first, still row 2
/// ```
pub fn movement_rows(acc: &Account, sorted: bool) -> Vec<MovementRow> {
    let mut rows: Vec<MovementRow> = acc
        .movements
        .iter()
        .enumerate()
        .map(|(i, &amount)| MovementRow {
            row: i + 1,
            kind: MovementKind::of(amount),
            amount,
        })
        .collect();

    if sorted {
        rows.sort_by_key(|r| r.amount);
    } else {
        rows.reverse();
    }
    rows
}

/// The four figures shown alongside the statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountSummary {
    pub balance: Money,
    pub deposits: Money,
    pub withdrawals: Money,
    pub interest: Money,
}

pub fn summarize(acc: &Account) -> AccountSummary {
    AccountSummary {
        balance: ledger::balance(acc),
        deposits: ledger::total_deposits(acc),
        withdrawals: ledger::total_withdrawals(acc),
        interest: ledger::qualifying_interest(acc),
    }
}
