pub mod account;
pub mod directory;
pub mod ledger;
pub mod session;
