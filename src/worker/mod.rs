pub mod handlers;
pub mod teller;
