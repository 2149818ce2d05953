//! Toy in-memory banking ledger.
//!
//! An [`agency::Agency`] owns every [`client::Client`] and [`account::Account`]
//! and is the sole entry point for ledger operations: client registration,
//! deposits, withdrawals, transfers and the monthly-update pass.
//! [`operation::Operation`] is the CSV-decodable command surface consumed by
//! the `toybank` binary.

pub mod account;
pub mod agency;
pub mod client;
pub mod operation;
