//! Core data models for the finance dashboard
//!
//! Transactions as loaded from the spreadsheet, the period used to scope
//! reports, the goal map, and the raw table the loader consumes.

pub mod goals;
pub mod kind;
pub mod period;
pub mod table;
pub mod transaction;

pub use goals::GoalMap;
pub use kind::TransactionKind;
pub use period::Period;
pub use table::{Cell, RawTable};
pub use transaction::Transaction;
