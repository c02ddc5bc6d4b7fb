//! Loading pipeline
//!
//! Reads input files into raw tables and raw tables into transactions, with an
//! expiring cache in front so repeated loads of the same file are cheap.

pub mod cache;
pub mod loader;
pub mod reader;

pub use cache::{Clock, ExpiringCache, ManualClock, SystemClock};
pub use loader::{InputIdentity, LoadOutcome, TransactionLoader};
pub use reader::{read_table, InputFormat};
