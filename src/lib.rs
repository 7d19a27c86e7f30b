pub mod cli;
pub mod core;
pub mod utils;

pub use crate::core::analysis::{ReceiptAnalysis, SplitError};
pub use crate::core::settlement::{settle, ItemAllocation, Person, PersonExpense, ReceiptItem};
