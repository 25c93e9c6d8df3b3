//! Core domain types for TypeMaster

mod history;
mod user;

pub use history::{most_recent_first, TestResult};
pub use user::UserSnapshot;
