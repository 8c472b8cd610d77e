//! Small shared utilities.

pub mod error_message;
pub mod time;
