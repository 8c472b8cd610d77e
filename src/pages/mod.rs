//! Route-level page components.

pub mod chat;
pub mod community;
pub mod dashboard;
pub mod login;
pub mod opportunities;
pub mod opportunity_detail;
pub mod profile;
pub mod register;
