//! Reusable UI components.

pub mod application_dialog;
pub mod nav_bar;
pub mod opportunity_card;
