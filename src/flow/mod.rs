//! Multi-step flows that coordinate several network calls and slices.

pub mod application;
