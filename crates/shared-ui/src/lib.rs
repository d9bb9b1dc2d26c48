//! Presentation components for the dashboard shell.
//!
//! Components only render what they are given; session and routing state
//! live in the app crate.

pub mod components;
pub mod theme;

pub use components::*;
