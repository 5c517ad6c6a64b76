#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::module_name_repetitions, // MovementContext lives in context, and that's fine
)]
pub mod board;
pub mod config;
pub mod context;
pub mod strategies;
