pub mod constants;
pub mod types;
pub mod utils;

pub use types::{Offset, Position};
