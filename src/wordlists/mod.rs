//! Word lists
//!
//! Default solution and guessing lists compiled into the binary, plus a
//! loader for user-supplied files.

mod embedded;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, SOLUTIONS, SOLUTIONS_COUNT};
