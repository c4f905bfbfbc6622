//! Tenpin: an interactive ten-pin bowling scorer.
//!
//! The scoring core lives in [`core`] and is pure game logic; [`input`],
//! [`term`], and [`session`] are the thin collaborators that drive it from
//! a terminal.

pub mod core;
pub mod input;
pub mod session;
pub mod term;
pub mod types;
