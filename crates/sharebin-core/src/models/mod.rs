//! Data models for the paste service wire contract.

mod paste;

pub use paste::*;
