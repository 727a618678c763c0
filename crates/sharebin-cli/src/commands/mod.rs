//! The two command flows: create a paste, show a paste.

pub mod create;
pub mod show;
