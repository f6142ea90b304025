//! Thruster sweep CLI library.
//!
//! Terminal styling and text rendering shared by the `thruster-cli` binary.

pub mod output;
pub mod terminal;
