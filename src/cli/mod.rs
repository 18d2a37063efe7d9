//! Command implementations behind the `gnx` binary.

pub mod commands;

pub use commands::CommandContext;
