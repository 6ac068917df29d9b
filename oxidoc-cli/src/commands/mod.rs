//! Command implementations for OxiDoc CLI.

pub mod checksum;
pub mod encode;
pub mod filters;

pub use checksum::cmd_checksum;
pub use encode::{FilterArg, cmd_encode};
pub use filters::cmd_filters;
