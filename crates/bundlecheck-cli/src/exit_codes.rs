//! Unified exit codes for bundlecheck.
//! These codes are part of the contract with the surrounding build system.

pub const OK: i32 = 0;
pub const FAILURE: i32 = 1; // usage error, invalid bundle dir, or unexpected files
