//! Exit code constants for the diffparse CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable input, input too large)
//! - 2: The diff failed to parse
//! - 3: Config file error

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable input, or oversized input.
pub const USER_ERROR: i32 = 1;

/// The input is not a valid diff in the selected format.
pub const PARSE_FAILURE: i32 = 2;

/// The config file could not be read, parsed, or validated.
pub const CONFIG_ERROR: i32 = 3;
