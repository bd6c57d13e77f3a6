//! Exit code constants for the langgpt CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable field or config file)
//! - 2: I/O failure (reading stdin, writing the rendered prompt)
//! - 3: Template file not found

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or invalid field/config files.
pub const USER_ERROR: i32 = 1;

/// I/O failure while reading input or writing output.
pub const IO_FAILURE: i32 = 2;

/// The requested template file does not exist.
pub const TEMPLATE_NOT_FOUND: i32 = 3;
