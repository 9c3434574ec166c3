//! Exit code constants for the agent-scaffold CLI.
//!
//! - 0: Success (including an interactive run the user chose not to save)
//! - 1: User error or filesystem failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Missing or unsafe input, or a write that could not be completed.
pub const USER_ERROR: i32 = 1;
