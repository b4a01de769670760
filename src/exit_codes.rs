//! Exit code constants for the confmerge CLI.
//!
//! Three distinct outcomes are signalled to the caller:
//! - 0: Success (merged into an existing file)
//! - 1: Error (missing template, unreadable/unwritable files)
//! - 2: Fresh install (target was absent or empty; full structure created)

/// Successful merge into an existing target.
pub const SUCCESS: i32 = 0;

/// Fatal error: missing template file or an I/O failure.
pub const ERROR: i32 = 1;

/// Fresh install: the target did not exist (or was blank) and was
/// created from scratch. Not an error; callers use this to trigger
/// first-time setup steps.
pub const FRESH_INSTALL: i32 = 2;
