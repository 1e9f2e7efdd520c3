pub mod commit;

/// Number of characters kept when abbreviating a commit hash for display.
pub const SHORT_HASH_LEN: usize = 8;
