//! Constants shared by the governance contracts

// ===== Token Constants =====

/// Number of decimals of the governance token
pub const TOKEN_DECIMALS: u32 = 18;

/// Base units in one whole token (10^18)
pub const TOKEN_UNIT: i128 = 1_000_000_000_000_000_000;

// ===== Governance Constants =====

/// Maximum proposal title length in bytes
pub const MAX_TITLE_LEN: u32 = 128;

/// Maximum proposal description length in bytes
pub const MAX_DESCRIPTION_LEN: u32 = 1024;

// ===== Storage TTL Constants (in ledgers) =====

/// Approximate number of ledgers closed per day (5s close time)
pub const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage is extended to this many ledgers on every write
pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;

/// Instance storage is only extended once its TTL drops below this
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Persistent entries (balances, proposals, votes) are extended to this
pub const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// Persistent entries are only extended once their TTL drops below this
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;
