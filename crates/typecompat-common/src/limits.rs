//! Centralized limits and thresholds.
//!
//! Keeping these in one place avoids drifting copies of the same magic
//! number across crates.

// =============================================================================
// Identity Formatting
// =============================================================================

/// Number of hex digits in an identity hash string.
pub const IDENTITY_HEX_DIGITS: usize = 6;

/// Mask that folds an identity hash into `IDENTITY_HEX_DIGITS` hex digits.
pub const IDENTITY_HASH_MASK: u64 = (1 << (IDENTITY_HEX_DIGITS * 4)) - 1;
