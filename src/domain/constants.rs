use std::ops::RangeInclusive;

/// Largest accepted input: every product up to `BOUND * 10` fits in an `i32`.
pub const BOUND: i32 = i32::MAX / 10;

pub const MULTIPLIERS: RangeInclusive<i32> = 1..=10;

/// Default cap on a single input line, terminator excluded.
pub const DEFAULT_MAX_LINE_BYTES: u64 = 64 * 1024;
