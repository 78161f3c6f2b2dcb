//! Buffer sizing constants.

/// Capacity of the carry-over buffer persisted across suspensions.
///
/// Must be at least as large as the widest atomic field read performed by
/// any parser (a 32-byte transaction id). Readers bound every individual
/// read to this width, so a suspended parse always leaves fewer than
/// `CARRY_CAPACITY` unconsumed bytes behind.
pub const CARRY_CAPACITY: usize = 32;

/// Longest possible compact-size encoding (0xff discriminant + u64).
pub const MAX_COMPACT_SIZE_LEN: usize = 9;
