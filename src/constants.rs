//! Capacity policy for the ring storage.

/// Capacity allocated by the first insertion into an unallocated buffer.
pub const MIN_CAPACITY: usize = 4;
/// Multiplier applied to the capacity when the buffer is full.
pub const GROWTH_FACTOR: usize = 2;

// Wrap-around relies on masking, so every capacity must stay a power of two.
const _: () = assert!(MIN_CAPACITY.is_power_of_two() && GROWTH_FACTOR.is_power_of_two());
