//! Dual-hash addressing: `h_low`/`h_high` selection driven by the split
//! pointer `p` and the logical capacity `M`.
//!
//! Grounded on `original_source/src/map.c`'s `h0`/`h1`/`getpos`: `h0` and
//! `h1` there use `%`, which on the C source's `uint64_t` operands is
//! exactly `mod`. `cap` there is always a power of two, so `h_low`/`h_high`
//! below could use a mask instead of `%`, but we keep `%` to stay
//! byte-for-byte equivalent to the reference even if `capacity` were ever
//! relaxed to a non-power-of-two (it never is in practice: `TableConfig`
//! enforces `m_min.is_power_of_two()` and every split/shrink step only
//! ever doubles or halves `capacity`).

/// `h_low(k) = H(k) mod M`
#[inline]
pub fn h_low(hash: u64, capacity: usize) -> usize {
    (hash % capacity as u64) as usize
}

/// `h_high(k) = H(k) mod 2M`
#[inline]
pub fn h_high(hash: u64, capacity: usize) -> usize {
    (hash % (capacity as u64 * 2)) as usize
}

/// Computes the directory index a key's hash currently resolves to, given
/// the table's `(capacity, split_pointer)` pair.
///
/// A key whose `h_low` address is below `split_pointer` has already been
/// redistributed to the higher-width address space and must be addressed
/// by `h_high`; otherwise it is still addressed by `h_low`.
#[inline]
pub fn getpos(hash: u64, capacity: usize, split_pointer: usize) -> usize {
    let low = h_low(hash, capacity);
    if low >= split_pointer {
        low
    } else {
        h_high(hash, capacity)
    }
}
