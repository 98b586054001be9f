//! Position-weighted bucket hash.
//!
//! Each byte of the key is weighted by its zero-based offset before being
//! accumulated modulo the capacity, so keys built from the same bytes in a
//! different order usually land in different buckets. The first byte always
//! has weight 0. This is a teaching-grade hash: it is trivially steerable and
//! must not face adversarial input.

use core::num::NonZeroUsize;

/// Map `key` to a bucket in `[0, capacity)`.
///
/// Bytes are the UTF-8 encoding of `key`, read as unsigned codes. The
/// accumulation is exact: `h = (h + byte * i) mod capacity` without any
/// intermediate overflow, whatever the key length or capacity.
pub fn bucket_index(key: &str, capacity: NonZeroUsize) -> usize {
    let cap = capacity.get() as u128;
    let mut h: u128 = 0;
    for (i, &b) in key.as_bytes().iter().enumerate() {
        // (b * i) mod cap == (b * (i mod cap)) mod cap; both factors < 2^64.
        let weighted = (u128::from(b) * (i as u128 % cap)) % cap;
        h = (h + weighted) % cap;
    }
    h as usize
}
