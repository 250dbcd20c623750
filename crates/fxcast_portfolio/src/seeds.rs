//! Deterministic sub-seed derivation for multi-asset batches.
//!
//! Each asset in a batch gets its own random stream so the assets are
//! statistically independent, yet the whole batch stays reproducible from
//! a single base seed. Sub-seeds are the outputs of a SplitMix64 stream
//! seeded with the base seed, indexed by the asset's insertion position.
//! The derivation depends only on `(base_seed, position)`, never on
//! execution order or thread scheduling.

/// Advances a SplitMix64 state and returns the next output.
///
/// Standard constants from Steele, Lea & Flood (2014); the same mixer
/// `rand` uses to expand a `u64` into a full seed.
#[inline]
fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Derives one sub-seed per asset position from a base seed.
///
/// Element `i` of the result seeds the random stream of the asset at
/// insertion position `i`. The mapping is a pure function of
/// `(base_seed, i)`; deriving the vector up front is what makes a
/// parallel batch independent of scheduling.
///
/// # Arguments
///
/// * `base_seed` - Batch-level seed
/// * `n` - Number of assets
///
/// # Examples
///
/// ```
/// use fxcast_portfolio::seeds::derive_sub_seeds;
///
/// let seeds = derive_sub_seeds(42, 3);
/// assert_eq!(seeds.len(), 3);
/// assert_eq!(seeds, derive_sub_seeds(42, 3));
/// ```
pub fn derive_sub_seeds(base_seed: u64, n: usize) -> Vec<u64> {
    let mut state = base_seed;
    (0..n).map(|_| splitmix64(&mut state)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vectors_base_zero() {
        // SplitMix64 reference outputs for state 0.
        assert_eq!(
            derive_sub_seeds(0, 4),
            vec![
                16294208416658607535,
                7960286522194355700,
                487617019471545679,
                17909611376780542444,
            ]
        );
    }

    #[test]
    fn test_known_vectors_base_42() {
        assert_eq!(
            derive_sub_seeds(42, 3),
            vec![
                13679457532755275413,
                2949826092126892291,
                5139283748462763858,
            ]
        );
    }

    #[test]
    fn test_prefix_stability() {
        // Adding assets never changes the seeds of earlier positions.
        let three = derive_sub_seeds(42, 3);
        let five = derive_sub_seeds(42, 5);
        assert_eq!(&five[..3], &three[..]);
    }

    #[test]
    fn test_distinct_within_batch() {
        let seeds = derive_sub_seeds(42, 64);
        for (i, a) in seeds.iter().enumerate() {
            for b in seeds.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_different_base_seeds_diverge() {
        assert_ne!(derive_sub_seeds(1, 4), derive_sub_seeds(2, 4));
    }

    #[test]
    fn test_empty_batch() {
        assert!(derive_sub_seeds(42, 0).is_empty());
    }
}
