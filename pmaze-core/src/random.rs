use rand::{thread_rng, Rng, SeedableRng as _};

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

/// Seeded generator, or one seeded from entropy. The seed actually used is returned, so the
/// maze can be reproduced later.
pub fn random_source(seed: Option<u64>) -> (Random, u64) {
    let seed = seed.unwrap_or_else(|| thread_rng().gen());
    (Random::seed_from_u64(seed), seed)
}

/// Uniformly chosen index into a collection of `len` items.
///
/// Panics if `len` is zero.
pub fn choose_index<R: Rng + ?Sized>(rng: &mut R, len: usize) -> usize {
    rng.gen_range(0..len)
}

/// Two distinct indices below `len`, uniform over all ordered pairs.
///
/// Panics if `len < 2`.
pub fn sample_pair<R: Rng + ?Sized>(rng: &mut R, len: usize) -> (usize, usize) {
    assert!(len >= 2, "cannot sample two distinct items out of {len}");

    let first = rng.gen_range(0..len);
    // skip over `first`, so the second pick is uniform over the rest
    let mut second = rng.gen_range(0..len - 1);
    if second >= first {
        second += 1;
    }

    (first, second)
}
