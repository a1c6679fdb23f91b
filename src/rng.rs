//! Secure RNG facade (C1).
//!
//! Every random draw in the crate (padding bytes, polynomial coefficients,
//! transport filler) goes through this module. If the OS entropy source is
//! ever unavailable, callers get [`Error::NoEntropy`]; there is no
//! non-cryptographic fallback path.

use crate::error::Error;
use rand::{Rng, RngCore};

/// Draw `n` cryptographically secure random bytes.
pub(crate) fn random_bytes(n: usize) -> Result<Vec<u8>, Error> {
    self_test()?;
    let mut buf = vec![0u8; n];
    rand::rngs::OsRng.fill_bytes(&mut buf);
    Ok(buf)
}

/// Draw a uniformly distributed integer in `[lo, hi]` inclusive.
///
/// `hi` must be greater than or equal to `lo`; callers in this crate only
/// ever invoke it with fixed, known-good ranges (e.g. `1..=255`), so no
/// separate error variant is defined for a malformed range.
pub(crate) fn random_int(lo: u32, hi: u32) -> Result<u32, Error> {
    self_test()?;
    Ok(rand::rngs::OsRng.gen_range(lo..=hi))
}

/// Self-test the CSPRNG: draw two independent 32-byte blocks and assert
/// they are equal in length and different in content. A source that
/// returns identical blocks is statistically certain to be stuck.
pub(crate) fn self_test() -> Result<(), Error> {
    let mut a = [0u8; 32];
    let mut b = [0u8; 32];
    rand::rngs::OsRng.fill_bytes(&mut a);
    rand::rngs::OsRng.fill_bytes(&mut b);
    if a.len() != b.len() || a == b {
        return Err(Error::NoEntropy);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_bytes_has_requested_length() {
        assert_eq!(random_bytes(32).unwrap().len(), 32);
    }

    #[test]
    fn random_int_stays_in_range() {
        for _ in 0..1000 {
            let v = random_int(1, 255).unwrap();
            assert!((1..=255).contains(&v));
        }
    }

    #[test]
    fn self_test_passes_on_a_working_source() {
        assert!(self_test().is_ok());
    }
}
