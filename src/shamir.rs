//! Shamir engine (C5): byte-wise split over a padded plaintext, and
//! reconstruction from K shares via Lagrange interpolation.
//!
//! Byte-wise GF(256) splitting, rather than one polynomial over a large
//! field, bounds every arithmetic op to a 256-entry table lookup and makes
//! the scheme trivially parallelizable per byte (this crate does not
//! parallelize it, but the structure would allow it).
//! Random padding up to 200 plaintext bytes hides the secret's length at
//! the frame layer; further filler out to 250 transport characters hides
//! it again at the Base62 layer. See [`crate::share::frame`].

use crate::error::Error;
use crate::gf256;
use crate::rng;
use crate::sensitive::Registry;
use crate::share::{self, ParsedShare};
use crate::validate;
use std::collections::HashSet;
use zeroize::Zeroizing;

/// Minimum padded-plaintext length, in bytes, before a secret is split.
/// Chosen so the natural Base62 encoding of the framed share comfortably
/// exceeds the 250-character transport minimum for typical thresholds.
const MIN_PADDED_LEN: usize = 200;

/// Default alphabet for [`generate_random_secret`] when `alphabet` is
/// `None`: 70 characters spanning letters, digits, and a handful of
/// punctuation symbols.
pub const DEFAULT_RANDOM_SECRET_ALPHABET: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*";

/// Split `secret` into `total` shares, any `threshold` of which
/// reconstruct it exactly.
///
/// Fails with [`Error::InvalidTotalShares`]/[`Error::InvalidThreshold`] if
/// the parameters are out of range, [`Error::InvalidSecretLength`]/
/// [`Error::SecretContainsNul`] if the secret is rejected, or
/// [`Error::NoEntropy`] if the CSPRNG is unavailable.
pub fn split(secret: &str, total: u8, threshold: u8) -> Result<Vec<String>, Error> {
    validate::validate_params(total, threshold)?;
    validate::validate_secret(secret, validate::SPLIT_MAX_SECRET_LEN)?;

    let mut registry = Registry::new();

    let original_len = secret.len();
    let padded_handle = registry.adopt(secret.as_bytes().to_vec());

    if registry.get(padded_handle).len() < MIN_PADDED_LEN {
        let deficit = MIN_PADDED_LEN - registry.get(padded_handle).len();
        for _ in 0..deficit {
            let filler = rng::random_int(1, 255)? as u8;
            registry.get_mut(padded_handle).push(filler);
        }
    }
    let padded_len = registry.get(padded_handle).len();

    let tables = gf256::tables();
    let share_handles: Vec<usize> = (0..total)
        .map(|_| registry.adopt(Vec::with_capacity(padded_len)))
        .collect();

    for i in 0..padded_len {
        let byte = registry.get(padded_handle)[i];

        let mut coeffs: Zeroizing<Vec<u8>> = Zeroizing::new(Vec::with_capacity(threshold as usize));
        coeffs.push(byte);
        for _ in 1..threshold {
            coeffs.push(rng::random_int(1, 255)? as u8);
        }

        for (share_idx, &handle) in share_handles.iter().enumerate() {
            let x = (share_idx + 1) as u8;
            let value = tables.poly_eval(&coeffs, x);
            registry.get_mut(handle).push(value);
        }
    }

    let mut out = Vec::with_capacity(total as usize);
    for (idx, &handle) in share_handles.iter().enumerate() {
        let id = (idx + 1) as u8;
        out.push(share::frame(id, original_len as u16, registry.get(handle))?);
    }

    registry.clear();
    Ok(out)
}

/// Reconstruct the secret from a set of shares. Any `threshold`-sized
/// subset of a matching `split` call's output reconstructs the same
/// secret; fewer shares, or shares from mismatched sets, fail before ever
/// returning a plausible-looking wrong answer only when the mismatch is
/// structurally detectable (duplicate ids, inconsistent lengths, bad
/// UTF-8); reconstruction from the wrong K shares of an unrelated split
/// is unauthenticated by design and returns garbage without signalling.
pub fn combine(shares: &[String]) -> Result<String, Error> {
    if shares.is_empty() {
        return Err(Error::NoShares);
    }
    if shares.len() < 2 {
        return Err(Error::InsufficientShares(shares.len()));
    }

    let parsed: Vec<ParsedShare> = shares.iter().map(|s| share::parse(s)).collect::<Result<_, _>>()?;

    let mut seen_ids = HashSet::new();
    for p in &parsed {
        if !seen_ids.insert(p.id) {
            return Err(Error::DuplicateX(p.id as u32));
        }
    }

    let original_len = parsed[0].original_len;
    let mut padded_len = None;
    for p in &parsed {
        if p.original_len != original_len {
            return Err(Error::InconsistentLength);
        }
        if p.values.len() < original_len {
            return Err(Error::LengthMismatch);
        }
        // current-format shares also declare P; when more than one is
        // present in the set, they must all agree (mixed sets with legacy
        // shares, which carry no P, are reconciled on L alone).
        if let Some(p_len) = p.padded_len {
            match padded_len {
                None => padded_len = Some(p_len),
                Some(expected) if expected != p_len => return Err(Error::LengthMismatch),
                _ => {}
            }
        }
    }

    let tables = gf256::tables();
    let mut registry = Registry::new();
    let mut secret_bytes = Vec::with_capacity(original_len);

    for i in 0..original_len {
        let mut flat = Vec::with_capacity(parsed.len() * 2);
        for p in &parsed {
            flat.push(p.id);
            flat.push(p.values[i]);
        }
        let handle = registry.adopt(flat);
        let points: Vec<(u8, u8)> = registry
            .get(handle)
            .chunks_exact(2)
            .map(|c| (c[0], c[1]))
            .collect();
        secret_bytes.push(tables.lagrange_at_zero(&points)?);
    }
    registry.clear();

    match String::from_utf8(secret_bytes) {
        Ok(s) => Ok(s),
        Err(e) => {
            use zeroize::Zeroize;
            let mut bytes = e.into_bytes();
            bytes.zeroize();
            Err(Error::BadUtf8)
        }
    }
}

/// Generate a cryptographically secure random secret of `length`
/// characters, drawn from `alphabet` (or [`DEFAULT_RANDOM_SECRET_ALPHABET`]
/// if `None`). `length` must be in `1..=50_000`.
pub fn generate_random_secret(length: usize, alphabet: Option<&str>) -> Result<String, Error> {
    if length == 0 || length > validate::GLOBAL_MAX_SECRET_LEN {
        return Err(Error::InvalidSecretLength {
            len: length,
            max: validate::GLOBAL_MAX_SECRET_LEN,
        });
    }

    let alphabet = alphabet.unwrap_or(DEFAULT_RANDOM_SECRET_ALPHABET);
    let chars: Vec<char> = alphabet.chars().collect();
    if chars.is_empty() {
        return Err(Error::EmptyAlphabet);
    }

    let mut out = String::with_capacity(length);
    for _ in 0..length {
        let idx = rng::random_int(0, chars.len() as u32 - 1)? as usize;
        out.push(chars[idx]);
    }
    Ok(out)
}

/// Pre-check a set of shares for UX purposes: syntactically valid,
/// parseable, at least two of them, and no duplicate share ids. Returns a
/// human-readable message rather than an [`Error`] because callers use
/// this to drive interactive feedback, not control flow.
pub fn validate_shares(shares: &[String]) -> (bool, String) {
    if shares.is_empty() {
        return (false, "no shares provided".to_string());
    }
    if shares.len() < 2 {
        return (false, "at least 2 shares are required".to_string());
    }

    let mut seen_ids = HashSet::new();
    let mut secret_length = None;

    for (i, s) in shares.iter().enumerate() {
        if let Err(e) = validate::validate_share_syntax(s) {
            return (false, format!("share {}: {e}", i + 1));
        }
        let parsed = match share::parse(s) {
            Ok(p) => p,
            Err(e) => return (false, format!("share {}: {e}", i + 1)),
        };
        if !seen_ids.insert(parsed.id) {
            return (false, format!("duplicate share id: {}", parsed.id));
        }
        match secret_length {
            None => secret_length = Some(parsed.original_len),
            Some(expected) if expected != parsed.original_len => {
                return (false, format!("share {} has inconsistent length", i + 1));
            }
            _ => {}
        }
    }

    (true, String::new())
}
