//! Shamir core
//!
//! Splits a textual secret into N encoded shares such that any K of them
//! reconstruct it exactly, while any K-1 yield no information. This crate
//! is the cryptographic core only: GF(256) arithmetic, the byte-wise split
//! and combine algorithms, share framing with length-hiding padding, and
//! the Base62 transport encoding. It makes no network calls and performs
//! no disk I/O.

#![deny(missing_docs)]
#![deny(unused_crate_dependencies)]
#![deny(unused_results)]

mod base62;
mod error;
mod gf256;
mod rng;
mod sensitive;
mod share;
mod shamir;
mod validate;

#[cfg(test)]
mod tests;

pub use error::Error;
pub use shamir::{combine, generate_random_secret, split, validate_shares, DEFAULT_RANDOM_SECRET_ALPHABET};
pub use validate::sanitize_text;
