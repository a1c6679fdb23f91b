//! Error taxonomy for the Shamir core.

/// Every way a split, combine, or validation call can fail.
///
/// Variants are grouped in the doc order of the error taxonomy they belong
/// to (parameter/secret validation, entropy, share parsing, reconstruction).
#[allow(missing_docs)]
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("total shares must be between 2 and 255, got {0}")]
    InvalidTotalShares(usize),

    #[error("threshold must be between 2 and total shares ({total}), got {threshold}")]
    InvalidThreshold { total: u8, threshold: usize },

    #[error("secret must be between 1 and {max} characters, got {len}")]
    InvalidSecretLength { len: usize, max: usize },

    #[error("secret contains a NUL byte, which is not permitted")]
    SecretContainsNul,

    #[error("the operating system's CSPRNG is unavailable or failed its self-test")]
    NoEntropy,

    #[error("no shares were provided")]
    NoShares,

    #[error("at least 2 shares are required to reconstruct, got {0}")]
    InsufficientShares(usize),

    #[error("share is too short to contain a valid header")]
    ShareTooShort,

    #[error("share contains a character outside the Base62 alphabet: {0:?}")]
    BadAlphabet(char),

    #[error("share declares share id {0}, which is outside 1..=255")]
    BadShareId(u32),

    #[error("share declares a padded length that does not match the available bytes")]
    LengthMismatch,

    #[error("shares in the set declare different original lengths")]
    InconsistentLength,

    #[error("legacy share is malformed hex: {0}")]
    BadHex(#[from] hex::FromHexError),

    #[error("two shares carry the same share id: {0}")]
    DuplicateX(u32),

    #[error("division by zero in GF(256)")]
    DivByZero,

    #[error("reconstructed bytes are not valid UTF-8")]
    BadUtf8,

    #[error("random-secret alphabet must not be empty")]
    EmptyAlphabet,
}
