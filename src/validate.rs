//! Input validators (C6): parameter, secret, and share-syntax checks.

use crate::error::Error;

/// Secret length ceiling enforced by the split entry point.
pub const SPLIT_MAX_SECRET_LEN: usize = 10_000;

/// Secret length ceiling enforced everywhere else (e.g. random-secret
/// generation). The two caps are intentionally different: splitting fans
/// a secret out into `total` shares, each carrying the full padded
/// length, so it is capped tighter than a bare random string would be.
pub const GLOBAL_MAX_SECRET_LEN: usize = 50_000;

/// Minimum length a syntactically valid share string may have.
const MIN_SHARE_SYNTAX_LEN: usize = 10;

/// Validate `(total, threshold)`: `2 <= total <= 255`,
/// `2 <= threshold <= total`. `threshold == 1` is rejected even though it
/// is mathematically well-defined, because a threshold of one provides no
/// secrecy.
pub(crate) fn validate_params(total: u8, threshold: u8) -> Result<(), Error> {
    if total < 2 {
        return Err(Error::InvalidTotalShares(total as usize));
    }
    if threshold < 2 || threshold as u16 > total as u16 {
        return Err(Error::InvalidThreshold {
            total,
            threshold: threshold as usize,
        });
    }
    Ok(())
}

/// Validate a secret: non-empty, within `max_len`, and free of NUL bytes.
pub(crate) fn validate_secret(secret: &str, max_len: usize) -> Result<(), Error> {
    if secret.is_empty() || secret.len() > max_len {
        return Err(Error::InvalidSecretLength {
            len: secret.len(),
            max: max_len,
        });
    }
    if secret.contains('\0') {
        return Err(Error::SecretContainsNul);
    }
    Ok(())
}

/// Validate the syntax of a single share string, independent of whether it
/// parses successfully: it must be non-empty, at least
/// [`MIN_SHARE_SYNTAX_LEN`] characters, and (after an optional `-` split)
/// restricted to the Base62 alphabet.
pub(crate) fn validate_share_syntax(share: &str) -> Result<(), Error> {
    if share.is_empty() {
        return Err(Error::ShareTooShort);
    }
    if share.len() < MIN_SHARE_SYNTAX_LEN {
        return Err(Error::ShareTooShort);
    }

    let parts: Vec<&str> = share.splitn(2, '-').collect();
    for part in &parts {
        if let Some(bad) = part.chars().find(|c| !c.is_ascii_alphanumeric()) {
            return Err(Error::BadAlphabet(bad));
        }
    }
    Ok(())
}

/// Strip control characters (code points below 32) from `t`, preserving
/// `\n`, `\r`, and `\t`. Intended for sanitizing clipboard/GUI-provided
/// text before it reaches the core.
pub fn sanitize_text(t: &str) -> String {
    t.chars()
        .filter(|&c| c as u32 >= 32 || matches!(c, '\n' | '\r' | '\t'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_accept_valid_range() {
        assert!(validate_params(3, 2).is_ok());
        assert!(validate_params(255, 255).is_ok());
    }

    #[test]
    fn params_reject_threshold_one() {
        assert!(matches!(
            validate_params(5, 1),
            Err(Error::InvalidThreshold { .. })
        ));
    }

    #[test]
    fn params_reject_threshold_above_total() {
        assert!(matches!(
            validate_params(3, 4),
            Err(Error::InvalidThreshold { .. })
        ));
    }

    #[test]
    fn params_reject_total_below_two() {
        assert!(matches!(
            validate_params(1, 1),
            Err(Error::InvalidTotalShares(1))
        ));
    }

    #[test]
    fn secret_rejects_empty_and_nul() {
        assert!(validate_secret("", 100).is_err());
        assert!(matches!(
            validate_secret("has\0null", 100),
            Err(Error::SecretContainsNul)
        ));
    }

    #[test]
    fn secret_rejects_too_long() {
        let s = "a".repeat(11);
        assert!(validate_secret(&s, 10).is_err());
    }

    #[test]
    fn sanitize_strips_control_chars_but_keeps_whitespace() {
        let input = "a\u{0007}b\nc\td\re";
        assert_eq!(sanitize_text(input), "ab\nc\td\re");
    }

    #[test]
    fn share_syntax_rejects_short_and_bad_alphabet() {
        assert!(validate_share_syntax("short").is_err());
        assert!(matches!(
            validate_share_syntax("abc!defghijklmno"),
            Err(Error::BadAlphabet('!'))
        ));
        assert!(validate_share_syntax("abcdefghijklmnop").is_ok());
    }
}
