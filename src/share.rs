//! Share framer (C4): header layout, length-hiding padding, and parsing
//! with fallback to the two legacy formats.
//!
//! Current format (5-byte big-endian header):
//! `[ShareId:1][OriginalLength:2][PaddedLength:2][ShareValues:P]`, Base62
//! encoded and padded with further Base62-encoded random bytes to a minimum
//! of 250 characters. Legacy variant A is the pre-padding design
//! (`[ShareId:1][L:1][Values:L]`, Base62 encoded, accepted on parse only).
//! Legacy variant B is the dash-separated hex format
//! (`"HH-HHHH…"`), also accepted on parse only.

use crate::base62;
use crate::error::Error;
use crate::rng;

/// Minimum length, in characters, of an emitted share string.
pub(crate) const MIN_SHARE_LEN: usize = 250;

/// A share as recovered by parsing, independent of which wire format it
/// arrived in.
pub(crate) struct ParsedShare {
    /// Share identifier, 1..=255.
    pub(crate) id: u8,
    /// Original secret length, as declared by the share.
    pub(crate) original_len: usize,
    /// Share values, one byte per plaintext byte position covered by this
    /// share. Current-format shares carry `padded_len` values; legacy
    /// shares carry exactly `original_len` values.
    pub(crate) values: Vec<u8>,
    /// Declared padded length, present only for current-format shares.
    /// Legacy formats carry no separate `P` field.
    pub(crate) padded_len: Option<usize>,
}

/// Frame one share's raw values into its transport string.
///
/// `id` is the share identifier, `original_len` is `L`, and `values` is the
/// padded-length `ShareValues` vector (`P` bytes).
pub(crate) fn frame(id: u8, original_len: u16, values: &[u8]) -> Result<String, Error> {
    let padded_len = values.len() as u16;

    let mut buf = Vec::with_capacity(5 + values.len());
    buf.push(id);
    buf.extend_from_slice(&original_len.to_be_bytes());
    buf.extend_from_slice(&padded_len.to_be_bytes());
    buf.extend_from_slice(values);

    let mut encoded = base62::encode(&buf);
    if encoded.len() < MIN_SHARE_LEN {
        // Keep drawing filler until the Base62 expansion of the random
        // bytes covers the shortfall; a single byte can encode to as few
        // as zero extra characters once the running total digit carries,
        // so request a comfortable multiple of the remaining need.
        while encoded.len() < MIN_SHARE_LEN {
            let needed_chars = MIN_SHARE_LEN - encoded.len();
            let filler_bytes = needed_chars + 8;
            let filler: Vec<u8> = (0..filler_bytes)
                .map(|_| rng::random_int(1, 255).map(|v| v as u8))
                .collect::<Result<_, _>>()?;
            encoded.push_str(&base62::encode(&filler));
        }
        encoded.truncate(MIN_SHARE_LEN);
    }
    Ok(encoded)
}

/// Parse a share string, trying the current format, then legacy variant A
/// (Base62, 1-byte length), then legacy variant B (dash-separated hex).
pub(crate) fn parse(s: &str) -> Result<ParsedShare, Error> {
    if let Some(dash) = s.find('-') {
        return parse_legacy_hex(s, dash);
    }
    parse_base62(s)
}

fn parse_base62(s: &str) -> Result<ParsedShare, Error> {
    let decoded = base62::decode(s)?;

    if decoded.len() >= 5 {
        let id = decoded[0];
        if id == 0 {
            return Err(Error::BadShareId(0));
        }
        let original_len = u16::from_be_bytes([decoded[1], decoded[2]]) as usize;
        let padded_len = u16::from_be_bytes([decoded[3], decoded[4]]) as usize;
        let tail = &decoded[5..];
        if tail.len() < padded_len {
            return Err(Error::LengthMismatch);
        }
        let values = tail[..padded_len].to_vec();
        return Ok(ParsedShare {
            id,
            original_len,
            values,
            padded_len: Some(padded_len),
        });
    }

    if decoded.len() >= 2 {
        let id = decoded[0];
        if id == 0 {
            return Err(Error::BadShareId(0));
        }
        let original_len = decoded[1] as usize;
        let tail = &decoded[2..];
        if tail.len() < original_len {
            return Err(Error::LengthMismatch);
        }
        let values = tail[..original_len].to_vec();
        return Ok(ParsedShare {
            id,
            original_len,
            values,
            padded_len: None,
        });
    }

    Err(Error::ShareTooShort)
}

fn parse_legacy_hex(s: &str, dash: usize) -> Result<ParsedShare, Error> {
    let (id_hex, values_hex) = s.split_at(dash);
    let values_hex = &values_hex[1..];

    let id = u8::from_str_radix(id_hex, 16).map_err(|_| Error::BadShareId(0))?;
    if id == 0 {
        return Err(Error::BadShareId(0));
    }

    let values = hex::decode(values_hex)?;
    let original_len = values.len();
    Ok(ParsedShare {
        id,
        original_len,
        values,
        padded_len: None,
    })
}
