//! Percent-decoding for query string components.

use crate::constants::MAX_URL_DECODED_LEN;

/// Error returned when URL decoding fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum DecodeError {
    /// Decoded output would exceed maximum length.
    #[error("url decoded output exceeds maximum length ({}KB limit)", MAX_URL_DECODED_LEN / 1024)]
    TooLong,
}

/// Decode `%XX` sequences and `+` as space.
///
/// Malformed escapes are kept verbatim. Invalid UTF-8 is replaced lossily.
///
/// ```
/// use jsonapi_params::url_decode;
///
/// assert_eq!(url_decode("filter%5Bcolor%5D").unwrap(), "filter[color]");
/// assert_eq!(url_decode("red+car").unwrap(), "red car");
/// assert_eq!(url_decode("100%").unwrap(), "100%");
/// ```
pub fn url_decode(s: &str) -> Result<String, DecodeError> {
    let mut bytes = Vec::with_capacity(s.len());
    let mut input = s.bytes();

    while let Some(b) = input.next() {
        if bytes.len() >= MAX_URL_DECODED_LEN {
            return Err(DecodeError::TooLong);
        }

        match b {
            b'%' => {
                let h1 = input.next();
                let h2 = input.next();
                match (h1, h2) {
                    (Some(h1), Some(h2)) => match (hex_value(h1), hex_value(h2)) {
                        (Some(hi), Some(lo)) => bytes.push(hi << 4 | lo),
                        _ => bytes.extend_from_slice(&[b'%', h1, h2]),
                    },
                    (Some(h1), None) => bytes.extend_from_slice(&[b'%', h1]),
                    _ => bytes.push(b'%'),
                }
            },
            b'+' => bytes.push(b' '),
            _ => bytes.push(b),
        }
    }

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

const fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
