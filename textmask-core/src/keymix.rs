/// Multiplicative key-embedding codec
///
/// Encoding multiplies every character code by a random two-digit key,
/// joins the products with a delimiter and splices the key back into the
/// result at a position picked by the last digit of the product string.
/// Decoding pulls the key back out and divides each segment by it.
use rand::Rng;
use rand::rngs::OsRng;

use crate::error::Error;

/// Separator between serialized products. Both characters are non-digits,
/// so the delimiter can never occur inside a product.
pub const DELIMITER: &str = "ß€";

/// Sentinel the original wire format used for blank input. The library
/// reports `Error::EmptyInput` instead; this constant exists for callers
/// that need the wire-compatible string.
pub const EMPTY_SENTINEL: &str = "NullValue";

/// Characters above this code point would need more than one 16-bit code
/// unit and are rejected rather than silently mangled.
const MAX_CODE: u32 = 0xFFFF;

/// Encode `text` with a fresh random key in [10, 99].
pub fn encode(text: &str) -> Result<String, Error> {
    let key = OsRng.gen_range(10..=99);
    encode_with_key(text, key)
}

/// Encode with a caller-pinned key. Kept separate so the data-dependent
/// round-trip behavior can be exercised deterministically.
pub(crate) fn encode_with_key(text: &str, key: u32) -> Result<String, Error> {
    if text.trim().is_empty() {
        return Err(Error::EmptyInput);
    }

    // Product sequence: code * key per character, delimiter-joined.
    let mut products = String::new();
    for ch in text.chars() {
        let code = ch as u32;
        if code > MAX_CODE {
            return Err(Error::Serialization(format!(
                "character {ch:?} (U+{code:04X}) is outside the 16-bit range"
            )));
        }
        if !products.is_empty() {
            products.push_str(DELIMITER);
        }
        products.push_str(&(code * key).to_string());
    }

    // The last character is always a digit by construction; it picks the
    // position where the key digits get spliced in.
    let last = products
        .chars()
        .last()
        .ok_or_else(|| Error::KeyMix("empty product sequence".to_string()))?;
    let check = last
        .to_digit(10)
        .ok_or_else(|| Error::KeyMix(format!("last character {last:?} is not a digit")))?
        as usize;

    // If the check digit points past the end of the string the key is never
    // embedded and the output cannot be decoded. That is the scheme's
    // defined behavior, not something to patch over here.
    let mut mixed = String::with_capacity(products.len() + 2);
    for (count, ch) in products.chars().enumerate() {
        if count == check {
            mixed.push_str(&key.to_string());
        }
        mixed.push(ch);
    }

    Ok(mixed)
}

/// Decode a keymix-encoded string back to the original text.
pub fn decode(encoded: &str) -> Result<String, Error> {
    if encoded.trim().is_empty() {
        return Err(Error::EmptyInput);
    }

    let (key, residual) = extract_key(encoded)?;
    if key == 0 {
        return Err(Error::Recovery("embedded key is zero".to_string()));
    }

    let mut out = String::new();
    for segment in residual.split(DELIMITER) {
        // Splitting can leave empty segments at the edges; skip them.
        if segment.is_empty() {
            continue;
        }
        let product: u32 = segment
            .parse()
            .map_err(|e| Error::Recovery(format!("segment {segment:?}: {e}")))?;
        let code = product / key;
        let ch = char::from_u32(code)
            .ok_or_else(|| Error::Recovery(format!("code {code} is not a valid character")))?;
        out.push(ch);
    }

    Ok(out)
}

/// Locate and strip the embedded key: the last character of the input is
/// the check digit, and the key occupies the two positions it points at.
/// Returns the key and the product string with the key removed.
pub(crate) fn extract_key(encoded: &str) -> Result<(u32, String), Error> {
    let last = encoded
        .chars()
        .last()
        .ok_or_else(|| Error::KeyExtraction("empty input".to_string()))?;
    let check = last
        .to_digit(10)
        .ok_or_else(|| Error::KeyExtraction(format!("last character {last:?} is not a digit")))?
        as usize;

    let mut key_digits = String::new();
    let mut residual = String::with_capacity(encoded.len());
    for (i, ch) in encoded.chars().enumerate() {
        if i == check || i == check + 1 {
            key_digits.push(ch);
        } else {
            residual.push(ch);
        }
    }

    if key_digits.chars().count() != 2 {
        return Err(Error::KeyExtraction(format!(
            "expected 2 key digits at position {check}, found {}",
            key_digits.chars().count()
        )));
    }

    let key = key_digits
        .parse()
        .map_err(|e| Error::KeyExtraction(format!("key {key_digits:?}: {e}")))?;

    Ok((key, residual))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_with_known_key() {
        // 'H' = 72, 'i' = 105; with key 13 the products are 936 and 1365.
        // Product string "936ß€1365" ends in '5', so the key lands at
        // character position 5.
        let encoded = encode_with_key("Hi", 13).unwrap();
        assert_eq!(encoded, "936ß€131365");
    }

    #[test]
    fn test_decode_known_value() {
        assert_eq!(decode("936ß€131365").unwrap(), "Hi");
    }

    #[test]
    fn test_roundtrip_pinned_keys() {
        for key in [10, 13, 42, 77, 99] {
            let encoded = encode_with_key("Hi", key).unwrap();
            assert_eq!(decode(&encoded).unwrap(), "Hi", "key {key}");
        }
    }

    #[test]
    fn test_roundtrip_random_key() {
        // For "Hi" the last product is 105*key, whose last digit is always
        // 0 or 5, so the check-digit condition holds for every key and the
        // round trip is unconditional.
        for _ in 0..50 {
            let encoded = encode("Hi").unwrap();
            assert_eq!(decode(&encoded).unwrap(), "Hi");
        }
    }

    #[test]
    fn test_key_stays_in_range() {
        for _ in 0..50 {
            let encoded = encode("Hi").unwrap();
            let (key, _) = extract_key(&encoded).unwrap();
            assert!((10..=99).contains(&key), "key {key} out of range");
        }
    }

    #[test]
    fn test_check_digit_past_end_skips_key() {
        // 'A' = 65; 65 * 13 = 845, last digit 5 >= length 3, so the key is
        // never inserted. Decoding that output must fail rather than
        // return garbage.
        let encoded = encode_with_key("A", 13).unwrap();
        assert_eq!(encoded, "845");
        assert!(matches!(decode(&encoded), Err(Error::KeyExtraction(_))));
    }

    #[test]
    fn test_single_char_roundtrip_when_key_inserted() {
        // 65 * 12 = 780, last digit 0 < length 3, so the key is embedded
        // at the front and the round trip holds.
        let encoded = encode_with_key("A", 12).unwrap();
        assert_eq!(encoded, "12780");
        assert_eq!(decode(&encoded).unwrap(), "A");
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert_eq!(encode(""), Err(Error::EmptyInput));
        assert_eq!(encode("   "), Err(Error::EmptyInput));
        assert_eq!(decode(""), Err(Error::EmptyInput));
        assert_eq!(decode("  \t "), Err(Error::EmptyInput));
    }

    #[test]
    fn test_decode_rejects_non_digit_check_char() {
        assert!(matches!(decode("936ß"), Err(Error::KeyExtraction(_))));
    }

    #[test]
    fn test_decode_rejects_unparsable_segment() {
        // Check digit 0 points at a valid "12" key, but the first segment
        // is not a number.
        assert!(matches!(decode("12xyzß€780"), Err(Error::Recovery(_))));
    }

    #[test]
    fn test_encode_rejects_supra_bmp() {
        assert!(matches!(
            encode_with_key("😀", 10),
            Err(Error::Serialization(_))
        ));
    }
}
