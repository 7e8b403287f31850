/// Substitution-mapping codec
///
/// Encoding serializes every character code as decimal digits joined by a
/// delimiter, then remaps each digit and the delimiter glyph through a
/// fixed one-to-one table. Decoding applies the inverse table and parses
/// the segments back into characters.
use crate::error::Error;

/// Separator between serialized character codes. A non-digit glyph, so it
/// never collides with the all-decimal segments.
pub const DELIMITER: char = 'ɯ';

/// Sentinel the original wire format used for blank input; see
/// [`crate::keymix::EMPTY_SENTINEL`] for the rationale.
pub const EMPTY_SENTINEL: &str = "NULVAL";

/// Characters above this code point are rejected, same bound as keymix.
const MAX_CODE: u32 = 0xFFFF;

/// The fixed remapping: the ten decimal digits and the delimiter glyph.
/// One-to-one in both directions; everything else passes through untouched.
const TABLE: [(char, char); 11] = [
    ('0', 'A'),
    ('1', 'B'),
    ('2', 'C'),
    ('3', 'D'),
    ('4', 'E'),
    ('5', 'F'),
    ('6', 'G'),
    ('7', 'H'),
    ('8', 'I'),
    ('9', 'J'),
    ('ɯ', 'R'),
];

fn map_forward(c: char) -> Option<char> {
    TABLE.iter().find(|&&(from, _)| from == c).map(|&(_, to)| to)
}

fn map_reverse(c: char) -> Option<char> {
    TABLE.iter().find(|&&(_, to)| to == c).map(|&(from, _)| from)
}

/// Apply the substitution table to every character of `s`.
pub fn substitute(s: &str) -> String {
    s.chars().map(|c| map_forward(c).unwrap_or(c)).collect()
}

/// Apply the inverse of the substitution table to every character of `s`.
pub fn unsubstitute(s: &str) -> String {
    s.chars().map(|c| map_reverse(c).unwrap_or(c)).collect()
}

/// Encode `text` into its substituted serialized form.
pub fn encode(text: &str) -> Result<String, Error> {
    if text.trim().is_empty() {
        return Err(Error::EmptyInput);
    }

    let mut serialized = String::new();
    for (i, ch) in text.chars().enumerate() {
        let code = ch as u32;
        if code > MAX_CODE {
            return Err(Error::Conversion(format!(
                "character {ch:?} (U+{code:04X}) is outside the 16-bit range"
            )));
        }
        if i > 0 {
            serialized.push(DELIMITER);
        }
        serialized.push_str(&code.to_string());
    }

    Ok(substitute(&serialized))
}

/// Decode a submap-encoded string back to the original text.
pub fn decode(encoded: &str) -> Result<String, Error> {
    let serialized = unsubstitute(encoded);

    let mut out = String::new();
    for segment in serialized.split(DELIMITER) {
        let code: u32 = segment
            .parse()
            .map_err(|e| Error::Conversion(format!("segment {segment:?}: {e}")))?;
        let ch = char::from_u32(code)
            .ok_or_else(|| Error::Conversion(format!("code {code} is not a valid character")))?;
        out.push(ch);
    }

    Ok(out)
}
