/// Failure taxonomy shared by both codecs
///
/// The original wire format signalled failures with prefixed strings
/// ("NullValue", "ERRBL1~..."), which a caller cannot reliably tell apart
/// from legitimate decoded text. Here every operation returns a `Result`
/// with one variant per failure class instead.
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Input was empty or all-whitespace.
    #[error("EMPTY: input is empty or blank")]
    EmptyInput,

    /// Keymix encode: a character could not be serialized into a product.
    #[error("SERIALIZE: {0}")]
    Serialization(String),

    /// Keymix encode: check digit parsing or key insertion failed.
    #[error("KEYMIX: {0}")]
    KeyMix(String),

    /// Keymix decode: check digit parsing or key digit location failed.
    #[error("KEYEXTRACT: {0}")]
    KeyExtraction(String),

    /// Keymix decode: a segment could not be recovered into a character.
    #[error("RECOVER: {0}")]
    Recovery(String),

    /// Submap codec: a numeric segment or character code was invalid.
    #[error("CONVERT: {0}")]
    Conversion(String),
}
