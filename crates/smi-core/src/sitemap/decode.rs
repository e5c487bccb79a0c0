//! Payload decoding for exported request/response bodies.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::BoxError;

/// Transport encoding of a `<request>`/`<response>` element's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadEncoding {
    Base64,
    Raw,
}

impl PayloadEncoding {
    /// Reads the export's `base64` attribute. Absent means base64, which is
    /// what the export writes unless told otherwise.
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.trim().eq_ignore_ascii_case("false") => PayloadEncoding::Raw,
            _ => PayloadEncoding::Base64,
        }
    }
}

/// Turns payload text into the raw HTTP message bytes.
pub trait PayloadDecoder {
    fn decode(&self, text: &str, encoding: PayloadEncoding) -> Result<Vec<u8>, BoxError>;
}

impl<D: PayloadDecoder + ?Sized> PayloadDecoder for &D {
    fn decode(&self, text: &str, encoding: PayloadEncoding) -> Result<Vec<u8>, BoxError> {
        (**self).decode(text, encoding)
    }
}

/// Standard-alphabet base64 decoder; whitespace inside the text is ignored.
#[derive(Debug, Default, Clone, Copy)]
pub struct Base64Decoder;

impl PayloadDecoder for Base64Decoder {
    fn decode(&self, text: &str, encoding: PayloadEncoding) -> Result<Vec<u8>, BoxError> {
        match encoding {
            PayloadEncoding::Raw => Ok(text.as_bytes().to_vec()),
            PayloadEncoding::Base64 => {
                let compact: String = text.chars().filter(|c| !c.is_ascii_whitespace()).collect();
                Ok(STANDARD.decode(compact)?)
            }
        }
    }
}
