use chardetng::EncodingDetector;
use encoding_rs::Encoding;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedHtml {
    pub html: String,
    pub encoding_label: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("failed to decode bytes as {encoding}")]
    DecodeFailure { encoding: String },
}

/// Decode raw file bytes into UTF-8, picking the encoding by BOM first and
/// chardetng detection otherwise. Local files carry no transport charset,
/// so byte-level detection is the only hint available.
pub fn decode_html(bytes: &[u8]) -> Result<DecodedHtml, DecodeError> {
    let encoding = match Encoding::for_bom(bytes) {
        Some((encoding, _bom_len)) => encoding,
        None => {
            let mut detector = EncodingDetector::new();
            detector.feed(bytes, true);
            detector.guess(None, true)
        }
    };

    let (text, _, had_errors) = encoding.decode(bytes);
    if had_errors {
        return Err(DecodeError::DecodeFailure {
            encoding: encoding.name().to_string(),
        });
    }
    Ok(DecodedHtml {
        html: text.into_owned(),
        encoding_label: encoding.name().to_string(),
    })
}
