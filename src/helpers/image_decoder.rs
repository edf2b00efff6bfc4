use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use crate::enums::analyze_error::AnalyzeError;

const DATA_URL_MARKER: &str = ";base64,";

/// Decodes the `image` field of an analysis request into raw bytes.
///
/// Accepts plain base64 or a `data:<mime>;base64,` URL. Line breaks and other
/// whitespace inside the payload are ignored. Content is not inspected, so any
/// decodable payload passes.
pub fn decode_image(encoded: &str) -> Result<Vec<u8>, AnalyzeError> {
    let payload = strip_data_url(encoded.trim());
    if payload.is_empty() {
        return Err(AnalyzeError::NoImageData);
    }

    let compact: String = payload.chars().filter(|c| !c.is_ascii_whitespace()).collect();

    STANDARD
        .decode(compact.as_bytes())
        .map_err(|_| AnalyzeError::InvalidBase64)
}

fn strip_data_url(encoded: &str) -> &str {
    if !encoded.starts_with("data:") {
        return encoded;
    }

    encoded
        .find(DATA_URL_MARKER)
        .map_or(encoded, |idx| &encoded[idx + DATA_URL_MARKER.len()..])
}
